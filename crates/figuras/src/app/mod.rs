#![expect(clippy::print_stderr, reason = "Fatal errors are reported here")]

//! CLI application layer and composition root wiring.

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use figuras_common::Colors;
use figuras_common::color_init;
use figuras_common::telemetry;
use figuras_usecases::CalculatorSession;
use figuras_usecases::ports::ConsoleError;
use tracing::debug;

pub mod commands;
pub mod config;

use crate::adapters::TracingObserver;
use crate::app::commands::Cli;
use crate::app::config::AppConfig;
use crate::infra::StdioConsole;

const PROGRAM_NAME: &str = "figuras";

/// Exit codes following sysexits.h.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const IOERR: i32 = 74;
}

pub struct Application;

impl Application {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self) -> Result<i32> {
        let exit_code = match self.execute() {
            Ok(()) => exit_codes::SUCCESS,
            Err(e) => self.handle_error(e),
        };
        Ok(exit_code)
    }

    fn execute(&self) -> Result<()> {
        let cli = Cli::parse();
        let config = AppConfig::from_cli(&cli);
        let _telemetry = telemetry::init_tracing(config.log_level());
        color_init(config.no_color());
        config.report_fallbacks();
        debug!(?config, "Configuration resolved");

        let session = CalculatorSession::new(StdioConsole::stdio(), TracingObserver);
        let outcome = session.run().context("calculator session failed")?;
        debug!(
            end = outcome.end.as_str(),
            results = outcome.results.len(),
            "Session finished"
        );
        Ok(())
    }

    fn handle_error(&self, e: anyhow::Error) -> i32 {
        eprintln!("{}: {} {:#}", PROGRAM_NAME, Colors::error("Error:"), e);
        exit_code_for(&e)
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

fn exit_code_for(error: &anyhow::Error) -> i32 {
    if find_error::<ConsoleError>(error).is_some() {
        exit_codes::IOERR
    } else {
        exit_codes::GENERAL_ERROR
    }
}

fn find_error<T: std::error::Error + 'static>(error: &anyhow::Error) -> Option<&T> {
    error.chain().find_map(|source| source.downcast_ref::<T>())
}
