//! Test harness exports.

use assert_cmd::Command;

pub fn figuras_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("figuras"));
    cmd.env_remove("RUST_LOG")
        .env_remove("FIGURAS_LOG")
        .env_remove("FIGURAS_LOG_FORMAT")
        .env_remove("FIGURAS_LOG_LEVEL")
        .env("NO_COLOR", "1");
    cmd
}

/// Joins menu answers into stdin text, one per line.
pub fn script(lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    input
}

pub const STORED_HEADER: &str = "Resultados almacenados:";
