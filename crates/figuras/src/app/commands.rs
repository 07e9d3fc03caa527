use clap::Parser;

const LONG_ABOUT: &str = r#"figuras is an interactive calculator for plane shapes.

Pick a shape (circle, square, triangle, rectangle, pentagon), then an
operation (area, perimeter, or power) and type the values it asks for.
Every result is kept and listed again when you leave with option 0.

The session reads from stdin, so it can also be scripted:

    printf '1\n1\n2\n0\n' | figuras

ENVIRONMENT:
    FIGURAS_LOG          Write logs to this file instead of stderr
    FIGURAS_LOG_FORMAT   Log format: text (default) or json
    FIGURAS_LOG_LEVEL    Default log level when RUST_LOG is unset
    RUST_LOG             Full tracing filter, overrides the level above
    NO_COLOR             Disable colored messages"#;

#[derive(Debug, Parser)]
#[command(name = "figuras")]
#[command(author, version)]
#[command(about = "Interactive area, perimeter and power calculator")]
#[command(long_about = LONG_ABOUT)]
pub struct Cli {
    /// Disable colored output (any non-empty NO_COLOR also works)
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
