//! Command-line layer: display primitives, output modes and the demo binary.

pub mod commands;
pub mod display;
pub mod output;
pub mod types;

use anyhow::Result;

pub use output::{build_formatter, OutputMode, RecordFormatter};
pub use types::{Cli, Commands};

use crate::domain::models::Config;
use crate::services::DateTimeCodec;

/// Flags on the command line switch modes on; config can too.
pub fn resolve_mode(cli: &Cli, config: &Config) -> OutputMode {
    OutputMode::from_flags(
        cli.porcelain || config.formatting.porcelain,
        cli.humanize || config.formatting.humanize,
    )
}

/// Run one subcommand and return what it printed.
pub fn run(cli: &Cli, config: &Config) -> Result<String> {
    let mode = resolve_mode(cli, config);
    let formatter = build_formatter(mode, DateTimeCodec::new(&config.formatting)?);
    dispatch(&cli.command, formatter.as_ref())
}

/// Run a subcommand against an already-built formatter.
pub fn dispatch(command: &Commands, formatter: &dyn RecordFormatter) -> Result<String> {
    match command {
        Commands::List(args) => commands::list::execute(args, formatter),
        Commands::Show(args) => commands::show::execute(args, formatter),
        Commands::ParseDate(args) => commands::parse::execute_date(args, formatter),
        Commands::ParsePriority(args) => commands::parse::execute_priority(args, formatter),
    }
}

/// Report a failed command on stderr.
///
/// Porcelain callers get a JSON object so scripts can parse the failure.
pub fn handle_error(err: &anyhow::Error, porcelain: bool) {
    tracing::debug!(error = ?err, "command failed");
    if porcelain {
        let body = serde_json::json!({ "error": format!("{err:#}") });
        eprintln!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        use colored::Colorize;
        eprintln!("{} {err:#}", "\u{2717}".red().bold());
    }
}
