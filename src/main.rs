//! Todofmt CLI entry point.

use std::process::ExitCode;

use clap::Parser;

use todofmt::cli::{handle_error, Cli};
use todofmt::infrastructure::logging::init_logging;
use todofmt::ConfigLoader;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = ConfigLoader::load(cli.config.as_deref()).and_then(|config| {
        init_logging(&config.logging)?;
        todofmt::cli::run(&cli, &config)
    });

    match result {
        Ok(rendered) => {
            if !rendered.is_empty() {
                println!("{rendered}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            handle_error(&err, cli.porcelain);
            ExitCode::FAILURE
        }
    }
}
