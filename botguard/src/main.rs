// botguard/src/main.rs
//! botguard entry point.
//!
//! Loads `.env`, initializes logging, then hands off to the chosen subcommand.

use anyhow::Result;
use botguard::cli::Cli;
use botguard::commands;
use botguard::logger;
use botguard::ui::output_format;
use clap::Parser;
use is_terminal::IsTerminal;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Cli::parse();

    // A missing .env file is the common case.
    let _ = dotenvy::dotenv();

    logger::init_logger(logger::level_from_flags(args.quiet, args.debug));

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            let stderr_supports_color = std::io::stderr().is_terminal();
            let _ = output_format::print_error_message(
                &mut std::io::stderr(),
                &format!("{:#}", e),
                stderr_supports_color,
            );
            ExitCode::from(2)
        }
    }
}

fn run(args: Cli) -> Result<ExitCode> {
    log::debug!("Starting botguard {}.", env!("CARGO_PKG_VERSION"));
    commands::run(args)
}
