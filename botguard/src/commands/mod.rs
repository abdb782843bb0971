//! Subcommand implementations.

pub mod env;
pub mod transform;
pub mod validate;

use anyhow::{Context, Result};
use botguard_core::Sanitizer;
use log::debug;
use std::io::{self, Write};
use std::process::ExitCode;

use crate::cli::{Cli, Commands};
use crate::settings::resolve_config;
use transform::TextTransform;
use validate::Target;

/// Exit status for a name that fails validation.
pub const EXIT_INVALID: u8 = 1;

/// Builds the sanitizer for this run and dispatches to the chosen subcommand.
pub fn run(cli: Cli) -> Result<ExitCode> {
    let config = resolve_config(cli.config.as_deref(), cli.bot_name.clone())?;
    let sanitizer = Sanitizer::new(&config).context("Failed to build sanitizer")?;
    debug!("Dispatching subcommand '{}'.", cli.command.name());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut stdin = io::stdin();

    let valid = match cli.command {
        Commands::Mentions(input) => {
            transform::run_text(&sanitizer, TextTransform::Mentions, input.text, &mut stdin, &mut out)?;
            true
        }
        Commands::Shell(input) => {
            transform::run_text(&sanitizer, TextTransform::Command, input.text, &mut stdin, &mut out)?;
            true
        }
        Commands::Unescape(input) => {
            transform::run_text(&sanitizer, TextTransform::Unescape, input.text, &mut stdin, &mut out)?;
            true
        }
        Commands::Labels { labels } => {
            transform::run_labels(&sanitizer, &labels, &mut out)?;
            true
        }
        Commands::ValidateRepo { name } => {
            validate::run_validate(&sanitizer, Target::Repository, &name, cli.quiet, &mut out)?
        }
        Commands::ValidateRef { reference } => {
            validate::run_validate(&sanitizer, Target::GitRef, &reference, cli.quiet, &mut out)?
        }
        Commands::Env(args) => {
            env::run_env(&sanitizer, &args, cli.quiet, &mut stdin, &mut out)?;
            true
        }
    };
    out.flush()?;

    Ok(if valid { ExitCode::SUCCESS } else { ExitCode::from(EXIT_INVALID) })
}
