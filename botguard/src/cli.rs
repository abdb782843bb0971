//! This file defines the command-line interface (CLI) for the botguard application,
//! including all available commands and their arguments.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "botguard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Sanitize untrusted bot input",
    long_about = "botguard applies one sanitization or validation step to untrusted text (comments, labels, commands, repository names, git refs, environment entries, model output) and writes the result to stdout.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Path to a sanitizer configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", global = true, help = "Path to a sanitizer configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// The bot handle whose mentions are stripped. Overrides BOT_USERNAME and the config file.
    #[arg(long = "bot-name", value_name = "NAME", global = true, help = "Bot handle to strip mentions of (overrides BOT_USERNAME).")]
    pub bot_name: Option<String>,

    /// Suppress all informational and debug messages.
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `botguard` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Turns @bot mentions into the bare bot name.
    #[command(about = "Turn @bot mentions into the bare bot name.")]
    Mentions(TextInput),

    /// Strips shell metacharacters from command input.
    #[command(name = "command", about = "Strip shell metacharacters from command input.")]
    Shell(TextInput),

    /// Undoes backslash-escaping in model-generated markdown.
    #[command(about = "Undo backslash-escaping in model-generated markdown.")]
    Unescape(TextInput),

    /// Filters labels down to the allowed character set, one per output line.
    #[command(about = "Filter labels to the allowed character set, one per output line.")]
    Labels {
        /// Labels to sanitize. None yields no output.
        #[arg(value_name = "LABEL")]
        labels: Vec<String>,
    },

    /// Exits 0 if the repository name is valid, 1 otherwise.
    #[command(name = "validate-repo", about = "Exit 0 if the repository name is valid, 1 otherwise.")]
    ValidateRepo {
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Exits 0 if the git ref is valid, 1 otherwise.
    #[command(name = "validate-ref", about = "Exit 0 if the git ref is valid, 1 otherwise.")]
    ValidateRef {
        #[arg(value_name = "REF")]
        reference: String,
    },

    /// Redacts secret-bearing KEY=VALUE entries.
    #[command(about = "Redact secret-bearing KEY=VALUE entries from stdin or the process environment.")]
    Env(EnvCommand),
}

impl Commands {
    /// The subcommand name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Mentions(_) => "mentions",
            Commands::Shell(_) => "command",
            Commands::Unescape(_) => "unescape",
            Commands::Labels { .. } => "labels",
            Commands::ValidateRepo { .. } => "validate-repo",
            Commands::ValidateRef { .. } => "validate-ref",
            Commands::Env(_) => "env",
        }
    }
}

/// A single text value, given inline or read from stdin.
#[derive(Args, Debug)]
pub struct TextInput {
    /// The text to process (reads from stdin if not provided).
    #[arg(value_name = "TEXT", help = "The text to process (reads stdin if omitted).")]
    pub text: Option<String>,
}

/// Arguments for the `env` command.
#[derive(Args, Debug)]
pub struct EnvCommand {
    /// Read the current process environment instead of stdin.
    #[arg(long = "process", help = "Read the current process environment instead of stdin.")]
    pub process: bool,

    /// Print entries and counts as JSON.
    #[arg(long = "json", help = "Print entries and counts as JSON.")]
    pub json: bool,
}
