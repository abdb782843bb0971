//! Logger setup for the `botguard` binary.
//!
//! Logs go to stderr so stdout carries only sanitized output.

use log::LevelFilter;

/// Initializes `env_logger`.
///
/// `RUST_LOG` is honoured (defaulting to `warn`) unless `level` forces a filter.
/// Calling this more than once is harmless.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .try_init()
        .ok();
}

/// Resolves the `--quiet` / `--debug` flags into a forced level, if any.
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}
