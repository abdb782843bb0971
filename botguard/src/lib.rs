// botguard/src/lib.rs
//! # botguard CLI
//!
//! Command-line front end for `botguard-core`. Each subcommand reads one untrusted
//! value (argument or stdin), applies one transform, and writes the result to stdout,
//! so shell glue in an automation pipeline can call the core without linking Rust.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod settings;
pub mod ui;
