//! `env`: redacts secret-bearing entries from a `KEY=VALUE` listing or the process
//! environment. Only key names ever reach the log.

use anyhow::{Context, Result};
use botguard_core::Sanitizer;
use is_terminal::IsTerminal;
use log::debug;
use serde::Serialize;
use std::io::{self, Read, Write};

use crate::cli::EnvCommand;
use crate::ui::output_format;

#[derive(Debug, Serialize)]
struct EnvEntry<'a> {
    key: &'a str,
    value: &'a str,
}

#[derive(Debug, Serialize)]
struct EnvReport<'a> {
    total: usize,
    redacted: usize,
    entries: Vec<EnvEntry<'a>>,
}

/// Entries parsed from a `KEY=VALUE` listing, plus the 1-based numbers of the
/// lines that were not entries.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParsedEnv {
    pub pairs: Vec<(String, String)>,
    pub skipped_lines: Vec<usize>,
}

/// Drops a shell `export` keyword followed by any whitespace.
fn strip_export(line: &str) -> &str {
    match line.strip_prefix("export") {
        Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim_start(),
        _ => line,
    }
}

/// Parses `KEY=VALUE` lines, as found in `.env` files or `env` output.
///
/// Blank lines and `#` comments are ignored, an `export` prefix is dropped, and
/// the value is everything after the first `=`. Lines without a key are reported
/// by line number only, since their content could be part of a secret.
pub fn parse_env_lines(input: &str) -> ParsedEnv {
    let mut parsed = ParsedEnv::default();
    for (idx, raw_line) in input.lines().enumerate() {
        let line = raw_line.trim_end_matches('\r');
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match strip_export(trimmed).split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                parsed.pairs.push((key.trim().to_string(), value.to_string()));
            }
            _ => parsed.skipped_lines.push(idx + 1),
        }
    }
    parsed
}

fn process_environment() -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = std::env::vars_os()
        .map(|(k, v)| (k.to_string_lossy().into_owned(), v.to_string_lossy().into_owned()))
        .collect();
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    pairs
}

/// Runs the `env` subcommand.
pub fn run_env<R: Read, W: Write>(
    sanitizer: &Sanitizer,
    args: &EnvCommand,
    quiet: bool,
    stdin: &mut R,
    out: &mut W,
) -> Result<()> {
    let stderr_supports_color = io::stderr().is_terminal();
    let pairs = if args.process {
        debug!("Reading entries from the process environment.");
        process_environment()
    } else {
        let mut buf = String::new();
        stdin.read_to_string(&mut buf).context("Failed to read input from stdin")?;
        let parsed = parse_env_lines(&buf);
        debug!("Skipped {} non-entry line(s).", parsed.skipped_lines.len());
        if !quiet {
            for line in &parsed.skipped_lines {
                let _ = output_format::print_warn_message(
                    &mut io::stderr(),
                    &format!("Skipping line {}: not a KEY=VALUE entry.", line),
                    stderr_supports_color,
                );
            }
        }
        parsed.pairs
    };

    let (redacted, summary) = sanitizer.redact_environment(pairs);

    if args.json {
        let report = EnvReport {
            total: summary.total,
            redacted: summary.redacted(),
            entries: redacted
                .iter()
                .map(|(key, value)| EnvEntry { key, value })
                .collect(),
        };
        serde_json::to_writer_pretty(&mut *out, &report).context("Failed to serialize env report")?;
        writeln!(out)?;
    } else {
        for (key, value) in &redacted {
            writeln!(out, "{}={}", key, value)?;
        }
    }

    if !quiet {
        let _ = output_format::print_info_message(
            &mut io::stderr(),
            &format!("Redacted {} of {} entries.", summary.redacted(), summary.total),
            stderr_supports_color,
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_lines() {
        let input = "# comment\n\nPORT=8080\nexport API_TOKEN=abc=def\r\nnot an entry\n=novalue\n  EMPTY=\n";
        let parsed = parse_env_lines(input);
        assert_eq!(
            parsed.pairs,
            vec![
                ("PORT".to_string(), "8080".to_string()),
                ("API_TOKEN".to_string(), "abc=def".to_string()),
                ("EMPTY".to_string(), String::new()),
            ]
        );
        assert_eq!(parsed.skipped_lines, vec![5, 6]);
    }

    #[test]
    fn test_parse_env_lines_export_with_any_whitespace() {
        let input = "export\tAPI_TOKEN=x\nexport   PORT=1\nexported=yes\nexport\n";
        let parsed = parse_env_lines(input);
        assert_eq!(
            parsed.pairs,
            vec![
                ("API_TOKEN".to_string(), "x".to_string()),
                ("PORT".to_string(), "1".to_string()),
                ("exported".to_string(), "yes".to_string()),
            ]
        );
        assert_eq!(parsed.skipped_lines, vec![4]);
    }

    #[test]
    fn test_run_env_plain_output() {
        let sanitizer = Sanitizer::with_defaults().unwrap();
        let args = EnvCommand { process: false, json: false };
        let mut out = Vec::new();
        run_env(&sanitizer, &args, true, &mut "PORT=8080\nDB_PASSWORD=hunter2\n".as_bytes(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "PORT=8080\nDB_PASSWORD=[REDACTED]\n");
    }

    #[test]
    fn test_run_env_json_output() {
        let sanitizer = Sanitizer::with_defaults().unwrap();
        let args = EnvCommand { process: false, json: true };
        let mut out = Vec::new();
        run_env(&sanitizer, &args, true, &mut "SECRET_X=1\nHOME=/root\n".as_bytes(), &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["total"], 2);
        assert_eq!(value["redacted"], 1);
        assert_eq!(value["entries"][0]["value"], "[REDACTED]");
        assert_eq!(value["entries"][1]["value"], "/root");
    }
}
