use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod constants;
mod error;
mod http;
mod output;
mod processor;
mod status;
mod types;
mod utils;

use crate::error::IiuError;
use crate::http::StatusClient;
use crate::output::fields::FIELD_CODES_HELP;
use crate::processor::{Terminal, run};
use crate::types::Cli;

const DEFAULT_LOG_FILTER: &str = "warn";

fn init_logging(ansi: bool) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    Ok(())
}

/// Log lines are only coloured for an interactive stderr
fn log_ansi(cli: &Cli, stderr_is_terminal: bool) -> bool {
    stderr_is_terminal && !cli.no_color
}

/// Write the diagnostic for a failed check; invalid field codes also get the code table
fn report<W: Write>(err: &IiuError, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", err)?;
    if let IiuError::InvalidFieldCode(_) = err {
        writeln!(out)?;
        writeln!(out, "{}", FIELD_CODES_HELP)?;
    }
    Ok(())
}

/// The URL is checked before the HTTP client is built
fn execute<W: Write>(cli: &Cli, terminal: Terminal, out: &mut W) -> error::Result<()> {
    if cli.url.is_none() {
        return Err(IiuError::MissingUrl);
    }
    let client = StatusClient::new(&cli.endpoint)?;
    run(cli, &client, terminal, out)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(log_ansi(&cli, io::stderr().is_terminal())) {
        eprintln!("[Warning] Could not initialise logging: {}", e);
    }

    let stdout = io::stdout();
    let is_terminal = stdout.is_terminal();
    let terminal = Terminal {
        colored: is_terminal && !cli.no_color,
        clear_screen: is_terminal,
    };
    if !terminal.colored {
        colored::control::set_override(false);
    }

    match execute(&cli, terminal, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Check failed: {:?}", e);
            if let Err(write_err) = report(&e, &mut io::stderr().lock()) {
                eprintln!("Error writing diagnostic: {}", write_err);
            }
            ExitCode::from(e.exit_code())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("iiu").chain(args.iter().copied())).unwrap()
    }

    fn report_to_string(err: &IiuError) -> String {
        let mut out = Vec::new();
        report(err, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_report_invalid_code_lists_valid_codes() {
        let output = report_to_string(&IiuError::InvalidFieldCode("x".to_string()));
        assert!(output.starts_with("[ERROR] Option x is not valid.\n"));
        assert!(output.contains(FIELD_CODES_HELP));
        let error_at = output.find("Option x").unwrap();
        let help_at = output.find(FIELD_CODES_HELP).unwrap();
        assert!(error_at < help_at);
    }

    #[test]
    fn test_report_other_errors_skip_code_table() {
        let output = report_to_string(&IiuError::LabelOnly);
        assert_eq!(output, "ERROR: Option l can not be used alone.\n");

        let output = report_to_string(&IiuError::MissingUrl);
        assert_eq!(
            output,
            "[ERROR: -u missing] The -u [URL] argument must be used.\n"
        );
        assert!(!output.contains(FIELD_CODES_HELP));
    }

    #[test]
    fn test_execute_reports_missing_url_first() {
        let args = cli(&["-f", "--endpoint", "not a url"]);
        let mut out = Vec::new();
        let err = execute(&args, Terminal::default(), &mut out).unwrap_err();
        assert!(matches!(err, IiuError::MissingUrl));
        assert_eq!(err.exit_code(), 1);
        assert!(out.is_empty());
    }

    #[test]
    fn test_log_ansi_follows_terminal_and_no_color() {
        assert!(log_ansi(&cli(&["-u", "example.com"]), true));
        assert!(!log_ansi(&cli(&["-u", "example.com"]), false));
        assert!(!log_ansi(&cli(&["--no-color", "-u", "example.com"]), true));
    }
}
