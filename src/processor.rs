use std::io::Write;

use tracing::debug;

use crate::constants::CLEAR_SCREEN;
use crate::error::{IiuError, Result};
use crate::http::StatusSource;
use crate::output::{
    CheckResult, FieldSelection, format_fancy_output, format_fields_output, format_ip_output,
    format_json_output, format_simple_output,
};
use crate::status::StatusRecord;
use crate::types::{Cli, OutputMode};
use crate::utils::{normalize_domain, time_stamp};

/// Presentation settings decided by the caller, not by the flags
#[derive(Debug, Clone, Copy, Default)]
pub struct Terminal {
    pub colored: bool,
    pub clear_screen: bool,
}

/// Look up the site named on the command line and write one report to `out`
pub fn run<S, W>(cli: &Cli, source: &S, terminal: Terminal, out: &mut W) -> Result<()>
where
    S: StatusSource,
    W: Write,
{
    let url = cli.url.as_deref().ok_or(IiuError::MissingUrl)?;
    let domain = normalize_domain(url);

    let mode = cli.output_mode();
    debug!("Checking {} with {:?} output", domain, mode);

    // Field codes are validated before anything goes over the wire.
    let selection = match &mode {
        OutputMode::Fields(codes) => Some(FieldSelection::parse(codes)?),
        _ => None,
    };

    let check = check_domain(source, &domain)?;
    debug!("{} is {}", check.record.domain, check.state);

    let output_str = match (&mode, &selection) {
        (OutputMode::Fields(_), Some(selection)) => format_fields_output(&check, selection),
        (OutputMode::Fancy, _) => {
            let mut s = String::new();
            if terminal.clear_screen {
                s.push_str(CLEAR_SCREEN);
            }
            s.push_str(&format_fancy_output(&check, terminal.colored));
            s
        }
        (OutputMode::Ip, _) => format_ip_output(&check),
        (OutputMode::Json, _) => format_json_output(&check),
        _ => format_simple_output(&check, terminal.colored),
    };

    out.write_all(output_str.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Fetch, parse and classify a single domain
pub fn check_domain<S: StatusSource>(source: &S, domain: &str) -> Result<CheckResult> {
    let body = source.fetch(domain)?;
    let record = StatusRecord::parse(&body)?;
    Ok(CheckResult::new(record, time_stamp()))
}
