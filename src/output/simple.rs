use colored::*;

use crate::output::CheckResult;
use crate::status::SiteState;

/// Format a check as a single line
pub fn format_simple_output(check: &CheckResult, colored: bool) -> String {
    let record = &check.record;
    match check.state {
        SiteState::Nonresponsive => {
            let domain = if colored {
                record.domain.red().to_string()
            } else {
                record.domain.clone()
            };
            format!("{} Domain: {} is down\n", check.checked_at, domain)
        }
        SiteState::Down => {
            let domain = if colored {
                record.domain.red().to_string()
            } else {
                record.domain.clone()
            };
            format!(
                "{} Domain {}, returned an IP but is down\n",
                check.checked_at, domain
            )
        }
        SiteState::Up => {
            let reason_str = record
                .reason_phrase()
                .map(|reason| format!(" {}", reason))
                .unwrap_or_default();
            let http_str = format!("{}{}", record.http_code, reason_str);

            if colored {
                let colored_http = match record.http().and_then(|c| c.chars().next()) {
                    Some('2') => http_str.green(),
                    Some('3') => http_str.yellow(),
                    _ => http_str.red(),
                };
                format!(
                    "{} Domain: {} ({}) Response Time: {} HTTP: {}\n",
                    check.checked_at,
                    record.domain.cyan(),
                    record.response_ip.magenta(),
                    record.response_time.blue(),
                    colored_http
                )
            } else {
                format!(
                    "{} Domain: {} ({}) Response Time: {} HTTP: {}\n",
                    check.checked_at,
                    record.domain,
                    record.response_ip,
                    record.response_time,
                    http_str
                )
            }
        }
    }
}
