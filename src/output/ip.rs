use crate::output::CheckResult;
use crate::status::SiteState;

/// Format only the resolved IP address. No time-stamp, no labels.
pub fn format_ip_output(check: &CheckResult) -> String {
    match check.state {
        SiteState::Nonresponsive => format!("Domain: {} is down.\n", check.record.domain),
        SiteState::Down | SiteState::Up => format!("{}\n", check.record.response_ip),
    }
}
