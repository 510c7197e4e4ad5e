use colored::*;

use crate::output::{CheckResult, http_code_with_reason};
use crate::status::SiteState;

const BANNER: &str = r"
                  _  _
                 (_)(_)
                  _  _  _   _
                 | || || | | |
                 | || || |_| |
                 |_||_| \__,_|

";

const RULE: &str = "---------------------------------------------------";

/// Multi-line report meant for people, not scripts
pub fn format_fancy_output(check: &CheckResult, colored: bool) -> String {
    let record = &check.record;

    let state_str = check.state.to_string();
    let state_str = if colored {
        match check.state {
            SiteState::Up => state_str.green().bold().to_string(),
            SiteState::Down => state_str.yellow().bold().to_string(),
            SiteState::Nonresponsive => state_str.red().bold().to_string(),
        }
    } else {
        state_str
    };

    let mut out = String::from(BANNER);
    out.push_str(&format!("                The site is {}\n", state_str));
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("        Domain ------------ {}\n", record.domain));
    out.push_str(&format!("        IP address -------- {}\n", record.response_ip));
    out.push_str(&format!("        Response time ----- {}\n", record.response_time));
    out.push_str(&format!(
        "        HTTP code --------- {}\n",
        http_code_with_reason(record)
    ));
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("        Current time: {}\n", check.checked_at));
    out.push_str(RULE);
    out.push_str("\n\n");
    out
}
