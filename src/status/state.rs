use std::fmt;

use serde::Serialize;

use crate::constants::NULL_TOKEN;
use crate::status::StatusRecord;

/// Reachability of the checked site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SiteState {
    Up,
    /// DNS resolved but the site never answered.
    Down,
    /// The service could not resolve the domain and echoed it back as the IP.
    Nonresponsive,
}

impl SiteState {
    pub fn classify(record: &StatusRecord) -> Self {
        if record.domain == record.response_ip {
            SiteState::Nonresponsive
        } else if record.response_time == NULL_TOKEN && record.http_code == NULL_TOKEN {
            SiteState::Down
        } else {
            SiteState::Up
        }
    }

    pub fn is_up(self) -> bool {
        self == SiteState::Up
    }
}

impl fmt::Display for SiteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SiteState::Up => "UP",
            SiteState::Down => "DOWN",
            SiteState::Nonresponsive => "NONRESPONSIVE",
        };
        f.write_str(label)
    }
}
