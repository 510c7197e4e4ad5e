use chrono::Local;

use crate::constants::TIMESTAMP_FORMAT;

/// Local wall-clock time stamp, e.g. `2014-06-01 13:37:00`
pub fn time_stamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
