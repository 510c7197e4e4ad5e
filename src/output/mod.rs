pub mod fancy;
pub mod fields;
pub mod ip;
pub mod json;
pub mod simple;

pub use fancy::format_fancy_output;
pub use fields::{FieldSelection, format_fields_output};
pub use ip::format_ip_output;
pub use json::format_json_output;
pub use simple::format_simple_output;

use crate::status::{SiteState, StatusRecord};

/// A parsed record together with its classification and check time
pub struct CheckResult {
    pub record: StatusRecord,
    pub state: SiteState,
    pub checked_at: String,
}

impl CheckResult {
    pub fn new(record: StatusRecord, checked_at: String) -> Self {
        let state = SiteState::classify(&record);
        Self {
            record,
            state,
            checked_at,
        }
    }
}

/// `200 OK`, or just the code when no reason phrase is known
pub(crate) fn http_code_with_reason(record: &StatusRecord) -> String {
    match record.reason_phrase() {
        Some(reason) => format!("{} {}", record.http_code, reason),
        None => record.http_code.clone(),
    }
}
