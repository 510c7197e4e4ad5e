use serde::Serialize;

use crate::output::CheckResult;
use crate::status::SiteState;

#[derive(Serialize)]
struct JsonReport<'a> {
    domain: &'a str,
    port: &'a str,
    status_code: Option<&'a str>,
    ip: Option<&'a str>,
    http_code: Option<&'a str>,
    response_time: Option<&'a str>,
    state: SiteState,
    checked_at: &'a str,
}

/// Format a check as one JSON line; `NULL` fields become `null`
pub fn format_json_output(check: &CheckResult) -> String {
    let record = &check.record;
    let report = JsonReport {
        domain: &record.domain,
        port: &record.port,
        status_code: record.status(),
        ip: record.ip(),
        http_code: record.http(),
        response_time: record.time(),
        state: check.state,
        checked_at: &check.checked_at,
    };
    serde_json::to_string(&report).unwrap_or_default() + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::*;
    use serde_json::Value;

    #[test]
    fn test_format_json_up() {
        let output = format_json_output(&up());
        let value: Value = serde_json::from_str(output.trim_end()).unwrap();
        assert_eq!(value["domain"], "example.com");
        assert_eq!(value["port"], "80");
        assert_eq!(value["ip"], "93.184.216.34");
        assert_eq!(value["http_code"], "200");
        assert_eq!(value["response_time"], "0.041");
        assert_eq!(value["state"], "UP");
        assert_eq!(value["checked_at"], CHECKED_AT);
    }

    #[test]
    fn test_format_json_down_nulls() {
        let output = format_json_output(&down());
        let value: Value = serde_json::from_str(output.trim_end()).unwrap();
        assert_eq!(value["state"], "DOWN");
        assert!(value["http_code"].is_null());
        assert!(value["response_time"].is_null());
    }

    #[test]
    fn test_format_json_single_line() {
        let output = format_json_output(&nonresponsive());
        assert_eq!(output.matches('\n').count(), 1);
        assert!(output.contains("\"state\":\"NONRESPONSIVE\""));
    }
}
