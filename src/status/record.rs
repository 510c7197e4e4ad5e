use crate::constants::{FIELD_DELIMITER, NULL_TOKEN, RESPONSE_FIELD_COUNT};
use crate::error::{IiuError, Result};

/// One check result as reported by the status service.
///
/// The service answers with `domain, port, status, ip, http_code, time`.
/// Every field is kept as text: the service echoes the domain into `port`
/// and `response_ip` when it cannot resolve a host, and uses `NULL` for
/// absent values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRecord {
    pub domain: String,
    pub port: String,
    pub status_code: String,
    pub response_ip: String,
    pub http_code: String,
    pub response_time: String,
}

impl StatusRecord {
    /// Parse a raw response body into a record.
    pub fn parse(body: &str) -> Result<Self> {
        let fields: Vec<String> = body
            .split_ascii_whitespace()
            .map(|token| token.strip_suffix(FIELD_DELIMITER).unwrap_or(token).to_string())
            .collect();

        let fields: [String; RESPONSE_FIELD_COUNT] = fields
            .try_into()
            .map_err(|fields: Vec<String>| IiuError::MalformedResponse {
                found: fields.len(),
            })?;

        Ok(Self::from_fields(fields))
    }

    pub fn from_fields(fields: [String; RESPONSE_FIELD_COUNT]) -> Self {
        let [domain, port, status_code, response_ip, http_code, response_time] = fields;
        Self {
            domain,
            port,
            status_code,
            response_ip,
            http_code,
            response_time,
        }
    }

    pub fn status(&self) -> Option<&str> {
        non_null(&self.status_code)
    }

    pub fn ip(&self) -> Option<&str> {
        non_null(&self.response_ip)
    }

    pub fn http(&self) -> Option<&str> {
        non_null(&self.http_code)
    }

    pub fn time(&self) -> Option<&str> {
        non_null(&self.response_time)
    }

    /// Standard reason phrase for the site's HTTP code, if it has one.
    pub fn reason_phrase(&self) -> Option<&'static str> {
        let code = self.http()?.parse::<u16>().ok()?;
        reqwest::StatusCode::from_u16(code).ok()?.canonical_reason()
    }
}

fn non_null(value: &str) -> Option<&str> {
    (value != NULL_TOKEN).then_some(value)
}

#[cfg(test)]
pub(crate) fn record(fields: [&str; RESPONSE_FIELD_COUNT]) -> StatusRecord {
    StatusRecord::from_fields(fields.map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_trailing_commas() {
        let parsed = StatusRecord::parse("a, b, c, d, e, f").unwrap();
        assert_eq!(parsed, record(["a", "b", "c", "d", "e", "f"]));
    }

    #[test]
    fn test_parse_service_response() {
        let parsed =
            StatusRecord::parse("example.com, 80, 1, 93.184.216.34, 200, 0.041\n").unwrap();
        assert_eq!(parsed.domain, "example.com");
        assert_eq!(parsed.port, "80");
        assert_eq!(parsed.status_code, "1");
        assert_eq!(parsed.response_ip, "93.184.216.34");
        assert_eq!(parsed.http_code, "200");
        assert_eq!(parsed.response_time, "0.041");
    }

    #[test]
    fn test_parse_last_token_with_comma() {
        let parsed = StatusRecord::parse("a, b, c, d, e, f,").unwrap();
        assert_eq!(parsed.response_time, "f");
    }

    #[test]
    fn test_parse_tokens_without_commas() {
        let parsed = StatusRecord::parse("a b, c d e f").unwrap();
        assert_eq!(parsed, record(["a", "b", "c", "d", "e", "f"]));
    }

    #[test]
    fn test_parse_strips_only_one_comma() {
        let parsed = StatusRecord::parse("a,, b, c, d, e, f").unwrap();
        assert_eq!(parsed.domain, "a,");
    }

    #[test]
    fn test_parse_keeps_internal_punctuation() {
        let parsed = StatusRecord::parse("sub.example.co.uk, 80, 1, 10.0.0.1, 301, 0.104").unwrap();
        assert_eq!(parsed.domain, "sub.example.co.uk");
        assert_eq!(parsed.response_ip, "10.0.0.1");
    }

    #[test]
    fn test_parse_too_few_fields() {
        let err = StatusRecord::parse("example.com, 80, 1").unwrap_err();
        assert!(matches!(err, IiuError::MalformedResponse { found: 3 }));
    }

    #[test]
    fn test_parse_too_many_fields() {
        let err = StatusRecord::parse("a, b, c, d, e, f, g").unwrap_err();
        assert!(matches!(err, IiuError::MalformedResponse { found: 7 }));
    }

    #[test]
    fn test_parse_splits_on_ascii_whitespace_only() {
        let parsed = StatusRecord::parse("a,\tb,\r\nc, d,  e,\x0cf").unwrap();
        assert_eq!(parsed, record(["a", "b", "c", "d", "e", "f"]));

        let err = StatusRecord::parse("a,\u{a0}b, c, d, e, f").unwrap_err();
        assert!(matches!(err, IiuError::MalformedResponse { found: 5 }));
    }

    #[test]
    fn test_parse_empty_body() {
        let err = StatusRecord::parse("").unwrap_err();
        assert!(matches!(err, IiuError::MalformedResponse { found: 0 }));
    }

    #[test]
    fn test_null_accessors() {
        let r = record(["example.com", "80", "1", "93.184.216.34", "NULL", "NULL"]);
        assert_eq!(r.ip(), Some("93.184.216.34"));
        assert_eq!(r.http(), None);
        assert_eq!(r.time(), None);
        assert_eq!(r.reason_phrase(), None);
    }

    #[test]
    fn test_reason_phrase() {
        let r = record(["example.com", "80", "1", "93.184.216.34", "301", "0.1"]);
        assert_eq!(r.reason_phrase(), Some("Moved Permanently"));

        let r = record(["example.com", "80", "1", "93.184.216.34", "599", "0.1"]);
        assert_eq!(r.reason_phrase(), None);

        let r = record(["example.com", "80", "1", "93.184.216.34", "abc", "0.1"]);
        assert_eq!(r.reason_phrase(), None);
    }
}
