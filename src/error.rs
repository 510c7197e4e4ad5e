use reqwest::StatusCode;
use thiserror::Error;

use crate::constants::{EXIT_FAILURE, EXIT_USAGE, RESPONSE_FIELD_COUNT};

#[derive(Error, Debug)]
pub enum IiuError {
    #[error("[ERROR: -u missing] The -u [URL] argument must be used.")]
    MissingUrl,

    #[error("[ERROR] Option {0} is not valid.")]
    InvalidFieldCode(String),

    #[error("ERROR: Option l can not be used alone.")]
    LabelOnly,

    #[error("Remote service unavailable: {0}")]
    RemoteUnavailable(#[from] reqwest::Error),

    #[error("Remote service returned HTTP {0}")]
    RemoteStatus(StatusCode),

    #[error("Remote service returned a body that is not valid UTF-8")]
    InvalidEncoding,

    #[error(
        "Malformed remote response: expected {expected} fields, found {found}",
        expected = RESPONSE_FIELD_COUNT
    )]
    MalformedResponse { found: usize },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl IiuError {
    /// Errors the user can fix by changing the invocation
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            IiuError::MissingUrl | IiuError::InvalidFieldCode(_) | IiuError::LabelOnly
        )
    }

    pub fn exit_code(&self) -> u8 {
        if self.is_usage() {
            EXIT_USAGE
        } else {
            EXIT_FAILURE
        }
    }
}

pub type Result<T> = std::result::Result<T, IiuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_errors_exit_one() {
        assert_eq!(IiuError::MissingUrl.exit_code(), 1);
        assert_eq!(IiuError::InvalidFieldCode("x".into()).exit_code(), 1);
        assert_eq!(IiuError::LabelOnly.exit_code(), 1);
    }

    #[test]
    fn test_remote_errors_exit_two() {
        assert_eq!(IiuError::InvalidEncoding.exit_code(), 2);
        assert_eq!(IiuError::MalformedResponse { found: 3 }.exit_code(), 2);
        assert_eq!(
            IiuError::RemoteStatus(StatusCode::SERVICE_UNAVAILABLE).exit_code(),
            2
        );
    }

    #[test]
    fn test_malformed_message_names_counts() {
        let msg = IiuError::MalformedResponse { found: 4 }.to_string();
        assert!(msg.contains("expected 6 fields"));
        assert!(msg.contains("found 4"));
    }
}
