use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::constants::{APP_NAME, APP_VERSION};

/// `iiu/<version>`, sent so the status service can identify the client
pub fn user_agent() -> String {
    format!("{}/{}", APP_NAME, APP_VERSION)
}

/// Default headers attached to every request
pub fn default_headers() -> HeaderMap {
    let mut header_map = HeaderMap::new();
    match HeaderValue::from_str(&user_agent()) {
        Ok(value) => {
            header_map.insert(USER_AGENT, value);
        }
        Err(e) => tracing::warn!("Invalid User-Agent header value: {}", e),
    }
    header_map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_names_app_and_version() {
        assert_eq!(user_agent(), format!("iiu/{}", env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_default_headers() {
        let header_map = default_headers();
        assert_eq!(header_map.len(), 1);
        assert_eq!(
            header_map.get("User-Agent").unwrap(),
            user_agent().as_str()
        );
    }
}
