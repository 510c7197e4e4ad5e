use reqwest::blocking::Client;
use tracing::debug;

use crate::constants::RESPONSE_SUFFIX;
use crate::error::{IiuError, Result};
use crate::http::headers::default_headers;

/// Anything that can answer a status lookup for a domain
pub trait StatusSource {
    /// Return the raw response body for `domain`.
    fn fetch(&self, domain: &str) -> Result<String>;
}

/// Blocking client for the status service
pub struct StatusClient {
    client: Client,
    endpoint: String,
}

impl StatusClient {
    pub fn new(endpoint: &str) -> Result<Self> {
        let client = Client::builder()
            .default_headers(default_headers())
            .no_proxy()
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn lookup_url(&self, domain: &str) -> String {
        format!("{}/{}{}", self.endpoint, domain, RESPONSE_SUFFIX)
    }
}

impl StatusSource for StatusClient {
    fn fetch(&self, domain: &str) -> Result<String> {
        let url = self.lookup_url(domain);
        debug!("Requesting {}", url);

        let resp = self.client.get(&url).send()?;
        let status = resp.status();
        if !status.is_success() {
            debug!("[{}] - Status service answered {}", url, status);
            return Err(IiuError::RemoteStatus(status));
        }

        let bytes = resp.bytes()?;
        let body = String::from_utf8(bytes.to_vec()).map_err(|_| IiuError::InvalidEncoding)?;
        debug!("Response body: {:?}", body);
        Ok(body)
    }
}
