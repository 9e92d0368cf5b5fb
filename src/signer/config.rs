//! Configuration for INDX SDK

use crate::error::{IndxError, Result};
use crate::types::endpoints::{INDX_API_URL, TRADE_PATH};
use std::fmt;
use url::Url;

/// Configuration for INDX client
#[derive(Clone)]
pub struct Config {
    /// API base URL, up to and including the API version
    pub api_url: Url,

    /// Account login
    pub login: String,

    /// Account password, only used as signature input
    pub password: String,

    /// WMID of the trading account
    pub wmid: String,

    /// Request timeout in seconds, none by default
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Create a new configuration pointing at the production API
    ///
    /// # Arguments
    ///
    /// * `login` - Account login
    /// * `password` - Account password
    /// * `wmid` - WMID of the trading account
    pub fn new(
        login: impl Into<String>,
        password: impl Into<String>,
        wmid: impl Into<String>,
    ) -> Self {
        Self {
            api_url: default_api_url(),
            login: login.into(),
            password: password.into(),
            wmid: wmid.into(),
            timeout_secs: None,
        }
    }

    /// Point the client at another deployment (e.g. "http://127.0.0.1:8080/api/v2")
    pub fn with_api_url(mut self, api_url: &str) -> Result<Self> {
        let url = Url::parse(api_url).map_err(|_| IndxError::config("Invalid API URL"))?;
        match url.scheme() {
            "https" | "http" => {}
            _ => return Err(IndxError::config("Unsupported URL scheme")),
        }
        if url.cannot_be_a_base() {
            return Err(IndxError::config("API URL cannot be a base URL"));
        }
        self.api_url = url;
        Ok(self)
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Full URL of a trade endpoint, e.g. `<api_url>/trade/Balance`
    pub fn trade_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}/{}",
            self.api_url.as_str().trim_end_matches('/'),
            TRADE_PATH,
            endpoint.trim_start_matches('/')
        )
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url.as_str())
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .field("wmid", &self.wmid)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_api_url() -> Url {
    // Constant URL, always parses
    Url::parse(INDX_API_URL).unwrap_or_else(|_| unreachable!("INDX_API_URL is a valid URL"))
}
