use std::time::Duration;

use crate::error::{LookupError, Result};

/// Default contents API host
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Settings for the GitHub-backed source
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Base URL of the REST API, without a trailing path
    pub api_base: String,
    /// Sent as `User-Agent`; GitHub rejects anonymous clients without one
    pub user_agent: String,
    /// Per-request timeout; `None` leaves it to the host environment
    pub timeout: Option<Duration>,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            user_agent: concat!("banner-lookup/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
        }
    }
}

impl LookupConfig {
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Reject settings that could never produce a request
    pub fn validate(&self) -> Result<()> {
        let base = self.api_base.trim();
        if base.is_empty() {
            return Err(LookupError::InvalidConfig {
                message: "api_base must not be empty".to_string(),
            });
        }
        if !base.starts_with("http://") && !base.starts_with("https://") {
            return Err(LookupError::InvalidConfig {
                message: format!("api_base must be an http(s) URL, got {}", base),
            });
        }
        Ok(())
    }
}
