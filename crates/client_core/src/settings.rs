use std::time::Duration;

use thiserror::Error;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:35000/api";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_NAME: &str = "World";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid base url `{url}`: {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("base url `{0}` cannot carry path segments")]
    CannotBeABase(String),
}

/// Resolved client configuration shared by every dispatch.
///
/// A single timeout applies to all endpoints and methods; `None` disables it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    base_url: String,
    pub request_timeout: Option<Duration>,
    pub default_name: String,
}

impl ClientSettings {
    pub fn new(base_url: impl Into<String>) -> Result<Self, SettingsError> {
        let base_url = base_url.into();
        let parsed = Url::parse(base_url.trim()).map_err(|source| SettingsError::InvalidBaseUrl {
            url: base_url.clone(),
            source,
        })?;
        if parsed.cannot_be_a_base() {
            return Err(SettingsError::CannotBeABase(base_url));
        }

        Ok(Self {
            base_url: base_url.trim().to_string(),
            request_timeout: Some(DEFAULT_REQUEST_TIMEOUT),
            default_name: DEFAULT_NAME.to_string(),
        })
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_default_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.trim().is_empty() {
            self.default_name = name.trim().to_string();
        }
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Some(DEFAULT_REQUEST_TIMEOUT),
            default_name: DEFAULT_NAME.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
