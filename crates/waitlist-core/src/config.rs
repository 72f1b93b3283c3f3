//! Waitlist service configuration.

use crate::{ConfigError, JOIN_WAITLIST_PATH};

/// Build-time environment variable holding the service base URL.
pub const BASE_URL_ENV: &str = "WAITLIST_BASE_URL";

/// Where the waitlist service lives.
///
/// Resolved once at startup and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistConfig {
    base_url: String,
}

impl WaitlistConfig {
    /// Create a configuration for the given base URL.
    ///
    /// Trailing slashes are dropped so the join path can be appended as is.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');

        if trimmed.is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }
        let host = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"));
        match host {
            Some(host) if !host.is_empty() => {}
            _ => return Err(ConfigError::InvalidBaseUrl(base_url)),
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Configuration baked in through `WAITLIST_BASE_URL` at compile time.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        match option_env!("WAITLIST_BASE_URL") {
            Some(url) => Self::new(url),
            None => Err(ConfigError::MissingBaseUrl),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the signup endpoint.
    pub fn join_url(&self) -> String {
        format!("{}{}", self.base_url, JOIN_WAITLIST_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        let config = WaitlistConfig::new("https://api.example.com").unwrap();
        assert_eq!(
            config.join_url(),
            "https://api.example.com/WaitLists/joinWaitList"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = WaitlistConfig::new("https://api.example.com/v1//").unwrap();
        assert_eq!(config.base_url(), "https://api.example.com/v1");
        assert_eq!(
            config.join_url(),
            "https://api.example.com/v1/WaitLists/joinWaitList"
        );
    }

    #[test]
    fn test_plain_http_allowed() {
        assert!(WaitlistConfig::new("http://localhost:3000").is_ok());
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(WaitlistConfig::new(""), Err(ConfigError::MissingBaseUrl));
        assert_eq!(WaitlistConfig::new(" / "), Err(ConfigError::MissingBaseUrl));
    }

    #[test]
    fn test_scheme_required() {
        assert_eq!(
            WaitlistConfig::new("api.example.com"),
            Err(ConfigError::InvalidBaseUrl("api.example.com".to_string()))
        );
        assert!(WaitlistConfig::new("https://").is_err());
        assert!(WaitlistConfig::new("ftp://files.example.com").is_err());
    }
}
