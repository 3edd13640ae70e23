//! Process configuration for the model gateway.
//!
//! Built once at startup and passed by value into constructors; nothing here
//! is read from globals after that.

use std::time::Duration;

use crate::error::ConfigError;

/// Environment variable holding the model-service credential.
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Default Gemini API URL.
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default generation model.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default per-request timeout for the model service.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Immutable settings for talking to the text-generation service.
#[derive(Clone)]
pub struct GatewayConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base_url: String,
    pub timeout: Duration,
}

impl GatewayConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The credential, if one was supplied and is not blank.
    pub fn credential(&self) -> Result<&str, ConfigError> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingCredential(API_KEY_ENV))
    }

    /// Reject settings that can never produce a working client.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::invalid("model", "must not be empty"));
        }
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://") {
            return Err(ConfigError::invalid(
                "api_base_url",
                format!("'{}' is not an http(s) URL", self.api_base_url),
            ));
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::invalid("timeout", "must be greater than zero"));
        }
        Ok(())
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

// The key never shows up in logs.
impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("api_base_url", &self.api_base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_key_is_missing() {
        let config = GatewayConfig::new(Some("   ".to_string()));
        assert!(matches!(
            config.credential(),
            Err(ConfigError::MissingCredential(API_KEY_ENV))
        ));
        assert!(GatewayConfig::default().credential().is_err());
    }

    #[test]
    fn test_credential_is_trimmed() {
        let config = GatewayConfig::new(Some(" abc123 \n".to_string()));
        assert_eq!(config.credential().unwrap(), "abc123");
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let config = GatewayConfig::default().with_api_base_url("http://localhost:8080/");
        assert_eq!(config.api_base_url, "http://localhost:8080");
    }

    #[test]
    fn test_validate() {
        assert!(GatewayConfig::default().validate().is_ok());
        assert!(GatewayConfig::default().with_model(" ").validate().is_err());
        assert!(GatewayConfig::default()
            .with_api_base_url("ftp://example.com")
            .validate()
            .is_err());
        assert!(GatewayConfig::default()
            .with_timeout(Duration::ZERO)
            .validate()
            .is_err());
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = GatewayConfig::new(Some("super-secret".to_string()));
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
