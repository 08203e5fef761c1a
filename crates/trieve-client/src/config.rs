//! Client identity configuration
//!
//! Holds the long-lived, process-scoped state shared by every dispatch call:
//! API key, base URL, default organization id, debug flag, and the credential
//! inclusion policy. Created once at client construction and read-only for
//! the lifetime of the client.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{Error, Result};

/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "TRIEVE_API_KEY";
/// Environment variable holding the base URL
pub const ENV_BASE_URL: &str = "TRIEVE_BASE_URL";
/// Environment variable holding the default organization id
pub const ENV_ORGANIZATION_ID: &str = "TRIEVE_ORGANIZATION_ID";
/// Environment variable toggling request/response debug records
pub const ENV_DEBUG: &str = "TRIEVE_DEBUG";

/// Construction-time configuration for the dispatch client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API key sent as `Authorization: Bearer <key>` when non-empty
    pub api_key: Option<String>,
    /// Base URL prefixed verbatim onto every rendered endpoint path
    pub base_url: String,
    /// Default organization id injected as `TR-Organization` when a call
    /// supplies none of its own
    pub organization_id: Option<String>,
    /// Emit composed requests and normalized responses as debug records
    pub debug: bool,
    /// Disable the cookie store on the underlying HTTP client
    pub omit_credentials: bool,
}

impl ClientConfig {
    /// Create a configuration for the given base URL with everything else
    /// left at its default
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_key: None,
            base_url: base_url.into(),
            organization_id: None,
            debug: false,
            omit_credentials: false,
        }
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the default organization id
    pub fn with_organization_id(mut self, organization_id: impl Into<String>) -> Self {
        self.organization_id = Some(organization_id.into());
        self
    }

    /// Toggle debug record emission
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Toggle credential (cookie) inclusion
    pub fn with_omit_credentials(mut self, omit_credentials: bool) -> Self {
        self.omit_credentials = omit_credentials;
        self
    }

    /// Build a configuration from the process environment
    ///
    /// Loads a `.env` file when present, then reads `TRIEVE_BASE_URL`
    /// (required), `TRIEVE_API_KEY`, `TRIEVE_ORGANIZATION_ID`, and
    /// `TRIEVE_DEBUG`.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let base_url = std::env::var(ENV_BASE_URL).map_err(|_| Error::Configuration {
            message: format!("environment variable {} not found", ENV_BASE_URL),
            source: None,
        })?;

        let debug = std::env::var(ENV_DEBUG)
            .map(|v| matches!(v.as_str(), "1" | "true" | "TRUE"))
            .unwrap_or(false);

        Ok(Self {
            api_key: std::env::var(ENV_API_KEY).ok(),
            base_url,
            organization_id: std::env::var(ENV_ORGANIZATION_ID).ok(),
            debug,
            omit_credentials: false,
        })
    }

    /// Validate that the base URL parses as an absolute URL
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.base_url).map_err(|e| Error::Configuration {
            message: format!("invalid base URL: {}", self.base_url),
            source: Some(anyhow::anyhow!(e)),
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = ClientConfig::new("https://api.example.com");
        assert_eq!(config.base_url, "https://api.example.com");
        assert!(config.api_key.is_none());
        assert!(config.organization_id.is_none());
        assert!(!config.debug);
        assert!(!config.omit_credentials);
    }

    #[test]
    fn test_builder_chain() {
        let config = ClientConfig::new("https://api.example.com")
            .with_api_key("tr-key")
            .with_organization_id("org-1")
            .with_debug(true)
            .with_omit_credentials(true);
        assert_eq!(config.api_key.as_deref(), Some("tr-key"));
        assert_eq!(config.organization_id.as_deref(), Some("org-1"));
        assert!(config.debug);
        assert!(config.omit_credentials);
    }

    #[test]
    fn test_validate_rejects_relative_base_url() {
        let config = ClientConfig::new("not a url");
        assert!(config.validate().is_err());

        let config = ClientConfig::new("https://api.example.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_env_reads_variables() {
        // Save original env var values for restoration
        let original_base = std::env::var(ENV_BASE_URL).ok();
        let original_key = std::env::var(ENV_API_KEY).ok();
        let original_debug = std::env::var(ENV_DEBUG).ok();

        std::env::set_var(ENV_BASE_URL, "https://api.example.com");
        std::env::set_var(ENV_API_KEY, "tr-env-key");
        std::env::set_var(ENV_DEBUG, "true");

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.api_key.as_deref(), Some("tr-env-key"));
        assert!(config.debug);

        // Restore original environment state
        match original_base {
            Some(v) => std::env::set_var(ENV_BASE_URL, v),
            None => std::env::remove_var(ENV_BASE_URL),
        }
        match original_key {
            Some(v) => std::env::set_var(ENV_API_KEY, v),
            None => std::env::remove_var(ENV_API_KEY),
        }
        match original_debug {
            Some(v) => std::env::set_var(ENV_DEBUG, v),
            None => std::env::remove_var(ENV_DEBUG),
        }
    }

    #[test]
    fn test_dotenv_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let env_path = dir.path().join(".env");
        std::fs::write(&env_path, "TRIEVE_TEST_MARKER=from-dotenv\n").unwrap();

        dotenv::from_path(&env_path).unwrap();
        assert_eq!(
            std::env::var("TRIEVE_TEST_MARKER").unwrap(),
            "from-dotenv"
        );
        std::env::remove_var("TRIEVE_TEST_MARKER");
    }
}
