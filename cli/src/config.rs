//! TOML configuration loading and validation.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use stockfighter::{ClientConfig, DEFAULT_BASE_URL};

use crate::error::{Error, Result};

/// Environment variable that overrides `api.key`.
pub const API_KEY_ENV: &str = "SF_API_KEY";

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}
fn default_timeout() -> u64 {
    30
}

/// Values used when a command leaves them out.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Defaults {
    pub venue: Option<String>,
    pub account: Option<String>,
}

impl Config {
    /// Load config from a TOML file, then apply the `SF_API_KEY` override.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut config: Config = toml::from_str(&contents)?;
        config.override_key(std::env::var(API_KEY_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    /// Parse from a TOML string without touching the environment.
    pub fn from_toml(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the API key when `key` is set and non-blank.
    pub fn override_key(&mut self, key: Option<String>) {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.api.key = key;
        }
    }

    /// Validate config invariants.
    fn validate(&self) -> Result<()> {
        if self.api.key.trim().is_empty() {
            return Err(Error::Config(format!(
                "api.key must not be empty (or set {API_KEY_ENV})"
            )));
        }
        if self.api.base_url.trim().is_empty() {
            return Err(Error::Config("api.base_url must not be empty".into()));
        }
        if self.api.timeout_secs == 0 {
            return Err(Error::Config("api.timeout_secs must be > 0".into()));
        }
        Ok(())
    }

    /// Client settings derived from this config.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api.key.trim())
            .with_base_url(self.api.base_url.trim())
            .with_timeout(Duration::from_secs(self.api.timeout_secs))
    }

    /// Venue from the command line, falling back to `[defaults]`.
    pub fn venue(&self, arg: Option<String>) -> Result<String> {
        arg.or_else(|| self.defaults.venue.clone())
            .ok_or(Error::MissingArgument("venue"))
    }

    /// Account from the command line, falling back to `[defaults]`.
    pub fn account(&self, arg: Option<String>) -> Result<String> {
        arg.or_else(|| self.defaults.account.clone())
            .ok_or(Error::MissingArgument("account"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_toml() -> &'static str {
        r#"
[api]
key = "abc123"
base_url = "http://localhost:8080/ob/api"
timeout_secs = 10

[defaults]
venue = "TESTEX"
account = "EXB123456"
"#
    }

    #[test]
    fn parse_example_config() {
        let config = Config::from_toml(example_toml()).unwrap();
        assert_eq!(config.api.key, "abc123");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.defaults.venue.as_deref(), Some("TESTEX"));
    }

    #[test]
    fn minimal_config_uses_defaults() {
        let config = Config::from_toml("[api]\nkey = \"k\"\n").unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout_secs, 30);
        assert!(config.defaults.venue.is_none());
    }

    #[test]
    fn validate_catches_missing_key() {
        assert!(matches!(
            Config::from_toml("[api]\n"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn validate_catches_zero_timeout() {
        let toml = example_toml().replace("timeout_secs = 10", "timeout_secs = 0");
        assert!(Config::from_toml(&toml).is_err());
    }

    #[test]
    fn override_key_ignores_blank() {
        let mut config = Config::from_toml(example_toml()).unwrap();
        config.override_key(Some("  ".into()));
        assert_eq!(config.api.key, "abc123");
        config.override_key(None);
        assert_eq!(config.api.key, "abc123");
        config.override_key(Some("from-env".into()));
        assert_eq!(config.api.key, "from-env");
    }

    #[test]
    fn client_config_carries_base_url() {
        let config = Config::from_toml(example_toml()).unwrap();
        let client = config.client_config();
        assert_eq!(client.base_url, "http://localhost:8080/ob/api");
        assert_eq!(client.timeout, Some(Duration::from_secs(10)));
        assert_eq!(client.api_key, "abc123");
    }

    #[test]
    fn argument_beats_default() {
        let config = Config::from_toml(example_toml()).unwrap();
        assert_eq!(config.venue(Some("OTHER".into())).unwrap(), "OTHER");
        assert_eq!(config.venue(None).unwrap(), "TESTEX");

        let bare = Config::from_toml("[api]\nkey = \"k\"\n").unwrap();
        assert!(matches!(
            bare.account(None),
            Err(Error::MissingArgument("account"))
        ));
    }

    #[test]
    fn debug_hides_key() {
        let config = Config::from_toml(example_toml()).unwrap();
        assert!(!format!("{config:?}").contains("abc123"));
    }
}
