//! Configuration loading for the agent store client.
//!
//! `api_base_url` and `request_timeout_ms` are required; `auth` is optional
//! because the store runs unauthenticated on local deployments.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Timeout used by [`ClientConfig::new`].
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 15_000;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub request_timeout_ms: u64,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    pub api_key: Option<String>,
    pub jwt: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing configuration file path (use --config or AGENTDESK_CONFIG)")]
    MissingConfigPath,
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl ClientConfig {
    /// Programmatic configuration with the default timeout and no auth.
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            auth: AuthConfig::default(),
        }
    }

    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path_from_args().or_else(config_path_from_env);
        let path = path.ok_or(ConfigError::MissingConfigPath)?;
        let config = Self::from_path(&path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig = toml::from_str(contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.api_base_url.trim();
        if base.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api_base_url",
                reason: "must not be empty".to_string(),
            });
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api_base_url",
                reason: "must start with http:// or https://".to_string(),
            });
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if matches!(self.auth.api_key.as_deref(), Some(key) if key.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "auth.api_key",
                reason: "must not be empty when set".to_string(),
            });
        }
        if matches!(self.auth.jwt.as_deref(), Some(jwt) if jwt.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "auth.jwt",
                reason: "must not be empty when set".to_string(),
            });
        }
        Ok(())
    }

    /// Base URL without trailing slashes.
    pub fn base_url(&self) -> &str {
        self.api_base_url.trim().trim_end_matches('/')
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var("AGENTDESK_CONFIG").ok().map(PathBuf::from)
}

fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_toml() {
        let config = ClientConfig::from_toml(
            r#"
            api_base_url = "http://localhost:8000/"
            request_timeout_ms = 5000
            "#,
        )
        .unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.base_url(), "http://localhost:8000");
        assert_eq!(config.auth, AuthConfig::default());
    }

    #[test]
    fn parses_auth_section() {
        let config = ClientConfig::from_toml(
            r#"
            api_base_url = "https://store.internal"
            request_timeout_ms = 1000

            [auth]
            api_key = "k"
            "#,
        )
        .unwrap();
        assert_eq!(config.auth.api_key.as_deref(), Some("k"));
        assert!(config.auth.jwt.is_none());
    }

    #[test]
    fn rejects_unknown_fields() {
        let result = ClientConfig::from_toml(
            r#"
            api_base_url = "http://localhost:8000"
            request_timeout_ms = 5000
            retries = 3
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut config = ClientConfig::new("localhost:8000");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "api_base_url", .. })
        ));

        config.api_base_url = "http://localhost:8000".to_string();
        config.request_timeout_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "request_timeout_ms", .. })
        ));

        config.request_timeout_ms = 10;
        config.auth.jwt = Some("  ".to_string());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "auth.jwt", .. })
        ));
    }

    #[test]
    fn new_uses_default_timeout() {
        let config = ClientConfig::new("http://localhost:8000");
        assert_eq!(config.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
        assert!(config.validate().is_ok());
    }
}
