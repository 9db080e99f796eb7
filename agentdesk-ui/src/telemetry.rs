//! Tracing subscriber setup.
//!
//! The data layer only emits `tracing` events; the embedding application
//! calls [`init_tracing`] once at startup to decide where they go.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::UiError;

/// Filter used when `AGENTDESK_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn,agentdesk=info";

/// Telemetry configuration from environment variables.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// `EnvFilter` directives, e.g. `agentdesk_ui=debug`
    pub filter: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            filter: std::env::var("AGENTDESK_LOG")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            json: std::env::var("AGENTDESK_LOG_FORMAT")
                .map(|s| s.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        }
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_tracing(config: &TelemetryConfig) -> Result<(), UiError> {
    let env_filter = EnvFilter::try_new(&config.filter)
        .map_err(|e| UiError::Telemetry(format!("Invalid log filter {:?}: {}", config.filter, e)))?;

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = if config.json {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer()).try_init()
    };
    result.map_err(|e| UiError::Telemetry(format!("Failed to init subscriber: {}", e)))?;

    tracing::info!(filter = %config.filter, json = config.json, "Telemetry initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EnvVarGuard {
        key: &'static str,
        original: Option<String>,
    }

    impl EnvVarGuard {
        fn set(key: &'static str, value: Option<&str>) -> Self {
            let original = std::env::var(key).ok();
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
            Self { key, original }
        }
    }

    impl Drop for EnvVarGuard {
        fn drop(&mut self) {
            match self.original.as_deref() {
                Some(v) => std::env::set_var(self.key, v),
                None => std::env::remove_var(self.key),
            }
        }
    }

    #[test]
    fn test_telemetry_config_from_env() {
        {
            let _log = EnvVarGuard::set("AGENTDESK_LOG", None);
            let _format = EnvVarGuard::set("AGENTDESK_LOG_FORMAT", None);
            let config = TelemetryConfig::default();
            assert_eq!(config.filter, DEFAULT_LOG_FILTER);
            assert!(!config.json);
        }
        {
            let _log = EnvVarGuard::set("AGENTDESK_LOG", Some("agentdesk_ui=debug"));
            let _format = EnvVarGuard::set("AGENTDESK_LOG_FORMAT", Some("JSON"));
            let config = TelemetryConfig::default();
            assert_eq!(config.filter, "agentdesk_ui=debug");
            assert!(config.json);
        }
    }

    #[test]
    fn test_invalid_filter_is_rejected() {
        let config = TelemetryConfig {
            filter: "agentdesk=loudest".to_string(),
            json: false,
        };
        assert!(matches!(init_tracing(&config), Err(UiError::Telemetry(_))));
    }

    #[test]
    fn test_second_init_fails() {
        let config = TelemetryConfig {
            filter: DEFAULT_LOG_FILTER.to_string(),
            json: true,
        };
        let _ = init_tracing(&config);
        assert!(init_tracing(&config).is_err());
    }
}
