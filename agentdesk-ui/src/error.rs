//! Error types for the UI data layer.

use agentdesk_api::{ApiClientError, ConfigError};

/// Failure of a repository operation.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// The store answered successfully but without a body.
    #[error("no data returned for {operation}")]
    MissingData { operation: &'static str },
    #[error(transparent)]
    Transport(#[from] ApiClientError),
}

impl RepoError {
    /// Operation name for missing-data failures.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            RepoError::MissingData { operation } => Some(operation),
            RepoError::Transport(_) => None,
        }
    }
}

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Repo(#[from] RepoError),
    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_data_names_operation() {
        let err = RepoError::MissingData { operation: "get agent" };
        assert_eq!(err.to_string(), "no data returned for get agent");
        assert_eq!(err.operation(), Some("get agent"));
    }

    #[test]
    fn transport_errors_pass_through_unchanged() {
        let err: RepoError = ApiClientError::Status {
            status: 503,
            message: "unavailable".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "HTTP 503: unavailable");
        assert!(err.operation().is_none());
    }
}
