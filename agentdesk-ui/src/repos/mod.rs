//! Repository operations consumed by the views.
//!
//! Each operation is one store call: unwrap the envelope, map the DTO, and
//! fail only on transport errors or a missing single-entity body. List
//! operations never fail on the body's shape; they return `[]` instead.

use crate::error::{RepoError, RepoResult, UiError};
use agentdesk_api::{ClientConfig, Envelope, ListPayload, RestClient, StoreApi};
use std::sync::Arc;
use tracing::warn;

mod agents;
mod chats;
mod messages;
mod tools;

/// Entry point for every data operation of the UI.
///
/// Holds the transport explicitly; construct one per configured store and
/// share it (it is cheap to clone).
#[derive(Clone)]
pub struct StoreRepository {
    api: Arc<dyn StoreApi>,
}

impl StoreRepository {
    pub fn new(api: Arc<dyn StoreApi>) -> Self {
        Self { api }
    }

    /// Repository over the REST client described by `config`.
    pub fn from_config(config: &ClientConfig) -> RepoResult<Self> {
        let client = RestClient::new(config)?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Load the client config from `--config` / `AGENTDESK_CONFIG` and
    /// connect to it.
    pub fn from_env() -> Result<Self, UiError> {
        let config = ClientConfig::load()?;
        Ok(Self::from_config(&config)?)
    }

    pub fn api(&self) -> &dyn StoreApi {
        self.api.as_ref()
    }
}

/// Items of a list response; anything other than an array yields `[]`.
fn list_or_empty<T>(operation: &'static str, envelope: Envelope<ListPayload<T>>) -> Vec<T> {
    let status = envelope.status;
    match envelope.data {
        Some(ListPayload::Items(items)) => items,
        Some(ListPayload::Malformed(body)) => {
            warn!(operation, status, body = %body, "List response is not an array");
            Vec::new()
        }
        None => {
            warn!(operation, status, "List response has no body");
            Vec::new()
        }
    }
}

fn require<T>(operation: &'static str, envelope: Envelope<T>) -> RepoResult<T> {
    envelope
        .data
        .ok_or(RepoError::MissingData { operation })
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentdesk_api::ChatDto;
    use serde_json::json;

    #[test]
    fn list_or_empty_degrades() {
        let malformed: Envelope<ListPayload<ChatDto>> =
            Envelope::ok(ListPayload::Malformed(json!({"items": []})));
        assert!(list_or_empty("list chats", malformed).is_empty());
        assert!(list_or_empty::<ChatDto>("list chats", Envelope::empty(200)).is_empty());
    }

    #[test]
    fn require_names_operation() {
        let err = require::<ChatDto>("get chat", Envelope::empty(200)).unwrap_err();
        assert_eq!(err.to_string(), "no data returned for get chat");
    }
}
