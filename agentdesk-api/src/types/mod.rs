//! Wire Request and Response Types
//!
//! This module defines the DTOs exchanged with the agent store. Field names
//! follow the store's snake_case schema. Response DTOs are permissive (most
//! fields optional) because the store's OpenAPI schema is; request DTOs are
//! precise about which keys are omitted and which are sent as `null`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

// Agent types
mod agent;
pub use agent::*;

// Chat types
mod chat;
pub use chat::*;

// Message types
mod message;
pub use message::*;

// Tool types
mod tool;
pub use tool::*;

// ============================================================================
// RESPONSE WRAPPERS
// ============================================================================

/// Transport response wrapper: the decoded body (if any) plus the HTTP status.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    /// `None` when the response had no body or the body was JSON `null`.
    pub data: Option<T>,
    pub status: u16,
}

impl<T> Envelope<T> {
    pub fn new(data: Option<T>, status: u16) -> Self {
        Self { data, status }
    }

    pub fn ok(data: T) -> Self {
        Self::new(Some(data), 200)
    }

    pub fn empty(status: u16) -> Self {
        Self::new(None, status)
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

/// Body of a list endpoint.
///
/// List endpoints degrade gracefully: a body that is not an array lands in
/// `Malformed` instead of failing the request, and array elements that do not
/// decode as `T` are dropped one by one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Items(Vec<T>),
    Malformed(serde_json::Value),
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for ListPayload<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let elements = match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Array(elements) => elements,
            other => return Ok(ListPayload::Malformed(other)),
        };
        let items = elements
            .into_iter()
            .enumerate()
            .filter_map(|(index, element)| match serde_json::from_value(element) {
                Ok(item) => Some(item),
                Err(err) => {
                    tracing::warn!(index, error = %err, "Dropping undecodable list element");
                    None
                }
            })
            .collect();
        Ok(ListPayload::Items(items))
    }
}

impl<T> ListPayload<T> {
    pub fn into_items(self) -> Option<Vec<T>> {
        match self {
            ListPayload::Items(items) => Some(items),
            ListPayload::Malformed(_) => None,
        }
    }
}

impl<T> From<Vec<T>> for ListPayload<T> {
    fn from(items: Vec<T>) -> Self {
        ListPayload::Items(items)
    }
}

/// Error body returned by the store on non-2xx responses.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorBody {
    pub detail: serde_json::Value,
}

/// Decode an optional nested record, treating any shape that does not fit as
/// absent. The store persists `{}` for agents without a model configuration.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| serde_json::from_value(value).ok()))
}

/// Decode a field that the store may send as `null`, falling back to the
/// type's default.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
