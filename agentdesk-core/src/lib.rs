//! agentdesk Core - Domain Types
//!
//! UI-facing data structures for agents, chats, messages and tools.
//! This crate contains ONLY data types and timestamp helpers - the wire
//! format lives in `agentdesk-api` and the mapping between the two lives in
//! `agentdesk-ui`.

use chrono::{DateTime, Utc};

pub mod entities;
pub mod enums;
pub mod time;

pub use entities::*;
pub use enums::*;
pub use time::{parse_timestamp, to_iso};

/// Timestamp type using UTC timezone.
pub type Timestamp = DateTime<Utc>;

/// Free-form JSON object used for `params`, `config` and tool arguments.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
