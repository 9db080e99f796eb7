//! agentdesk API - wire contract and transport for the agent store.
//!
//! - [`types`]: request/response DTOs exactly as the store speaks them
//! - [`traits::StoreApi`]: one async method per store endpoint
//! - [`api_client::RestClient`]: reqwest implementation of `StoreApi`
//! - [`config::ClientConfig`]: TOML configuration for the client

pub mod api_client;
pub mod config;
pub mod traits;
pub mod types;

pub use api_client::{ApiClientError, RestClient};
pub use config::{AuthConfig, ClientConfig, ConfigError};
pub use traits::{EnvelopeResult, StoreApi};
pub use types::*;
