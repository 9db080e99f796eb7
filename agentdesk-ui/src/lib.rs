//! agentdesk UI data layer.
//!
//! The views never touch wire DTOs. They call [`repos::StoreRepository`],
//! which goes through the [`agentdesk_api::StoreApi`] transport and hands
//! back the domain models from `agentdesk-core` via [`mappers`].

pub mod error;
pub mod mappers;
pub mod repos;
pub mod routes;
pub mod telemetry;

pub use error::{RepoError, RepoResult, UiError};
pub use repos::StoreRepository;
pub use routes::{resolve, Route, RouteTarget, View, ROUTES};
