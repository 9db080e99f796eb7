//! Conversions between store DTOs and the domain models the views consume.
//!
//! `to_x` functions are total: missing ids become `""`, missing flags take
//! their documented default and missing free-form maps become `{}`.
//! `to_x_dto` functions build request bodies and keep the wire distinction
//! between an omitted key and an explicit `null`.

mod agent;
mod chat;
mod message;
mod tool;

pub use agent::*;
pub use chat::*;
pub use message::*;
pub use tool::*;

/// Ids are `""` in the domain when the store did not send one.
fn non_empty(id: &str) -> Option<String> {
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}
