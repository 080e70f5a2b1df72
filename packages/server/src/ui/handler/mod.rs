//! HTTP endpoint handlers.

mod health;
mod messages;
mod participants;
mod status;

pub use health::health_check;
pub use messages::{list_messages, post_message};
pub use participants::{list_participants, register_participant};
pub use status::heartbeat;

use axum::http::HeaderMap;

use crate::domain::ParticipantName;

/// Caller identity header
pub const USER_HEADER: &str = "user";

/// Caller identity from the `user` header.
///
/// Missing, non-UTF-8 or blank values yield `None`.
fn requester_from_headers(headers: &HeaderMap) -> Option<ParticipantName> {
    headers
        .get(USER_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| ParticipantName::new(value.to_string()).ok())
}
