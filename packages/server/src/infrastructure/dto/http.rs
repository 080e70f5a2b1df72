//! HTTP API DTOs.

use serde::{Deserialize, Serialize};

/// `POST /participants` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterParticipantRequest {
    pub name: String,
}

/// `POST /messages` body
///
/// `type` is kept as a raw string so that unknown values are reported as
/// validation failures rather than deserialization errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostMessageRequest {
    pub to: String,
    pub text: String,
    pub r#type: String,
}

/// `GET /messages` query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListMessagesQuery {
    pub limit: Option<String>,
}

/// Participant as returned by `GET /participants`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub id: String,
    pub name: String,
    /// Unix timestamp (milliseconds)
    pub last_activity: i64,
}

/// Message as returned by `GET /messages`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDto {
    pub id: String,
    pub from: String,
    pub to: String,
    pub text: String,
    pub r#type: String,
    /// `HH:MM:SS` (JST)
    pub time: String,
}
