//! Value objects
//!
//! 入力値の検証はすべてここで行います。HTTP 層の DTO はこれらの
//! コンストラクタを通してドメインモデルに変換されます。

use std::{
    fmt,
    num::{IntErrorKind, NonZeroUsize},
    str::FromStr,
};

use uuid::Uuid;

use super::error::ValidationError;

/// Recipient sentinel meaning "broadcast to all participants"
pub const BROADCAST_RECIPIENT: &str = "Todos";

/// Document id assigned by the store on insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unix timestamp in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Timestamp `millis` earlier, saturating at `i64::MIN`
    pub fn saturating_sub_millis(&self, millis: i64) -> Self {
        Self(self.0.saturating_sub(millis))
    }
}

/// Participant name (trimmed, non-empty)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParticipantName(String);

impl ParticipantName {
    pub fn new(value: String) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyParticipantName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ParticipantName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for ParticipantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Message recipient: everyone, or one named participant
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Recipient {
    Everyone,
    Participant(ParticipantName),
}

impl Recipient {
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.trim() == BROADCAST_RECIPIENT {
            return Ok(Self::Everyone);
        }
        ParticipantName::new(value)
            .map(Self::Participant)
            .map_err(|_| ValidationError::EmptyRecipient)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Everyone => BROADCAST_RECIPIENT,
            Self::Participant(name) => name.as_str(),
        }
    }

    pub fn is_participant(&self, name: &ParticipantName) -> bool {
        matches!(self, Self::Participant(to) if to == name)
    }
}

impl TryFrom<String> for Recipient {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Message body (not blank)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageText(String);

impl MessageText {
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyMessageText);
        }
        Ok(Self(value))
    }

    /// Fixed system notice text, known to be non-blank
    pub(super) fn notice(value: &'static str) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for MessageText {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Message type
///
/// `Status` is used for join/leave notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Public,
    Private,
    Status,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Status => "status",
        }
    }

    /// Broadcast content is visible to every requester
    pub fn is_broadcast(&self) -> bool {
        matches!(self, Self::Public | Self::Status)
    }
}

impl FromStr for MessageKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Self::Public),
            "private" => Ok(Self::Private),
            "status" => Ok(Self::Status),
            other => Err(ValidationError::UnknownMessageKind(other.to_string())),
        }
    }
}

/// Tail limit for message listings (positive integer)
///
/// Values beyond `usize::MAX` saturate, since no listing can be that long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageLimit(NonZeroUsize);

impl MessageLimit {
    pub fn new(value: usize) -> Result<Self, ValidationError> {
        NonZeroUsize::new(value)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidLimit(value.to_string()))
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl FromStr for MessageLimit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<NonZeroUsize>() {
            Ok(limit) => Ok(Self(limit)),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(Self(NonZeroUsize::MAX)),
            Err(_) => Err(ValidationError::InvalidLimit(s.to_string())),
        }
    }
}
