//! Domain entities.

use super::value_object::{
    DocumentId, MessageKind, MessageText, ParticipantName, Recipient, Timestamp,
};

const JOINED_NOTICE: &str = "entra na sala...";
const LEFT_NOTICE: &str = "sai da sala...";

/// Presence record of a registered participant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub id: DocumentId,
    pub name: ParticipantName,
    /// Last registration or heartbeat
    pub last_activity: Timestamp,
}

impl Participant {
    pub fn new(name: ParticipantName, last_activity: Timestamp) -> Self {
        Self {
            id: DocumentId::generate(),
            name,
            last_activity,
        }
    }

    /// `true` when the last activity happened strictly before `cutoff`
    pub fn is_inactive_since(&self, cutoff: Timestamp) -> bool {
        self.last_activity < cutoff
    }
}

/// Stored chat message. Never updated after insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: DocumentId,
    pub from: ParticipantName,
    pub to: Recipient,
    pub text: MessageText,
    pub kind: MessageKind,
    pub created_at: Timestamp,
}

impl ChatMessage {
    pub fn new(
        from: ParticipantName,
        to: Recipient,
        text: MessageText,
        kind: MessageKind,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id: DocumentId::generate(),
            from,
            to,
            text,
            kind,
            created_at,
        }
    }

    /// Status notice announcing that `name` entered the room
    pub fn joined(name: ParticipantName, created_at: Timestamp) -> Self {
        Self::status_notice(name, JOINED_NOTICE, created_at)
    }

    /// Status notice announcing that `name` left the room
    pub fn left(name: ParticipantName, created_at: Timestamp) -> Self {
        Self::status_notice(name, LEFT_NOTICE, created_at)
    }

    fn status_notice(name: ParticipantName, text: &'static str, created_at: Timestamp) -> Self {
        Self {
            id: DocumentId::generate(),
            from: name,
            to: Recipient::Everyone,
            text: MessageText::notice(text),
            kind: MessageKind::Status,
            created_at,
        }
    }

    /// Whether `requester` may see this message.
    ///
    /// Public and status messages are visible to everyone, including anonymous
    /// requesters. Private messages only to their sender and their recipient.
    pub fn is_visible_to(&self, requester: Option<&ParticipantName>) -> bool {
        if self.kind.is_broadcast() {
            return true;
        }
        match requester {
            Some(name) => &self.from == name || self.to.is_participant(name),
            None => false,
        }
    }
}

/// Client-submitted message content, validated but not yet stamped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDraft {
    pub to: Recipient,
    pub text: MessageText,
    pub kind: MessageKind,
}

impl MessageDraft {
    /// Stamp the draft with its sender and creation time
    pub fn into_message(self, from: ParticipantName, created_at: Timestamp) -> ChatMessage {
        ChatMessage::new(from, self.to, self.text, self.kind, created_at)
    }
}
