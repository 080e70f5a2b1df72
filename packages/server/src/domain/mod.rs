//! Domain layer: entities, value objects, repository interfaces.

pub mod entity;
pub mod error;
pub mod repository;
pub mod value_object;

pub use entity::{ChatMessage, MessageDraft, Participant};
pub use error::{RepositoryError, ValidationError};
pub use repository::{MessageRepository, ParticipantRepository};
#[cfg(test)]
pub use repository::{MockMessageRepository, MockParticipantRepository};
pub use value_object::{
    BROADCAST_RECIPIENT, DocumentId, MessageKind, MessageLimit, MessageText, ParticipantName,
    Recipient, Timestamp,
};
