//! InMemory ドキュメントストア
//!
//! 1 回のロック取得で 1 ドキュメント操作を完結させることで、
//! 単一ドキュメント操作のアトミック性を保証します。

mod message;
mod participant;

pub use message::InMemoryMessageRepository;
pub use participant::InMemoryParticipantRepository;
