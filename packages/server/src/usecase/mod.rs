//! UseCase layer
//!
//! Presence Registry（参加者の登録・heartbeat・非アクティブ参加者の退室処理）と
//! Message Router（メッセージ送信・可視性フィルタ付き取得）のユースケース。

mod error;
mod evict_inactive_participants;
mod heartbeat;
mod list_messages;
mod list_participants;
mod register_participant;
mod send_message;

pub use error::{EvictError, HeartbeatError, RegisterError, SendMessageError};
pub use evict_inactive_participants::{EvictInactiveParticipantsUseCase, EvictionReport};
pub use heartbeat::HeartbeatUseCase;
pub use list_messages::ListMessagesUseCase;
pub use list_participants::ListParticipantsUseCase;
pub use register_participant::RegisterParticipantUseCase;
pub use send_message::SendMessageUseCase;
