//! Shared application state.

use std::sync::Arc;

use crate::usecase::{
    HeartbeatUseCase, ListMessagesUseCase, ListParticipantsUseCase, RegisterParticipantUseCase,
    SendMessageUseCase,
};

/// Shared application state
pub struct AppState {
    /// RegisterParticipantUseCase（参加者登録のユースケース）
    pub register_participant_usecase: Arc<RegisterParticipantUseCase>,
    /// ListParticipantsUseCase（参加者一覧取得のユースケース）
    pub list_participants_usecase: Arc<ListParticipantsUseCase>,
    /// HeartbeatUseCase（heartbeat のユースケース）
    pub heartbeat_usecase: Arc<HeartbeatUseCase>,
    /// SendMessageUseCase（メッセージ送信のユースケース）
    pub send_message_usecase: Arc<SendMessageUseCase>,
    /// ListMessagesUseCase（メッセージ取得のユースケース）
    pub list_messages_usecase: Arc<ListMessagesUseCase>,
}
