//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - 送信者の登録確認、時刻のスタンプ、メッセージの保存
//!
//! ### どのような状況を想定しているか
//! - 正常系：登録済み参加者からの全員宛て・個人宛てメッセージ
//! - 異常系：未登録の送信者（メッセージは保存されない）

use std::sync::Arc;

use lounge_shared::time::Clock;

use crate::domain::{
    ChatMessage, MessageDraft, MessageRepository, ParticipantName, ParticipantRepository,
    Timestamp,
};

use super::error::SendMessageError;

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    participant_repository: Arc<dyn ParticipantRepository>,
    message_repository: Arc<dyn MessageRepository>,
    clock: Arc<dyn Clock>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(
        participant_repository: Arc<dyn ParticipantRepository>,
        message_repository: Arc<dyn MessageRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            participant_repository,
            message_repository,
            clock,
        }
    }

    /// メッセージ送信を実行
    ///
    /// # Arguments
    ///
    /// * `from` - 送信者（`user` ヘッダー）
    /// * `draft` - 検証済みのメッセージ本文・宛先・種別
    ///
    /// # Returns
    ///
    /// * `Ok(ChatMessage)` - 保存されたメッセージ
    /// * `Err(SendMessageError::SenderNotRegistered)` - 送信者が未登録
    pub async fn execute(
        &self,
        from: ParticipantName,
        draft: MessageDraft,
    ) -> Result<ChatMessage, SendMessageError> {
        // 1. 送信者が登録済みかチェック
        if self.participant_repository.find_by_name(&from).await?.is_none() {
            return Err(SendMessageError::SenderNotRegistered(from.into_string()));
        }

        // 2. 時刻をスタンプして保存
        let message = draft.into_message(from, Timestamp::new(self.clock.now_millis()));
        self.message_repository.insert(message.clone()).await?;

        tracing::debug!(
            "Message from '{}' to '{}' stored ({})",
            message.from,
            message.to.as_str(),
            message.kind.as_str()
        );
        Ok(message)
    }
}
