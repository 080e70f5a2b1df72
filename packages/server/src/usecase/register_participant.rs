//! UseCase: 参加者登録処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RegisterParticipantUseCase::execute() メソッド
//! - 参加者の登録（重複チェック、入室通知メッセージの追加）
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規参加者の登録
//! - 異常系：同名の参加者の登録試行
//! - 異常系：同名の登録が並行した場合（ストアの一意制約で 1 件だけ成功）
//! - 異常系：入室通知の保存失敗（参加者は残る。ロールバックしない）

use std::sync::Arc;

use lounge_shared::time::Clock;

use crate::domain::{
    ChatMessage, MessageRepository, Participant, ParticipantName, ParticipantRepository,
    RepositoryError, Timestamp,
};

use super::error::RegisterError;

/// 参加者登録のユースケース
pub struct RegisterParticipantUseCase {
    participant_repository: Arc<dyn ParticipantRepository>,
    message_repository: Arc<dyn MessageRepository>,
    clock: Arc<dyn Clock>,
}

impl RegisterParticipantUseCase {
    /// 新しい RegisterParticipantUseCase を作成
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

    /// 参加者登録を実行
    ///
    /// 参加者を追加した後、全員宛ての入室通知（status）を追加する。
    /// 2 つの書き込みはトランザクションではないため、通知の保存に失敗した場合は
    /// 参加者だけが残り、エラーが返される。
    ///
    /// # Returns
    ///
    /// * `Ok(Participant)` - 登録された参加者
    /// * `Err(RegisterError::NameTaken)` - 同名の参加者が既に存在する
    pub async fn execute(&self, name: ParticipantName) -> Result<Participant, RegisterError> {
        // 1. 重複チェック
        if self.participant_repository.find_by_name(&name).await?.is_some() {
            return Err(RegisterError::NameTaken(name.into_string()));
        }

        // 2. 参加者を追加（ストアのユニーク制約が競合する登録を弾く）
        let now = Timestamp::new(self.clock.now_millis());
        let participant = Participant::new(name.clone(), now);
        self.participant_repository
            .insert(participant.clone())
            .await
            .map_err(|e| match e {
                RepositoryError::DuplicateParticipantName(taken) => RegisterError::NameTaken(taken),
                other => RegisterError::Repository(other),
            })?;

        // 3. 入室通知を追加
        if let Err(e) = self
            .message_repository
            .insert(ChatMessage::joined(name, now))
            .await
        {
            tracing::error!(
                "Participant '{}' registered but join notice was not stored: {}",
                participant.name,
                e
            );
            return Err(e.into());
        }

        tracing::info!("Participant '{}' registered", participant.name);
        Ok(participant)
    }
}
