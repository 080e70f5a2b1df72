//! UseCase: 非アクティブ参加者の退室処理（eviction sweep）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - EvictInactiveParticipantsUseCase::execute() メソッド
//! - cutoff（現在時刻 - inactivity_timeout）より前に活動した参加者の削除と退室通知
//!
//! ### なぜこのテストが必要か
//! - 1 人の削除失敗が他の参加者の退室処理を止めないことを保証
//! - 境界直前に heartbeat した参加者が残ることを保証
//! - sweep の多重実行を防ぐ
//!
//! ### どのような状況を想定しているか
//! - 正常系：stale な参加者のみ削除され、1 人につき 1 件の退室通知
//! - 異常系：一部の参加者の削除・通知保存に失敗
//! - エッジケース：前回の sweep が実行中

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use lounge_shared::time::Clock;

use crate::domain::{
    ChatMessage, MessageRepository, Participant, ParticipantName, ParticipantRepository,
    RepositoryError, Timestamp,
};

use super::error::EvictError;

/// sweep 1 回分の結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvictionReport {
    /// 削除され、退室通知が追加された参加者
    pub evicted: Vec<ParticipantName>,
    /// 削除または退室通知の保存に失敗した参加者の数
    pub failed: usize,
}

/// 非アクティブ参加者の退室処理のユースケース
pub struct EvictInactiveParticipantsUseCase {
    participant_repository: Arc<dyn ParticipantRepository>,
    message_repository: Arc<dyn MessageRepository>,
    clock: Arc<dyn Clock>,
    /// この時間より長く活動のない参加者を退室させる
    inactivity_timeout: Duration,
    /// sweep 実行中フラグ
    in_progress: AtomicBool,
}

/// Clears the in-progress flag when the sweep ends, including on cancellation.
struct InProgressGuard<'a>(&'a AtomicBool);

impl Drop for InProgressGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl EvictInactiveParticipantsUseCase {
    /// 新しい EvictInactiveParticipantsUseCase を作成
    pub fn new(
        participant_repository: Arc<dyn ParticipantRepository>,
        message_repository: Arc<dyn MessageRepository>,
        clock: Arc<dyn Clock>,
        inactivity_timeout: Duration,
    ) -> Self {
        Self {
            participant_repository,
            message_repository,
            clock,
            inactivity_timeout,
            in_progress: AtomicBool::new(false),
        }
    }

    pub fn inactivity_timeout(&self) -> Duration {
        self.inactivity_timeout
    }

    /// sweep を 1 回実行
    ///
    /// 参加者ごとの失敗はログに記録して次の参加者に進み、`EvictionReport::failed`
    /// に数える。参加者一覧の取得自体に失敗した場合のみ `Err` を返す。
    ///
    /// # Returns
    ///
    /// * `Ok(EvictionReport)` - sweep の結果
    /// * `Err(EvictError::AlreadyRunning)` - 前回の sweep が実行中
    /// * `Err(EvictError::Repository)` - 参加者一覧の取得に失敗
    pub async fn execute(&self) -> Result<EvictionReport, EvictError> {
        if self.in_progress.swap(true, Ordering::AcqRel) {
            return Err(EvictError::AlreadyRunning);
        }
        let _guard = InProgressGuard(&self.in_progress);

        let now = Timestamp::new(self.clock.now_millis());
        let timeout_millis = i64::try_from(self.inactivity_timeout.as_millis()).unwrap_or(i64::MAX);
        let cutoff = now.saturating_sub_millis(timeout_millis);

        let participants = self.participant_repository.find_all().await?;

        let mut report = EvictionReport::default();
        for participant in participants
            .into_iter()
            .filter(|p| p.is_inactive_since(cutoff))
        {
            let name = participant.name.clone();
            match self.evict(participant, cutoff, now).await {
                Ok(true) => {
                    tracing::info!("Participant '{}' evicted after inactivity", name);
                    report.evicted.push(name);
                }
                Ok(false) => {
                    tracing::debug!("Participant '{}' refreshed or gone before eviction", name);
                }
                Err(e) => {
                    tracing::error!("Failed to evict participant '{}': {}", name, e);
                    report.failed += 1;
                }
            }
        }

        Ok(report)
    }

    /// 1 人分の退室処理。heartbeat が先に反映されていれば何もしない。
    async fn evict(
        &self,
        participant: Participant,
        cutoff: Timestamp,
        now: Timestamp,
    ) -> Result<bool, RepositoryError> {
        if !self
            .participant_repository
            .remove_if_inactive(&participant.name, cutoff)
            .await?
        {
            return Ok(false);
        }
        self.message_repository
            .insert(ChatMessage::left(participant.name, now))
            .await?;
        Ok(true)
    }
}
