//! UseCase: heartbeat（last_activity の更新）

use std::sync::Arc;

use lounge_shared::time::Clock;

use crate::domain::{ParticipantName, ParticipantRepository, Timestamp};

use super::error::HeartbeatError;

/// heartbeat のユースケース
pub struct HeartbeatUseCase {
    participant_repository: Arc<dyn ParticipantRepository>,
    clock: Arc<dyn Clock>,
}

impl HeartbeatUseCase {
    pub fn new(
        participant_repository: Arc<dyn ParticipantRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            participant_repository,
            clock,
        }
    }

    /// 参加者の last_activity を現在時刻に更新する（冪等）
    ///
    /// # Returns
    ///
    /// * `Ok(Timestamp)` - 更新後の last_activity
    /// * `Err(HeartbeatError::NotRegistered)` - 参加者が存在しない
    pub async fn execute(&self, name: &ParticipantName) -> Result<Timestamp, HeartbeatError> {
        let now = Timestamp::new(self.clock.now_millis());
        if !self.participant_repository.touch(name, now).await? {
            return Err(HeartbeatError::NotRegistered(name.as_str().to_string()));
        }
        tracing::debug!("Heartbeat from '{}'", name);
        Ok(now)
    }
}
