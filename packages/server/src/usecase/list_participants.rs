//! UseCase: 参加者一覧取得

use std::sync::Arc;

use crate::domain::{Participant, ParticipantRepository, RepositoryError};

/// 参加者一覧取得のユースケース
pub struct ListParticipantsUseCase {
    participant_repository: Arc<dyn ParticipantRepository>,
}

impl ListParticipantsUseCase {
    pub fn new(participant_repository: Arc<dyn ParticipantRepository>) -> Self {
        Self {
            participant_repository,
        }
    }

    /// 全参加者をストアの格納順で返す（フィルタ・ページングなし）
    pub async fn execute(&self) -> Result<Vec<Participant>, RepositoryError> {
        self.participant_repository.find_all().await
    }
}
