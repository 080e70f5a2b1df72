//! InMemory Participant Repository 実装
//!
//! ドメイン層が定義する ParticipantRepository trait の具体的な実装。
//! 挿入順を保持するため Vec をコレクションとして使用します。

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    Participant, ParticipantName, ParticipantRepository, RepositoryError, Timestamp,
};

/// インメモリ Participant Repository 実装
#[derive(Default)]
pub struct InMemoryParticipantRepository {
    /// `participants` コレクション（挿入順）
    participants: Mutex<Vec<Participant>>,
}

impl InMemoryParticipantRepository {
    /// 新しい InMemoryParticipantRepository を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ParticipantRepository for InMemoryParticipantRepository {
    async fn find_by_name(
        &self,
        name: &ParticipantName,
    ) -> Result<Option<Participant>, RepositoryError> {
        let participants = self.participants.lock().await;
        Ok(participants.iter().find(|p| &p.name == name).cloned())
    }

    async fn insert(&self, participant: Participant) -> Result<(), RepositoryError> {
        let mut participants = self.participants.lock().await;
        // unique index on `name`
        if participants.iter().any(|p| p.name == participant.name) {
            return Err(RepositoryError::DuplicateParticipantName(
                participant.name.into_string(),
            ));
        }
        participants.push(participant);
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Participant>, RepositoryError> {
        let participants = self.participants.lock().await;
        Ok(participants.clone())
    }

    async fn touch(&self, name: &ParticipantName, at: Timestamp) -> Result<bool, RepositoryError> {
        let mut participants = self.participants.lock().await;
        match participants.iter_mut().find(|p| &p.name == name) {
            Some(participant) => {
                participant.last_activity = at;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove_if_inactive(
        &self,
        name: &ParticipantName,
        cutoff: Timestamp,
    ) -> Result<bool, RepositoryError> {
        let mut participants = self.participants.lock().await;
        let position = participants
            .iter()
            .position(|p| &p.name == name && p.is_inactive_since(cutoff));
        match position {
            Some(index) => {
                participants.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
