//! InMemory Message Repository 実装

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ChatMessage, MessageRepository, RepositoryError};

/// インメモリ Message Repository 実装（追記のみ）
#[derive(Default)]
pub struct InMemoryMessageRepository {
    /// `messages` コレクション（挿入順）
    messages: Mutex<Vec<ChatMessage>>,
}

impl InMemoryMessageRepository {
    /// 新しい InMemoryMessageRepository を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn insert(&self, message: ChatMessage) -> Result<(), RepositoryError> {
        let mut messages = self.messages.lock().await;
        messages.push(message);
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<ChatMessage>, RepositoryError> {
        let messages = self.messages.lock().await;
        Ok(messages.clone())
    }
}
