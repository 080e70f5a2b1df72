//! UseCase: メッセージ取得（可視性フィルタ・件数制限）

use std::sync::Arc;

use crate::domain::{
    ChatMessage, MessageLimit, MessageRepository, ParticipantName, RepositoryError,
};

/// メッセージ取得のユースケース
pub struct ListMessagesUseCase {
    message_repository: Arc<dyn MessageRepository>,
}

impl ListMessagesUseCase {
    pub fn new(message_repository: Arc<dyn MessageRepository>) -> Self {
        Self { message_repository }
    }

    /// `requester` が閲覧可能なメッセージを新しい順で返す
    ///
    /// `limit` が指定された場合は新しいものから `limit` 件のみ。
    /// `requester` が `None`（`user` ヘッダーなし）の場合は public / status のみ。
    pub async fn execute(
        &self,
        requester: Option<&ParticipantName>,
        limit: Option<MessageLimit>,
    ) -> Result<Vec<ChatMessage>, RepositoryError> {
        let messages = self.message_repository.find_all().await?;
        Ok(select_visible(messages, requester, limit))
    }
}

/// Filter `messages` (oldest first) down to what `requester` may see, newest first.
fn select_visible(
    messages: Vec<ChatMessage>,
    requester: Option<&ParticipantName>,
    limit: Option<MessageLimit>,
) -> Vec<ChatMessage> {
    let visible = messages
        .into_iter()
        .rev()
        .filter(|message| message.is_visible_to(requester));
    match limit {
        Some(limit) => visible.take(limit.get()).collect(),
        None => visible.collect(),
    }
}
