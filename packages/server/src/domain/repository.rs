//! Repository trait 定義
//!
//! ドメイン層が必要とするドキュメントストアへのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。
//!
//! 各メソッドは単一ドキュメントに対してアトミックであることだけを要求します。
//! 複数ドキュメントにまたがる操作のトランザクションは提供しません。

use async_trait::async_trait;

use super::{ChatMessage, Participant, ParticipantName, RepositoryError, Timestamp};

/// `participants` コレクション（name でユニーク）
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// name で参加者を検索
    async fn find_by_name(
        &self,
        name: &ParticipantName,
    ) -> Result<Option<Participant>, RepositoryError>;

    /// 参加者を追加
    ///
    /// 同名の参加者が既に存在する場合は `RepositoryError::DuplicateParticipantName`
    async fn insert(&self, participant: Participant) -> Result<(), RepositoryError>;

    /// 全参加者をストアの格納順で取得
    async fn find_all(&self) -> Result<Vec<Participant>, RepositoryError>;

    /// last_activity を更新。参加者が存在しなければ `Ok(false)`
    async fn touch(&self, name: &ParticipantName, at: Timestamp) -> Result<bool, RepositoryError>;

    /// last_activity が `cutoff` より前の場合に限り参加者を削除
    ///
    /// 削除した場合は `Ok(true)`。直前に heartbeat が反映されていれば削除しない。
    async fn remove_if_inactive(
        &self,
        name: &ParticipantName,
        cutoff: Timestamp,
    ) -> Result<bool, RepositoryError>;
}

/// `messages` コレクション（追記のみ、挿入順）
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// メッセージを追加
    async fn insert(&self, message: ChatMessage) -> Result<(), RepositoryError>;

    /// 全メッセージを挿入順（古い順）で取得
    async fn find_all(&self) -> Result<Vec<ChatMessage>, RepositoryError>;
}
