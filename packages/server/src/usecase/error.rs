//! UseCase error types.

use thiserror::Error;

use crate::domain::RepositoryError;

/// 参加者登録のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    #[error("participant '{0}' is already registered")]
    NameTaken(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// heartbeat のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeartbeatError {
    #[error("participant '{0}' is not registered")]
    NotRegistered(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// メッセージ送信のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendMessageError {
    #[error("sender '{0}' is not registered")]
    SenderNotRegistered(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// 退室処理（sweep）全体のエラー
///
/// 参加者ごとの失敗はここには含まれず、`EvictionReport::failed` に数えられる。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvictError {
    #[error("previous sweep is still running")]
    AlreadyRunning,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
