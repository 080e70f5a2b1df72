//! Mapping of use case failures onto HTTP status codes.
//!
//! Every failure is answered with a status-only response. Store failures are
//! logged here and never leak detail to the caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    domain::{RepositoryError, ValidationError},
    usecase::{HeartbeatError, RegisterError, SendMessageError},
};

#[derive(Debug, Error)]
pub enum ApiError {
    /// 422
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// 422, for well-formed requests from an unknown sender
    #[error("{0}")]
    Unprocessable(String),

    /// 409
    #[error("{0}")]
    Conflict(String),

    /// 404
    #[error("{0}")]
    NotFound(String),

    /// 500
    #[error(transparent)]
    Store(#[from] RepositoryError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Store(e) => tracing::error!(error = ?e, "document store error"),
            other => tracing::debug!("Request rejected: {}", other),
        }
        self.status().into_response()
    }
}

impl From<RegisterError> for ApiError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::NameTaken(name) => {
                Self::Conflict(format!("participant '{}' is already registered", name))
            }
            RegisterError::Repository(e) => Self::Store(e),
        }
    }
}

impl From<HeartbeatError> for ApiError {
    fn from(error: HeartbeatError) -> Self {
        match error {
            HeartbeatError::NotRegistered(name) => {
                Self::NotFound(format!("participant '{}' is not registered", name))
            }
            HeartbeatError::Repository(e) => Self::Store(e),
        }
    }
}

impl From<SendMessageError> for ApiError {
    fn from(error: SendMessageError) -> Self {
        match error {
            SendMessageError::SenderNotRegistered(name) => {
                Self::Unprocessable(format!("sender '{}' is not registered", name))
            }
            SendMessageError::Repository(e) => Self::Store(e),
        }
    }
}
