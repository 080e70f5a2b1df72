//! `/status` handler.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
};

use crate::ui::{error::ApiError, state::AppState};

use super::requester_from_headers;

/// `POST /status`: presence heartbeat for the `user` header identity
pub async fn heartbeat(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let Some(name) = requester_from_headers(&headers) else {
        return Err(ApiError::NotFound("missing user header".to_string()));
    };

    state.heartbeat_usecase.execute(&name).await?;

    Ok(StatusCode::OK)
}
