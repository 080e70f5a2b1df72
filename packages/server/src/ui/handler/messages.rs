//! `/messages` handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{HeaderMap, StatusCode},
};

use crate::{
    domain::{MessageDraft, MessageLimit, ValidationError},
    infrastructure::dto::http::{ListMessagesQuery, MessageDto, PostMessageRequest},
    ui::{error::ApiError, state::AppState},
};

use super::requester_from_headers;

/// `POST /messages`
///
/// The body is validated before the sender is looked up, so malformed
/// messages are never persisted.
pub async fn post_message(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<PostMessageRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(request) =
        payload.map_err(|e| ValidationError::MalformedBody(e.body_text()))?;
    let draft = MessageDraft::try_from(request)?;

    let Some(from) = requester_from_headers(&headers) else {
        return Err(ApiError::Unprocessable("missing user header".to_string()));
    };

    state.send_message_usecase.execute(from, draft).await?;

    Ok(StatusCode::CREATED)
}

/// `GET /messages?limit=N`
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    query: Result<Query<ListMessagesQuery>, QueryRejection>,
) -> Result<Json<Vec<MessageDto>>, ApiError> {
    let Query(query) = query.map_err(|e| ValidationError::MalformedBody(e.body_text()))?;
    let limit = match query.limit.as_deref().filter(|raw| !raw.is_empty()) {
        Some(raw) => Some(raw.parse::<MessageLimit>()?),
        None => None,
    };
    let requester = requester_from_headers(&headers);

    let messages = state
        .list_messages_usecase
        .execute(requester.as_ref(), limit)
        .await?;

    // Domain Model から DTO への変換
    Ok(Json(messages.into_iter().map(Into::into).collect()))
}
