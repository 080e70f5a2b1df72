//! `/participants` handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    domain::{ParticipantName, ValidationError},
    infrastructure::dto::http::{ParticipantDto, RegisterParticipantRequest},
    ui::{error::ApiError, state::AppState},
};

/// `POST /participants`
pub async fn register_participant(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RegisterParticipantRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(request) =
        payload.map_err(|e| ValidationError::MalformedBody(e.body_text()))?;
    let name = ParticipantName::try_from(request)?;

    state.register_participant_usecase.execute(name).await?;

    Ok(StatusCode::CREATED)
}

/// `GET /participants`
pub async fn list_participants(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ParticipantDto>>, ApiError> {
    let participants = state.list_participants_usecase.execute().await?;

    // Domain Model から DTO への変換
    Ok(Json(participants.into_iter().map(Into::into).collect()))
}
