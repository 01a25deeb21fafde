//! Message services - Endpoint HTTP per i messaggi

use crate::core::{AppError, AppPath, AppState, AuthUser};
use crate::dtos::{MessageEnvelope, SendMessageDTO};
use crate::entities::{MessageDetail, ReadReceipt, SentMessage};
use crate::services::message_access::MessageAccess;
use axum::{
    Extension,
    extract::{Json, State},
};
use std::sync::Arc;
use tracing::{debug, instrument};

/// GET /messages/{message_id}
///
/// => {message: {id, body, sent_at, read_at, from_user: {...}, to_user: {...}}}
#[instrument(skip(state, current_user), fields(username = %current_user.username, message_id = %message_id))]
pub async fn get_message(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<AuthUser>, // ottenuto dall'autenticazione tramite token jwt
    AppPath(message_id): AppPath<i32>,
) -> Result<Json<MessageEnvelope<MessageDetail>>, AppError> {
    debug!("Fetching message");
    let message = MessageAccess::from_state(&state)
        .get(message_id, &current_user.username)
        .await?;
    Ok(Json(message.into()))
}

/// POST /messages
///
/// {to_username, body} => {message: {id, from_username, to_username, body, sent_at}}
#[instrument(skip(state, current_user, body), fields(username = %current_user.username))]
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<AuthUser>,
    Json(body): Json<SendMessageDTO>,
) -> Result<Json<MessageEnvelope<SentMessage>>, AppError> {
    debug!("Sending message to {}", body.to_username);
    let message = MessageAccess::from_state(&state)
        .create(body, &current_user.username)
        .await?;
    Ok(Json(message.into()))
}

/// POST /messages/{message_id}/read
///
/// => {message: {id, read_at}}
#[instrument(skip(state, current_user), fields(username = %current_user.username, message_id = %message_id))]
pub async fn mark_message_read(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<AuthUser>,
    AppPath(message_id): AppPath<i32>,
) -> Result<Json<MessageEnvelope<ReadReceipt>>, AppError> {
    debug!("Marking message as read");
    let receipt = MessageAccess::from_state(&state)
        .mark_read(message_id, &current_user.username)
        .await?;
    Ok(Json(receipt.into()))
}
