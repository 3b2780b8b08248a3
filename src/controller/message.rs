use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    error::AppError, middleware::auth::AuthGuard, model::message::SendMessageDto,
    service::message::MessageService, state::AppState,
};

/// POST /api/messages - Send a direct message
///
/// The recipient gets a notification.
pub async fn send(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SendMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let message = MessageService::new(&state.db).send(&user, payload).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

/// GET /api/messages/inbox - Messages received by the current user
pub async fn inbox(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let messages = MessageService::new(&state.db).inbox(&user).await?;
    Ok((StatusCode::OK, Json(messages)))
}

/// GET /api/messages/sent - Messages sent by the current user
pub async fn sent(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let messages = MessageService::new(&state.db).sent(&user).await?;
    Ok((StatusCode::OK, Json(messages)))
}

/// PUT /api/messages/{message_id}/read - Mark a received message as read
pub async fn mark_read(
    State(state): State<AppState>,
    session: Session,
    Path(message_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let message = MessageService::new(&state.db)
        .mark_read(&user, message_id)
        .await?;
    Ok((StatusCode::OK, Json(message)))
}
