use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    error::AppError, middleware::auth::AuthGuard, service::notification::NotificationService,
    state::AppState,
};

/// GET /api/notifications - List the current user's notifications, newest
/// first
pub async fn list(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let notifications = NotificationService::new(&state.db).list_mine(&user).await?;
    Ok((StatusCode::OK, Json(notifications)))
}

/// GET /api/notifications/unread-count - Unread notification count for the
/// badge
pub async fn unread_count(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let count = NotificationService::new(&state.db)
        .unread_count(&user)
        .await?;
    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "unread": count })),
    ))
}

/// PUT /api/notifications/{notification_id}/read - Mark one notification as
/// read
pub async fn mark_read(
    State(state): State<AppState>,
    session: Session,
    Path(notification_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let notification = NotificationService::new(&state.db)
        .mark_read(&user, notification_id)
        .await?;
    Ok((StatusCode::OK, Json(notification)))
}

/// PUT /api/notifications/read-all - Mark all notifications as read
pub async fn mark_all_read(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let updated = NotificationService::new(&state.db)
        .mark_all_read(&user)
        .await?;
    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "updated": updated })),
    ))
}
