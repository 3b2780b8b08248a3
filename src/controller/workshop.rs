use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::workshop::{CreateWorkshopDto, UpdateWorkshopDto},
    service::workshop::WorkshopService,
    state::AppState,
};

/// POST /api/events/{event_id}/workshops - Create a workshop
///
/// Restricted to the event's organizer or a super admin.
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
    Json(payload): Json<CreateWorkshopDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let workshop = WorkshopService::new(&state.db)
        .create(&user, event_id, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(workshop)))
}

/// GET /api/events/{event_id}/workshops - List an event's workshops with seat
/// availability
pub async fn list_by_event(
    State(state): State<AppState>,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let workshops = WorkshopService::new(&state.db).list_by_event(event_id).await?;
    Ok((StatusCode::OK, Json(workshops)))
}

/// GET /api/workshops/{workshop_id} - Get a workshop with seat availability
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(workshop_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let workshop = WorkshopService::new(&state.db).get_by_id(workshop_id).await?;
    Ok((StatusCode::OK, Json(workshop)))
}

/// PUT /api/workshops/{workshop_id} - Update a workshop
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(workshop_id): Path<i32>,
    Json(payload): Json<UpdateWorkshopDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let workshop = WorkshopService::new(&state.db)
        .update(&user, workshop_id, payload)
        .await?;
    Ok((StatusCode::OK, Json(workshop)))
}

/// DELETE /api/workshops/{workshop_id} - Delete a workshop
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Path(workshop_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    WorkshopService::new(&state.db)
        .delete(&user, workshop_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/workshops/{workshop_id}/join - Take a seat in a workshop
///
/// # Returns
/// - `200 OK`: Joined; the workshop with updated seat counts
/// - `409 Conflict`: Workshop full, or already joined
pub async fn join(
    State(state): State<AppState>,
    session: Session,
    Path(workshop_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let workshop = WorkshopService::new(&state.db)
        .join(&user, workshop_id)
        .await?;
    Ok((StatusCode::OK, Json(workshop)))
}

/// DELETE /api/workshops/{workshop_id}/join - Give up a workshop seat
pub async fn leave(
    State(state): State<AppState>,
    session: Session,
    Path(workshop_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    WorkshopService::new(&state.db)
        .leave(&user, workshop_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
