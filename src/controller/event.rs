use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::{
        api::PaginationQuery,
        event::{CreateConferenceSessionDto, CreateEventDto, UpdateEventDto},
    },
    service::event::EventService,
    state::AppState,
};

pub static EVENT_TAG: &str = "event";

#[derive(Deserialize)]
pub struct AddCommitteeMemberDto {
    pub user_id: i32,
}

/// POST /api/events - Create an event
///
/// The current user becomes the organizer; the event starts in draft status.
///
/// # Access Control
/// - `Organizer` role or super admin
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Organizer])
        .await?;

    let event = EventService::new(&state.db).create(&user, payload).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /api/events - List events, paginated, soonest first
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (events, total) = EventService::new(&state.db)
        .list(query.page, query.per_page)
        .await?;

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "events": events, "total": total })),
    ))
}

/// GET /api/events/mine - List events the current user organizes
pub async fn list_mine(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let events = EventService::new(&state.db).list_mine(&user).await?;
    Ok((StatusCode::OK, Json(events)))
}

/// GET /api/events/{event_id} - Full event view with organizer, committee and
/// counts
pub async fn get_detail(
    State(state): State<AppState>,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db).get_detail(event_id).await?;
    Ok((StatusCode::OK, Json(event)))
}

/// PUT /api/events/{event_id} - Update fields or move the event through its
/// lifecycle
///
/// # Access Control
/// - Event organizer or super admin
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
    Json(payload): Json<UpdateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let event = EventService::new(&state.db)
        .update(&user, event_id, payload)
        .await?;
    Ok((StatusCode::OK, Json(event)))
}

/// POST /api/events/{event_id}/committee - Add a scientific committee member
///
/// Idempotent; adding an existing member returns 200 instead of 201.
pub async fn add_committee_member(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
    Json(payload): Json<AddCommitteeMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let added = EventService::new(&state.db)
        .add_committee_member(&user, event_id, payload.user_id)
        .await?;

    let status = if added {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok(status)
}

/// GET /api/events/{event_id}/committee - List the scientific committee
pub async fn committee(
    State(state): State<AppState>,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let members = EventService::new(&state.db).committee(event_id).await?;
    Ok((StatusCode::OK, Json(members)))
}

/// POST /api/events/{event_id}/sessions - Add a program session
pub async fn create_session(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
    Json(payload): Json<CreateConferenceSessionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let created = EventService::new(&state.db)
        .create_session(&user, event_id, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/events/{event_id}/sessions - The event's program, chronologically
pub async fn list_sessions(
    State(state): State<AppState>,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let sessions = EventService::new(&state.db).list_sessions(event_id).await?;
    Ok((StatusCode::OK, Json(sessions)))
}

/// DELETE /api/events/{event_id}/sessions/{session_id} - Remove a program
/// session
pub async fn delete_session(
    State(state): State<AppState>,
    session: Session,
    Path((event_id, session_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    EventService::new(&state.db)
        .delete_session(&user, event_id, session_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
