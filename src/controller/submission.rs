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
    model::{
        api::ErrorDto,
        submission::{CreateSubmissionDto, OverrideStatusDto, SubmissionDetailDto, SubmissionDto},
    },
    service::submission::SubmissionService,
    state::AppState,
};

/// Tag for grouping submission endpoints in OpenAPI documentation
pub static SUBMISSION_TAG: &str = "submission";

/// Submit a paper to an event.
///
/// The event's call must be open; the submission starts pending with no
/// reviewers assigned.
#[utoipa::path(
    post,
    path = "/api/events/{event_id}/submissions",
    tag = SUBMISSION_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID")
    ),
    request_body = CreateSubmissionDto,
    responses(
        (status = 201, description = "Submission created", body = SubmissionDto),
        (status = 400, description = "Call not open or invalid fields", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
    Json(payload): Json<CreateSubmissionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let submission = SubmissionService::new(&state.db)
        .create(&user, event_id, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(submission)))
}

/// Get a submission's full view.
///
/// Includes the abstract, assigned reviewers, filed reviews and the aggregate
/// score. Restricted to the author, event staff, assigned reviewers and super
/// admins.
#[utoipa::path(
    get,
    path = "/api/submissions/{submission_id}",
    tag = SUBMISSION_TAG,
    params(
        ("submission_id" = i32, Path, description = "Submission ID")
    ),
    responses(
        (status = 200, description = "Submission detail", body = SubmissionDetailDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to view this submission", body = ErrorDto),
        (status = 404, description = "Submission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    )
)]
pub async fn get_detail(
    State(state): State<AppState>,
    session: Session,
    Path(submission_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let submission = SubmissionService::new(&state.db)
        .get_detail(&user, submission_id)
        .await?;
    Ok((StatusCode::OK, Json(submission)))
}

/// GET /api/events/{event_id}/submissions - List an event's submissions
///
/// Restricted to the event's organizer, committee members and super admins.
pub async fn list_by_event(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let submissions = SubmissionService::new(&state.db)
        .list_by_event(&user, event_id)
        .await?;
    Ok((StatusCode::OK, Json(submissions)))
}

/// GET /api/submissions/mine - List the current user's own submissions
pub async fn list_mine(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let submissions = SubmissionService::new(&state.db).list_mine(&user).await?;
    Ok((StatusCode::OK, Json(submissions)))
}

/// GET /api/submissions/assigned - List submissions assigned to the current
/// reviewer
pub async fn list_assigned(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let submissions = SubmissionService::new(&state.db)
        .list_assigned_to_me(&user)
        .await?;
    Ok((StatusCode::OK, Json(submissions)))
}

/// Manually override a submission's status.
///
/// Bypasses the decision rule; restricted to the event's organizer or a super
/// admin. The author is notified when the override lands on a decision status.
#[utoipa::path(
    put,
    path = "/api/submissions/{submission_id}/status",
    tag = SUBMISSION_TAG,
    params(
        ("submission_id" = i32, Path, description = "Submission ID")
    ),
    request_body = OverrideStatusDto,
    responses(
        (status = 200, description = "Status overridden", body = SubmissionDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the event organizer", body = ErrorDto),
        (status = 404, description = "Submission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    )
)]
pub async fn override_status(
    State(state): State<AppState>,
    session: Session,
    Path(submission_id): Path<i32>,
    Json(payload): Json<OverrideStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let submission = SubmissionService::new(&state.db)
        .override_status(&user, submission_id, payload)
        .await?;
    Ok((StatusCode::OK, Json(submission)))
}
