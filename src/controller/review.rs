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
        review::{AssignReviewersDto, AssignmentOutcomeDto, ReviewDto, SubmitReviewDto},
    },
    service::review::ReviewService,
    state::AppState,
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

/// Assign reviewers to a submission.
///
/// Idempotent: ids already assigned and ids that don't resolve to a
/// reviewer-role account are reported in the outcome rather than failing the
/// request. A pending submission moves to under review on the first
/// assignment.
///
/// # Access Control
/// - Event organizer, scientific committee member or super admin
#[utoipa::path(
    post,
    path = "/api/submissions/{submission_id}/reviewers",
    tag = REVIEW_TAG,
    params(
        ("submission_id" = i32, Path, description = "Submission ID")
    ),
    request_body = AssignReviewersDto,
    responses(
        (status = 200, description = "Assignment outcome", body = AssignmentOutcomeDto),
        (status = 400, description = "Empty reviewer list", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to manage this submission's reviews", body = ErrorDto),
        (status = 404, description = "Submission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    )
)]
pub async fn assign_reviewers(
    State(state): State<AppState>,
    session: Session,
    Path(submission_id): Path<i32>,
    Json(payload): Json<AssignReviewersDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let outcome = ReviewService::new(&state.db)
        .assign_reviewers(&user, submission_id, payload)
        .await?;
    Ok((StatusCode::OK, Json(outcome)))
}

/// File a review for a submission.
///
/// The actor must be in the submission's assigned-reviewers set and may review
/// each submission once. Reaching the quorum triggers the decision rule, which
/// accepts, rejects or requests a revision based on the aggregate score.
#[utoipa::path(
    post,
    path = "/api/submissions/{submission_id}/reviews",
    tag = REVIEW_TAG,
    params(
        ("submission_id" = i32, Path, description = "Submission ID")
    ),
    request_body = SubmitReviewDto,
    responses(
        (status = 201, description = "Review filed", body = ReviewDto),
        (status = 400, description = "Score out of range", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an assigned reviewer", body = ErrorDto),
        (status = 404, description = "Submission not found", body = ErrorDto),
        (status = 409, description = "Already reviewed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    )
)]
pub async fn submit_review(
    State(state): State<AppState>,
    session: Session,
    Path(submission_id): Path<i32>,
    Json(payload): Json<SubmitReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let review = ReviewService::new(&state.db)
        .submit_review(&user, submission_id, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(review)))
}

/// GET /api/reviews/mine - List reviews the current user has filed
pub async fn list_mine(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reviews = ReviewService::new(&state.db).list_my_reviews(&user).await?;
    Ok((StatusCode::OK, Json(reviews)))
}
