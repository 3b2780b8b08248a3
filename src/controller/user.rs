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
    model::user::{RegisterUserDto, UpdateProfileDto},
    service::user::UserService,
    state::AppState,
};

/// POST /api/users - Register a new account
///
/// Open endpoint; the super admin role cannot be claimed this way.
///
/// # Returns
/// - `201 Created`: The new account
/// - `400 Bad Request`: Invalid username, email or role
/// - `409 Conflict`: Email already registered
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).register(payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/users/{user_id} - Get a user's public profile
pub async fn get_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let user = UserService::new(&state.db).get_by_id(user_id).await?;
    Ok((StatusCode::OK, Json(user)))
}

/// GET /api/users/reviewers - List reviewer accounts for the assignment picker
pub async fn list_reviewers(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reviewers = UserService::new(&state.db).list_reviewers().await?;
    Ok((StatusCode::OK, Json(reviewers)))
}

/// PUT /api/users/me - Update the current user's profile
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let updated = UserService::new(&state.db)
        .update_profile(user, payload)
        .await?;
    Ok((StatusCode::OK, Json(updated)))
}
