use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    data::user::UserRepository,
    error::AppError,
    middleware::{auth::AuthGuard, session::AuthSession},
    model::user::{LoginDto, UserDto},
    state::AppState,
};

pub static AUTH_TAG: &str = "auth";

/// POST /api/auth/login - Establish a session for an existing account
///
/// Credential verification is delegated to the identity provider in front of
/// this backend; this endpoint resolves the account by email and stores its id
/// in the session.
///
/// # Returns
/// - `200 OK`: The logged-in user
/// - `404 Not Found`: No account with that email
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserRepository::new(&state.db)
        .get_by_email(&payload.email)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No account for '{}'", payload.email)))?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    tracing::info!("User {} logged in", user.id);

    let dto = UserDto::from_model(user).map_err(AppError::InternalError)?;
    Ok((StatusCode::OK, Json(dto)))
}

/// POST /api/auth/logout - Clear the current session
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/auth/user - Get the currently authenticated user
///
/// # Returns
/// - `200 OK`: The session's user
/// - `401 Unauthorized`: Not logged in
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let dto = UserDto::from_model(user).map_err(AppError::InternalError)?;
    Ok((StatusCode::OK, Json(dto)))
}
