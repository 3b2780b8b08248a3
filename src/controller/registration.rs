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
    model::registration::{CreateRegistrationDto, UpdatePaymentStatusDto},
    service::registration::RegistrationService,
    state::AppState,
};

/// POST /api/events/{event_id}/registrations - Register for an event
///
/// Payment starts pending; a user registers at most once per event.
///
/// # Returns
/// - `201 Created`: The registration
/// - `400 Bad Request`: Event not open for registration
/// - `409 Conflict`: Already registered
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
    Json(payload): Json<CreateRegistrationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let registration = RegistrationService::new(&state.db)
        .register(&user, event_id, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(registration)))
}

/// GET /api/events/{event_id}/registrations - List an event's registrations
///
/// Restricted to the event's organizer or a super admin.
pub async fn list_by_event(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let registrations = RegistrationService::new(&state.db)
        .list_by_event(&user, event_id)
        .await?;
    Ok((StatusCode::OK, Json(registrations)))
}

/// GET /api/registrations/mine - List the current user's registrations
pub async fn list_mine(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let registrations = RegistrationService::new(&state.db).list_mine(&user).await?;
    Ok((StatusCode::OK, Json(registrations)))
}

/// PUT /api/registrations/{registration_id}/payment - Update payment status
///
/// Restricted to the event's organizer or a super admin.
pub async fn set_payment_status(
    State(state): State<AppState>,
    session: Session,
    Path(registration_id): Path<i32>,
    Json(payload): Json<UpdatePaymentStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let registration = RegistrationService::new(&state.db)
        .set_payment_status(&user, registration_id, payload)
        .await?;
    Ok((StatusCode::OK, Json(registration)))
}
