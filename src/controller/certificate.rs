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
    model::{api::ErrorDto, certificate::GenerateCertificatesOutcomeDto},
    service::certificate::CertificateService,
    state::AppState,
};

/// Tag for grouping certificate endpoints in OpenAPI documentation
pub static CERTIFICATE_TAG: &str = "certificate";

/// Generate certificates for a completed event.
///
/// One pass per run: registrants, accepted-submission authors, committee
/// members and the organizer each get their certificate kind. Re-running is
/// safe and reports how many already existed.
///
/// # Access Control
/// - Event organizer or super admin
#[utoipa::path(
    post,
    path = "/api/events/{event_id}/certificates",
    tag = CERTIFICATE_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Generation outcome", body = GenerateCertificatesOutcomeDto),
        (status = 400, description = "Event not completed yet", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the event organizer", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    )
)]
pub async fn generate(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let outcome = CertificateService::new(&state.db)
        .generate_for_event(&user, event_id)
        .await?;
    Ok((StatusCode::OK, Json(outcome)))
}

/// GET /api/events/{event_id}/certificates - List an event's certificates
///
/// Restricted to the event's organizer or a super admin.
pub async fn list_by_event(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let certificates = CertificateService::new(&state.db)
        .list_by_event(&user, event_id)
        .await?;
    Ok((StatusCode::OK, Json(certificates)))
}

/// GET /api/certificates/mine - List the current user's certificates
pub async fn list_mine(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let certificates = CertificateService::new(&state.db).list_mine(&user).await?;
    Ok((StatusCode::OK, Json(certificates)))
}
