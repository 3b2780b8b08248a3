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
        survey::{
            CreateSurveyDto, SetSurveyActiveDto, SubmitSurveyResponsesDto, SurveyDto,
            SurveyResultsDto,
        },
    },
    service::survey::SurveyService,
    state::AppState,
};

/// Tag for grouping survey endpoints in OpenAPI documentation
pub static SURVEY_TAG: &str = "survey";

/// Create a feedback survey with its questions.
///
/// # Access Control
/// - Event organizer or super admin
#[utoipa::path(
    post,
    path = "/api/events/{event_id}/surveys",
    tag = SURVEY_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID")
    ),
    request_body = CreateSurveyDto,
    responses(
        (status = 201, description = "Survey created", body = SurveyDto),
        (status = 400, description = "Empty title or invalid questions", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the event organizer", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
    Json(payload): Json<CreateSurveyDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let survey = SurveyService::new(&state.db)
        .create(&user, event_id, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(survey)))
}

/// GET /api/events/{event_id}/surveys - List an event's surveys
pub async fn list_by_event(
    State(state): State<AppState>,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let surveys = SurveyService::new(&state.db).list_by_event(event_id).await?;
    Ok((StatusCode::OK, Json(surveys)))
}

/// GET /api/surveys/{survey_id} - Survey with questions and respondent count
pub async fn get_detail(
    State(state): State<AppState>,
    Path(survey_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let survey = SurveyService::new(&state.db).get_detail(survey_id).await?;
    Ok((StatusCode::OK, Json(survey)))
}

/// PUT /api/surveys/{survey_id}/active - Open or close the survey
///
/// # Access Control
/// - Event organizer or super admin
pub async fn set_active(
    State(state): State<AppState>,
    session: Session,
    Path(survey_id): Path<i32>,
    Json(payload): Json<SetSurveyActiveDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let survey = SurveyService::new(&state.db)
        .set_active(&user, survey_id, payload)
        .await?;
    Ok((StatusCode::OK, Json(survey)))
}

/// File the current user's answers to an active survey.
///
/// One batch per user per survey; a second submission is a conflict.
#[utoipa::path(
    post,
    path = "/api/surveys/{survey_id}/responses",
    tag = SURVEY_TAG,
    params(
        ("survey_id" = i32, Path, description = "Survey ID")
    ),
    request_body = SubmitSurveyResponsesDto,
    responses(
        (status = 201, description = "Answers recorded"),
        (status = 400, description = "Closed survey or invalid answer", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Survey not found", body = ErrorDto),
        (status = 409, description = "Already responded", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    )
)]
pub async fn submit_responses(
    State(state): State<AppState>,
    session: Session,
    Path(survey_id): Path<i32>,
    Json(payload): Json<SubmitSurveyResponsesDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let submitted = SurveyService::new(&state.db)
        .submit_responses(&user, survey_id, payload)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "submitted": submitted })),
    ))
}

/// Aggregate the survey's responses per question.
///
/// # Access Control
/// - Event organizer or super admin
#[utoipa::path(
    get,
    path = "/api/surveys/{survey_id}/results",
    tag = SURVEY_TAG,
    params(
        ("survey_id" = i32, Path, description = "Survey ID")
    ),
    responses(
        (status = 200, description = "Aggregated results", body = SurveyResultsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the event organizer", body = ErrorDto),
        (status = 404, description = "Survey not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    )
)]
pub async fn results(
    State(state): State<AppState>,
    session: Session,
    Path(survey_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let results = SurveyService::new(&state.db).results(&user, survey_id).await?;
    Ok((StatusCode::OK, Json(results)))
}
