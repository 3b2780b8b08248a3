use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user in the session. Results in 401 Unauthorized.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session references a user id that no longer resolves, typically a
    /// stale session after account deletion. Results in 401 Unauthorized.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Actor lacks the role a route or operation requires. Results in
    /// 403 Forbidden.
    #[error("User {user_id} lacks required role '{role}'")]
    RoleRequired { user_id: i32, role: String },

    /// Actor is neither the event's organizer nor a super admin. Results in
    /// 403 Forbidden.
    #[error("User {user_id} is not the organizer of event {event_id}")]
    NotEventOrganizer { user_id: i32, event_id: i32 },

    /// Actor is not in the submission's assigned-reviewers set. Results in
    /// 403 Forbidden.
    #[error("User {user_id} is not an assigned reviewer for submission {submission_id}")]
    NotAssignedReviewer { user_id: i32, submission_id: i32 },

    /// Catch-all ownership failure (e.g. marking someone else's notification
    /// as read). Results in 403 Forbidden.
    #[error("Access denied for user {user_id}: {reason}")]
    AccessDenied { user_id: i32, reason: String },
}

/// Converts authentication errors into HTTP responses.
///
/// Session problems map to 401 with a generic message; permission failures map
/// to 403. Details are logged at debug level while client-facing messages stay
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Not logged in".to_string(),
                }),
            )
                .into_response(),
            Self::RoleRequired { .. }
            | Self::NotEventOrganizer { .. }
            | Self::NotAssignedReviewer { .. }
            | Self::AccessDenied { .. } => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You do not have permission to perform this action".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
