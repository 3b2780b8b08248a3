use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::model::submission::SubmissionStatus;

/// Well-known notification kinds emitted by the review workflow. Stored as
/// plain strings so additional kinds (event reminders, program updates) can be
/// added without a schema change.
pub const KIND_REVIEW_ASSIGNED: &str = "review_assigned";
pub const KIND_NEW_MESSAGE: &str = "new_message";

/// Kind string for a submission decision, e.g. `submission_accepted`.
pub fn submission_decision_kind(status: SubmissionStatus) -> String {
    format!("submission_{}", status.as_str())
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NotificationDto {
    pub id: i32,
    pub user_id: i32,
    pub kind: String,
    pub title: String,
    pub message: String,
    pub related_event_id: Option<i32>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<entity::notification::Model> for NotificationDto {
    fn from(notification: entity::notification::Model) -> Self {
        Self {
            id: notification.id,
            user_id: notification.user_id,
            kind: notification.kind,
            title: notification.title,
            message: notification.message,
            related_event_id: notification.related_event_id,
            is_read: notification.is_read,
            created_at: notification.created_at,
        }
    }
}

/// Parameters for emitting one notification event.
#[derive(Debug, Clone)]
pub struct EmitNotificationParams {
    pub user_id: i32,
    pub kind: String,
    pub title: String,
    pub message: String,
    pub related_event_id: Option<i32>,
}
