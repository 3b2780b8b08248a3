use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageDto {
    pub id: i32,
    pub sender_id: i32,
    pub recipient_id: i32,
    pub subject: String,
    pub content: String,
    pub related_event_id: Option<i32>,
    pub is_read: bool,
    pub sent_at: DateTime<Utc>,
}

impl From<entity::message::Model> for MessageDto {
    fn from(message: entity::message::Model) -> Self {
        Self {
            id: message.id,
            sender_id: message.sender_id,
            recipient_id: message.recipient_id,
            subject: message.subject,
            content: message.content,
            related_event_id: message.related_event_id,
            is_read: message.is_read,
            sent_at: message.sent_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SendMessageDto {
    pub recipient_id: i32,
    pub subject: String,
    pub content: String,
    pub related_event_id: Option<i32>,
}
