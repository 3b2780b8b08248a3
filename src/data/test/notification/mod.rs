use crate::{
    data::notification::NotificationRepository,
    model::notification::{self, EmitNotificationParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_unread;
mod mark_all_read;

fn params(user_id: i32, kind: &str) -> EmitNotificationParams {
    EmitNotificationParams {
        user_id,
        kind: kind.to_string(),
        title: "Test notification".to_string(),
        message: "Something happened".to_string(),
        related_event_id: None,
    }
}
