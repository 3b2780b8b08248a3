use sea_orm::DatabaseConnection;

use crate::{
    data::notification::NotificationRepository,
    error::{auth::AuthError, AppError},
    model::notification::{EmitNotificationParams, NotificationDto},
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Emits a notification, fire-and-forget.
    ///
    /// A failed insert is logged and swallowed: notifications are a side
    /// channel and must never fail the workflow that triggered them.
    pub async fn emit(&self, params: EmitNotificationParams) {
        let user_id = params.user_id;
        let kind = params.kind.clone();

        match NotificationRepository::new(self.db).create(params).await {
            Ok(_) => {}
            Err(err) => {
                tracing::error!(
                    "Failed to emit '{}' notification for user {}: {}",
                    kind,
                    user_id,
                    err
                );
            }
        }
    }

    /// Lists the current user's notifications, newest first.
    pub async fn list_mine(
        &self,
        current_user: &entity::user::Model,
    ) -> Result<Vec<NotificationDto>, AppError> {
        let notifications = NotificationRepository::new(self.db)
            .list_by_user(current_user.id)
            .await?;

        Ok(notifications.into_iter().map(NotificationDto::from).collect())
    }

    pub async fn unread_count(&self, current_user: &entity::user::Model) -> Result<u64, AppError> {
        let count = NotificationRepository::new(self.db)
            .count_unread(current_user.id)
            .await?;

        Ok(count)
    }

    /// Marks one of the current user's notifications as read.
    pub async fn mark_read(
        &self,
        current_user: &entity::user::Model,
        notification_id: i32,
    ) -> Result<NotificationDto, AppError> {
        let repo = NotificationRepository::new(self.db);

        let notification = repo.get_by_id(notification_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Notification {} not found", notification_id))
        })?;

        if notification.user_id != current_user.id {
            return Err(AuthError::AccessDenied {
                user_id: current_user.id,
                reason: format!("notification {} belongs to another user", notification_id),
            }
            .into());
        }

        let updated = repo.mark_read(notification).await?;
        Ok(NotificationDto::from(updated))
    }

    pub async fn mark_all_read(&self, current_user: &entity::user::Model) -> Result<u64, AppError> {
        let updated = NotificationRepository::new(self.db)
            .mark_all_read(current_user.id)
            .await?;

        Ok(updated)
    }
}
