use sea_orm::DatabaseConnection;

use crate::{
    data::{message::MessageRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        message::{MessageDto, SendMessageDto},
        notification::{self, EmitNotificationParams},
    },
    service::notification::NotificationService,
};

pub struct MessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sends a direct message, notifying the recipient.
    pub async fn send(
        &self,
        current_user: &entity::user::Model,
        dto: SendMessageDto,
    ) -> Result<MessageDto, AppError> {
        if dto.subject.trim().is_empty() {
            return Err(AppError::Validation(
                "Subject must not be empty".to_string(),
            ));
        }
        if dto.recipient_id == current_user.id {
            return Err(AppError::Validation(
                "Cannot send a message to yourself".to_string(),
            ));
        }

        let recipient_id = dto.recipient_id;
        let related_event_id = dto.related_event_id;

        UserRepository::new(self.db)
            .get_by_id(recipient_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", recipient_id)))?;

        let message = MessageRepository::new(self.db)
            .create(current_user.id, dto)
            .await?;

        NotificationService::new(self.db)
            .emit(EmitNotificationParams {
                user_id: recipient_id,
                kind: notification::KIND_NEW_MESSAGE.to_string(),
                title: "New message".to_string(),
                message: format!("{} sent you a message", current_user.username),
                related_event_id,
            })
            .await;

        Ok(MessageDto::from(message))
    }

    /// Lists messages received by the current user, newest first.
    pub async fn inbox(
        &self,
        current_user: &entity::user::Model,
    ) -> Result<Vec<MessageDto>, AppError> {
        let messages = MessageRepository::new(self.db)
            .list_inbox(current_user.id)
            .await?;

        Ok(messages.into_iter().map(MessageDto::from).collect())
    }

    /// Lists messages sent by the current user, newest first.
    pub async fn sent(
        &self,
        current_user: &entity::user::Model,
    ) -> Result<Vec<MessageDto>, AppError> {
        let messages = MessageRepository::new(self.db)
            .list_sent(current_user.id)
            .await?;

        Ok(messages.into_iter().map(MessageDto::from).collect())
    }

    /// Marks a received message as read. Only the recipient may do so.
    pub async fn mark_read(
        &self,
        current_user: &entity::user::Model,
        message_id: i32,
    ) -> Result<MessageDto, AppError> {
        let repo = MessageRepository::new(self.db);

        let message = repo
            .get_by_id(message_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Message {} not found", message_id)))?;

        if message.recipient_id != current_user.id {
            return Err(AuthError::AccessDenied {
                user_id: current_user.id,
                reason: format!("message {} was not sent to them", message_id),
            }
            .into());
        }

        let updated = repo.mark_read(message).await?;
        Ok(MessageDto::from(updated))
    }
}
