use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use entity::prelude::Message;

use crate::model::message::SendMessageDto;

pub struct MessageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MessageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        MessageRepository { db }
    }

    pub async fn create(
        &self,
        sender_id: i32,
        params: SendMessageDto,
    ) -> Result<entity::message::Model, DbErr> {
        entity::message::ActiveModel {
            sender_id: ActiveValue::Set(sender_id),
            recipient_id: ActiveValue::Set(params.recipient_id),
            subject: ActiveValue::Set(params.subject),
            content: ActiveValue::Set(params.content),
            related_event_id: ActiveValue::Set(params.related_event_id),
            is_read: ActiveValue::Set(false),
            sent_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::message::Model>, DbErr> {
        Message::find_by_id(id).one(self.db).await
    }

    /// Lists messages received by a user, newest first
    pub async fn list_inbox(&self, user_id: i32) -> Result<Vec<entity::message::Model>, DbErr> {
        Message::find()
            .filter(entity::message::Column::RecipientId.eq(user_id))
            .order_by_desc(entity::message::Column::SentAt)
            .all(self.db)
            .await
    }

    /// Lists messages sent by a user, newest first
    pub async fn list_sent(&self, user_id: i32) -> Result<Vec<entity::message::Model>, DbErr> {
        Message::find()
            .filter(entity::message::Column::SenderId.eq(user_id))
            .order_by_desc(entity::message::Column::SentAt)
            .all(self.db)
            .await
    }

    pub async fn mark_read(
        &self,
        message: entity::message::Model,
    ) -> Result<entity::message::Model, DbErr> {
        let mut active: entity::message::ActiveModel = message.into();
        active.is_read = ActiveValue::Set(true);
        active.update(self.db).await
    }
}
