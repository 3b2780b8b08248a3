use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use entity::prelude::Notification;

use crate::model::notification::EmitNotificationParams;

pub struct NotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        NotificationRepository { db }
    }

    pub async fn create(
        &self,
        params: EmitNotificationParams,
    ) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            kind: ActiveValue::Set(params.kind),
            title: ActiveValue::Set(params.title),
            message: ActiveValue::Set(params.message),
            related_event_id: ActiveValue::Set(params.related_event_id),
            is_read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::notification::Model>, DbErr> {
        Notification::find_by_id(id).one(self.db).await
    }

    /// Lists a user's notifications, newest first
    pub async fn list_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::notification::Model>, DbErr> {
        Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn count_unread(&self, user_id: i32) -> Result<u64, DbErr> {
        Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::IsRead.eq(false))
            .count(self.db)
            .await
    }

    pub async fn mark_read(
        &self,
        notification: entity::notification::Model,
    ) -> Result<entity::notification::Model, DbErr> {
        let mut active: entity::notification::ActiveModel = notification.into();
        active.is_read = ActiveValue::Set(true);
        active.update(self.db).await
    }

    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = Notification::update_many()
            .col_expr(
                entity::notification::Column::IsRead,
                sea_orm::sea_query::Expr::value(true),
            )
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::IsRead.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
