use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use entity::prelude::Registration;

use crate::model::registration::{PaymentStatus, RegistrationKind};

pub struct RegistrationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RegistrationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        RegistrationRepository { db }
    }

    /// Registers a user for an event with payment pending. Callers must check
    /// `get_by_event_and_user` first; the unique (event, user) index rejects
    /// duplicates.
    pub async fn create(
        &self,
        event_id: i32,
        user_id: i32,
        kind: RegistrationKind,
    ) -> Result<entity::registration::Model, DbErr> {
        entity::registration::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            user_id: ActiveValue::Set(user_id),
            kind: ActiveValue::Set(kind.to_string()),
            payment_status: ActiveValue::Set(PaymentStatus::Pending.to_string()),
            registered_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::registration::Model>, DbErr> {
        Registration::find_by_id(id).one(self.db).await
    }

    pub async fn get_by_event_and_user(
        &self,
        event_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::registration::Model>, DbErr> {
        Registration::find()
            .filter(entity::registration::Column::EventId.eq(event_id))
            .filter(entity::registration::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    pub async fn list_by_event(
        &self,
        event_id: i32,
    ) -> Result<Vec<entity::registration::Model>, DbErr> {
        Registration::find()
            .filter(entity::registration::Column::EventId.eq(event_id))
            .order_by_asc(entity::registration::Column::RegisteredAt)
            .all(self.db)
            .await
    }

    pub async fn list_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::registration::Model>, DbErr> {
        Registration::find()
            .filter(entity::registration::Column::UserId.eq(user_id))
            .order_by_asc(entity::registration::Column::RegisteredAt)
            .all(self.db)
            .await
    }

    pub async fn count_by_event(&self, event_id: i32) -> Result<u64, DbErr> {
        Registration::find()
            .filter(entity::registration::Column::EventId.eq(event_id))
            .count(self.db)
            .await
    }

    pub async fn set_payment_status(
        &self,
        registration: entity::registration::Model,
        payment_status: PaymentStatus,
    ) -> Result<entity::registration::Model, DbErr> {
        let mut active: entity::registration::ActiveModel = registration.into();
        active.payment_status = ActiveValue::Set(payment_status.to_string());
        active.update(self.db).await
    }
}
