use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use entity::prelude::Certificate;

use crate::model::certificate::CertificateKind;

pub struct CertificateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CertificateRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        CertificateRepository { db }
    }

    /// Gets or creates a certificate for (event, user, kind)
    ///
    /// # Returns
    /// - `Ok((Model, true))`: Certificate was created
    /// - `Ok((Model, false))`: Certificate already existed
    /// - `Err(DbErr)`: Database error
    pub async fn get_or_create(
        &self,
        event_id: i32,
        user_id: i32,
        kind: CertificateKind,
    ) -> Result<(entity::certificate::Model, bool), DbErr> {
        let existing = Certificate::find()
            .filter(entity::certificate::Column::EventId.eq(event_id))
            .filter(entity::certificate::Column::UserId.eq(user_id))
            .filter(entity::certificate::Column::Kind.eq(kind.as_str()))
            .one(self.db)
            .await?;

        if let Some(certificate) = existing {
            return Ok((certificate, false));
        }

        let certificate = entity::certificate::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            user_id: ActiveValue::Set(user_id),
            kind: ActiveValue::Set(kind.to_string()),
            generated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok((certificate, true))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::certificate::Model>, DbErr> {
        Certificate::find_by_id(id).one(self.db).await
    }

    pub async fn list_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::certificate::Model>, DbErr> {
        Certificate::find()
            .filter(entity::certificate::Column::UserId.eq(user_id))
            .order_by_asc(entity::certificate::Column::GeneratedAt)
            .all(self.db)
            .await
    }

    pub async fn list_by_event(
        &self,
        event_id: i32,
    ) -> Result<Vec<entity::certificate::Model>, DbErr> {
        Certificate::find()
            .filter(entity::certificate::Column::EventId.eq(event_id))
            .order_by_asc(entity::certificate::Column::GeneratedAt)
            .all(self.db)
            .await
    }
}
