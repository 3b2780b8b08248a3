use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use entity::prelude::{Workshop, WorkshopParticipant};

use crate::model::workshop::{CreateWorkshopDto, UpdateWorkshopDto};

pub struct WorkshopRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WorkshopRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        WorkshopRepository { db }
    }

    pub async fn create(
        &self,
        event_id: i32,
        params: CreateWorkshopDto,
    ) -> Result<entity::workshop::Model, DbErr> {
        entity::workshop::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            leader_id: ActiveValue::Set(params.leader_id),
            date: ActiveValue::Set(params.date),
            capacity: ActiveValue::Set(params.capacity),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::workshop::Model>, DbErr> {
        Workshop::find_by_id(id).one(self.db).await
    }

    pub async fn list_by_event(
        &self,
        event_id: i32,
    ) -> Result<Vec<entity::workshop::Model>, DbErr> {
        Workshop::find()
            .filter(entity::workshop::Column::EventId.eq(event_id))
            .order_by_asc(entity::workshop::Column::Date)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        workshop: entity::workshop::Model,
        params: UpdateWorkshopDto,
    ) -> Result<entity::workshop::Model, DbErr> {
        let mut active: entity::workshop::ActiveModel = workshop.into();

        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(leader_id) = params.leader_id {
            active.leader_id = ActiveValue::Set(Some(leader_id));
        }
        if let Some(date) = params.date {
            active.date = ActiveValue::Set(date);
        }
        if let Some(capacity) = params.capacity {
            active.capacity = ActiveValue::Set(capacity);
        }

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        Workshop::delete_by_id(id).exec(self.db).await?;
        Ok(())
    }

    /// Adds a participant. Capacity is enforced in the service layer inside a
    /// transaction; the unique (workshop, user) index rejects duplicates.
    pub async fn add_participant(&self, workshop_id: i32, user_id: i32) -> Result<(), DbErr> {
        entity::workshop_participant::ActiveModel {
            workshop_id: ActiveValue::Set(workshop_id),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    pub async fn is_participant(&self, workshop_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = WorkshopParticipant::find()
            .filter(entity::workshop_participant::Column::WorkshopId.eq(workshop_id))
            .filter(entity::workshop_participant::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn count_participants(&self, workshop_id: i32) -> Result<u64, DbErr> {
        WorkshopParticipant::find()
            .filter(entity::workshop_participant::Column::WorkshopId.eq(workshop_id))
            .count(self.db)
            .await
    }

    pub async fn remove_participant(&self, workshop_id: i32, user_id: i32) -> Result<(), DbErr> {
        WorkshopParticipant::delete_many()
            .filter(entity::workshop_participant::Column::WorkshopId.eq(workshop_id))
            .filter(entity::workshop_participant::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
