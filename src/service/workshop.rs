use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{event::EventRepository, workshop::WorkshopRepository},
    error::{auth::AuthError, AppError},
    model::{
        user::Role,
        workshop::{CreateWorkshopDto, UpdateWorkshopDto, WorkshopDto},
    },
};

pub struct WorkshopService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WorkshopService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a workshop within an event. Restricted to the event's
    /// organizer or a super admin.
    pub async fn create(
        &self,
        current_user: &entity::user::Model,
        event_id: i32,
        dto: CreateWorkshopDto,
    ) -> Result<WorkshopDto, AppError> {
        if dto.capacity <= 0 {
            return Err(AppError::Validation(
                "Capacity must be positive".to_string(),
            ));
        }

        let event = EventRepository::new(self.db)
            .get_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", event_id)))?;

        Self::ensure_organizer(current_user, &event)?;

        let workshop = WorkshopRepository::new(self.db)
            .create(event_id, dto)
            .await?;

        Ok(WorkshopDto::from_model(workshop, 0))
    }

    pub async fn list_by_event(&self, event_id: i32) -> Result<Vec<WorkshopDto>, AppError> {
        let repo = WorkshopRepository::new(self.db);

        EventRepository::new(self.db)
            .get_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", event_id)))?;

        let workshops = repo.list_by_event(event_id).await?;

        let mut dtos = Vec::with_capacity(workshops.len());
        for workshop in workshops {
            let participants = repo.count_participants(workshop.id).await?;
            dtos.push(WorkshopDto::from_model(workshop, participants));
        }

        Ok(dtos)
    }

    pub async fn get_by_id(&self, workshop_id: i32) -> Result<WorkshopDto, AppError> {
        let repo = WorkshopRepository::new(self.db);

        let workshop = repo
            .get_by_id(workshop_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Workshop {} not found", workshop_id)))?;

        let participants = repo.count_participants(workshop_id).await?;
        Ok(WorkshopDto::from_model(workshop, participants))
    }

    pub async fn update(
        &self,
        current_user: &entity::user::Model,
        workshop_id: i32,
        dto: UpdateWorkshopDto,
    ) -> Result<WorkshopDto, AppError> {
        if let Some(capacity) = dto.capacity {
            if capacity <= 0 {
                return Err(AppError::Validation(
                    "Capacity must be positive".to_string(),
                ));
            }
        }

        let repo = WorkshopRepository::new(self.db);

        let workshop = repo
            .get_by_id(workshop_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Workshop {} not found", workshop_id)))?;

        let event = EventRepository::new(self.db)
            .get_by_id(workshop.event_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", workshop.event_id)))?;

        Self::ensure_organizer(current_user, &event)?;

        let updated = repo.update(workshop, dto).await?;
        let participants = repo.count_participants(workshop_id).await?;

        Ok(WorkshopDto::from_model(updated, participants))
    }

    pub async fn delete(
        &self,
        current_user: &entity::user::Model,
        workshop_id: i32,
    ) -> Result<(), AppError> {
        let repo = WorkshopRepository::new(self.db);

        let workshop = repo
            .get_by_id(workshop_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Workshop {} not found", workshop_id)))?;

        let event = EventRepository::new(self.db)
            .get_by_id(workshop.event_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", workshop.event_id)))?;

        Self::ensure_organizer(current_user, &event)?;

        repo.delete(workshop_id).await?;
        Ok(())
    }

    /// Joins a workshop as the current user.
    ///
    /// Capacity is checked inside a transaction so a full workshop rejects
    /// late joiners with a conflict. Joining twice is a conflict as well.
    pub async fn join(
        &self,
        current_user: &entity::user::Model,
        workshop_id: i32,
    ) -> Result<WorkshopDto, AppError> {
        let txn = self.db.begin().await?;

        let repo = WorkshopRepository::new(&txn);

        let workshop = repo
            .get_by_id(workshop_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Workshop {} not found", workshop_id)))?;

        if repo.is_participant(workshop_id, current_user.id).await? {
            return Err(AppError::Conflict(format!(
                "Already joined workshop {}",
                workshop_id
            )));
        }

        let participants = repo.count_participants(workshop_id).await?;
        if participants >= workshop.capacity as u64 {
            return Err(AppError::Conflict(format!(
                "Workshop {} is full",
                workshop_id
            )));
        }

        repo.add_participant(workshop_id, current_user.id).await?;

        txn.commit().await?;

        Ok(WorkshopDto::from_model(workshop, participants + 1))
    }

    /// Leaves a workshop, freeing the seat.
    pub async fn leave(
        &self,
        current_user: &entity::user::Model,
        workshop_id: i32,
    ) -> Result<(), AppError> {
        let repo = WorkshopRepository::new(self.db);

        repo.get_by_id(workshop_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Workshop {} not found", workshop_id)))?;

        if !repo.is_participant(workshop_id, current_user.id).await? {
            return Err(AppError::NotFound(format!(
                "Not a participant of workshop {}",
                workshop_id
            )));
        }

        repo.remove_participant(workshop_id, current_user.id).await?;
        Ok(())
    }

    fn ensure_organizer(
        current_user: &entity::user::Model,
        event: &entity::event::Model,
    ) -> Result<(), AppError> {
        if current_user.role == Role::SuperAdmin.as_str() || event.organizer_id == current_user.id {
            return Ok(());
        }

        Err(AuthError::NotEventOrganizer {
            user_id: current_user.id,
            event_id: event.id,
        }
        .into())
    }
}
