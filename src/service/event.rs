use sea_orm::DatabaseConnection;

use crate::{
    data::{
        event::EventRepository, registration::RegistrationRepository,
        submission::SubmissionRepository, user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        event::{
            ConferenceSessionDto, CreateConferenceSessionDto, CreateEventDto, EventDetailDto,
            EventDto, UpdateEventDto,
        },
        user::{Role, UserDto},
    },
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an event with the current user as organizer. Events start in
    /// draft status and are moved through their lifecycle via update.
    pub async fn create(
        &self,
        current_user: &entity::user::Model,
        dto: CreateEventDto,
    ) -> Result<EventDto, AppError> {
        if dto.title.trim().is_empty() {
            return Err(AppError::Validation("Title must not be empty".to_string()));
        }
        if dto.end_date < dto.start_date {
            return Err(AppError::Validation(
                "End date must not be before start date".to_string(),
            ));
        }

        let event = EventRepository::new(self.db)
            .create(current_user.id, dto)
            .await?;

        EventDto::from_model(event).map_err(AppError::InternalError)
    }

    pub async fn list(&self, page: u64, per_page: u64) -> Result<(Vec<EventDto>, u64), AppError> {
        let (events, total) = EventRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        let events = events
            .into_iter()
            .map(|e| EventDto::from_model(e).map_err(AppError::InternalError))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((events, total))
    }

    /// Lists events the current user organizes.
    pub async fn list_mine(
        &self,
        current_user: &entity::user::Model,
    ) -> Result<Vec<EventDto>, AppError> {
        let events = EventRepository::new(self.db)
            .list_by_organizer(current_user.id)
            .await?;

        events
            .into_iter()
            .map(|e| EventDto::from_model(e).map_err(AppError::InternalError))
            .collect()
    }

    /// Gets the full event view: organizer, scientific committee and counts.
    pub async fn get_detail(&self, event_id: i32) -> Result<EventDetailDto, AppError> {
        let event_repo = EventRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        let event = event_repo
            .get_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", event_id)))?;

        let organizer = user_repo
            .get_by_id(event.organizer_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Organizer {} of event {} not found",
                    event.organizer_id, event_id
                ))
            })?;

        let committee_ids = event_repo.committee_member_ids(event_id).await?;
        let committee = user_repo.get_many_by_ids(committee_ids).await?;

        let submissions_count = SubmissionRepository::new(self.db)
            .count_by_event(event_id)
            .await?;
        let registrations_count = RegistrationRepository::new(self.db)
            .count_by_event(event_id)
            .await?;

        let status = event
            .status
            .parse()
            .map_err(AppError::InternalError)?;
        let organizer = UserDto::from_model(organizer).map_err(AppError::InternalError)?;
        let scientific_committee = committee
            .into_iter()
            .map(|u| UserDto::from_model(u).map_err(AppError::InternalError))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(EventDetailDto {
            id: event.id,
            title: event.title,
            description: event.description,
            theme: event.theme,
            status,
            start_date: event.start_date,
            end_date: event.end_date,
            submission_deadline: event.submission_deadline,
            venue: event.venue,
            city: event.city,
            country: event.country,
            organizer,
            scientific_committee,
            submissions_count,
            registrations_count,
            created_at: event.created_at,
            updated_at: event.updated_at,
        })
    }

    /// Updates an event's fields or lifecycle status. Restricted to the
    /// organizer or a super admin.
    pub async fn update(
        &self,
        current_user: &entity::user::Model,
        event_id: i32,
        dto: UpdateEventDto,
    ) -> Result<EventDto, AppError> {
        let event_repo = EventRepository::new(self.db);

        let event = event_repo
            .get_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", event_id)))?;

        Self::ensure_organizer(current_user, &event)?;

        let updated = event_repo.update(event, dto).await?;

        EventDto::from_model(updated).map_err(AppError::InternalError)
    }

    /// Adds a user to the event's scientific committee. Idempotent; returns
    /// false when the user was already a member.
    pub async fn add_committee_member(
        &self,
        current_user: &entity::user::Model,
        event_id: i32,
        user_id: i32,
    ) -> Result<bool, AppError> {
        let event_repo = EventRepository::new(self.db);

        let event = event_repo
            .get_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", event_id)))?;

        Self::ensure_organizer(current_user, &event)?;

        UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        let added = event_repo.add_committee_member(event_id, user_id).await?;
        Ok(added)
    }

    pub async fn committee(&self, event_id: i32) -> Result<Vec<UserDto>, AppError> {
        let event_repo = EventRepository::new(self.db);

        event_repo
            .get_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", event_id)))?;

        let ids = event_repo.committee_member_ids(event_id).await?;
        let users = UserRepository::new(self.db).get_many_by_ids(ids).await?;

        users
            .into_iter()
            .map(|u| UserDto::from_model(u).map_err(AppError::InternalError))
            .collect()
    }

    /// Adds a program session to the event. Restricted to the organizer or a
    /// super admin.
    pub async fn create_session(
        &self,
        current_user: &entity::user::Model,
        event_id: i32,
        dto: CreateConferenceSessionDto,
    ) -> Result<ConferenceSessionDto, AppError> {
        if dto.end_time <= dto.start_time {
            return Err(AppError::Validation(
                "Session end time must be after start time".to_string(),
            ));
        }

        let event_repo = EventRepository::new(self.db);

        let event = event_repo
            .get_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", event_id)))?;

        Self::ensure_organizer(current_user, &event)?;

        let session = event_repo.create_session(event_id, dto).await?;
        Ok(ConferenceSessionDto::from(session))
    }

    pub async fn list_sessions(&self, event_id: i32) -> Result<Vec<ConferenceSessionDto>, AppError> {
        let event_repo = EventRepository::new(self.db);

        event_repo
            .get_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", event_id)))?;

        let sessions = event_repo.list_sessions(event_id).await?;
        Ok(sessions.into_iter().map(ConferenceSessionDto::from).collect())
    }

    pub async fn delete_session(
        &self,
        current_user: &entity::user::Model,
        event_id: i32,
        session_id: i32,
    ) -> Result<(), AppError> {
        let event_repo = EventRepository::new(self.db);

        let event = event_repo
            .get_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", event_id)))?;

        Self::ensure_organizer(current_user, &event)?;

        event_repo.delete_session(session_id).await?;
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
