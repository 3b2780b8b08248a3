use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use entity::prelude::{ConferenceSession, Event, EventCommitteeMember};

use crate::model::event::{
    CreateConferenceSessionDto, CreateEventDto, EventStatus, UpdateEventDto,
};

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        EventRepository { db }
    }

    /// Creates a new event in draft status
    ///
    /// # Arguments
    /// - `organizer_id`: ID of the organizing user
    /// - `params`: Event fields from the create request
    ///
    /// # Returns
    /// - `Ok(Model)`: The created event
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        organizer_id: i32,
        params: CreateEventDto,
    ) -> Result<entity::event::Model, DbErr> {
        let now = Utc::now();

        entity::event::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            theme: ActiveValue::Set(params.theme),
            status: ActiveValue::Set(EventStatus::Draft.to_string()),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            submission_deadline: ActiveValue::Set(params.submission_deadline),
            venue: ActiveValue::Set(params.venue),
            city: ActiveValue::Set(params.city),
            country: ActiveValue::Set(params.country),
            organizer_id: ActiveValue::Set(organizer_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::event::Model>, DbErr> {
        Event::find_by_id(id).one(self.db).await
    }

    /// Gets paginated events ordered by start date (soonest first)
    ///
    /// # Returns
    /// - `Ok((events, total))`: Vector of events and total count
    /// - `Err(DbErr)`: Database error
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::event::Model>, u64), DbErr> {
        let paginator = Event::find()
            .order_by_asc(entity::event::Column::StartDate)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let events = paginator.fetch_page(page).await?;

        Ok((events, total))
    }

    pub async fn list_by_organizer(
        &self,
        organizer_id: i32,
    ) -> Result<Vec<entity::event::Model>, DbErr> {
        Event::find()
            .filter(entity::event::Column::OrganizerId.eq(organizer_id))
            .order_by_asc(entity::event::Column::StartDate)
            .all(self.db)
            .await
    }

    /// Updates an event's fields and/or lifecycle status
    pub async fn update(
        &self,
        event: entity::event::Model,
        params: UpdateEventDto,
    ) -> Result<entity::event::Model, DbErr> {
        let mut active: entity::event::ActiveModel = event.into();

        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(theme) = params.theme {
            active.theme = ActiveValue::Set(Some(theme));
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status.to_string());
        }
        if let Some(start_date) = params.start_date {
            active.start_date = ActiveValue::Set(start_date);
        }
        if let Some(end_date) = params.end_date {
            active.end_date = ActiveValue::Set(end_date);
        }
        if let Some(submission_deadline) = params.submission_deadline {
            active.submission_deadline = ActiveValue::Set(Some(submission_deadline));
        }
        if let Some(venue) = params.venue {
            active.venue = ActiveValue::Set(Some(venue));
        }
        if let Some(city) = params.city {
            active.city = ActiveValue::Set(Some(city));
        }
        if let Some(country) = params.country {
            active.country = ActiveValue::Set(Some(country));
        }

        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await
    }

    pub async fn set_status(
        &self,
        event: entity::event::Model,
        status: EventStatus,
    ) -> Result<entity::event::Model, DbErr> {
        let mut active: entity::event::ActiveModel = event.into();
        active.status = ActiveValue::Set(status.to_string());
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await
    }

    /// Adds a user to the event's scientific committee, ignoring duplicates
    ///
    /// # Returns
    /// - `Ok(true)`: Member was added
    /// - `Ok(false)`: Member was already on the committee
    /// - `Err(DbErr)`: Database error
    pub async fn add_committee_member(&self, event_id: i32, user_id: i32) -> Result<bool, DbErr> {
        if self.is_committee_member(event_id, user_id).await? {
            return Ok(false);
        }

        entity::event_committee_member::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    pub async fn is_committee_member(&self, event_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = EventCommitteeMember::find()
            .filter(entity::event_committee_member::Column::EventId.eq(event_id))
            .filter(entity::event_committee_member::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn committee_member_ids(&self, event_id: i32) -> Result<Vec<i32>, DbErr> {
        let members = EventCommitteeMember::find()
            .filter(entity::event_committee_member::Column::EventId.eq(event_id))
            .all(self.db)
            .await?;

        Ok(members.into_iter().map(|m| m.user_id).collect())
    }

    /// Creates a program session within an event
    pub async fn create_session(
        &self,
        event_id: i32,
        params: CreateConferenceSessionDto,
    ) -> Result<entity::conference_session::Model, DbErr> {
        entity::conference_session::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            title: ActiveValue::Set(params.title),
            session_type: ActiveValue::Set(params.session_type),
            date: ActiveValue::Set(params.date),
            start_time: ActiveValue::Set(params.start_time),
            end_time: ActiveValue::Set(params.end_time),
            room: ActiveValue::Set(params.room),
            chair_id: ActiveValue::Set(params.chair_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Lists an event's sessions ordered by date then start time
    pub async fn list_sessions(
        &self,
        event_id: i32,
    ) -> Result<Vec<entity::conference_session::Model>, DbErr> {
        ConferenceSession::find()
            .filter(entity::conference_session::Column::EventId.eq(event_id))
            .order_by_asc(entity::conference_session::Column::Date)
            .order_by_asc(entity::conference_session::Column::StartTime)
            .all(self.db)
            .await
    }

    pub async fn delete_session(&self, session_id: i32) -> Result<(), DbErr> {
        ConferenceSession::delete_by_id(session_id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
