//! Event factory for creating test event entities.

use crate::factory::helpers::next_id;
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::event::EventFactory;
///
/// let event = EventFactory::new(&db, organizer.id)
///     .status("completed")
///     .build()
///     .await?;
/// ```
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: String,
    theme: Option<String>,
    status: String,
    start_date: chrono::NaiveDate,
    end_date: chrono::NaiveDate,
    submission_deadline: Option<chrono::NaiveDate>,
    organizer_id: i32,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Event {id}"` where id is auto-incremented
    /// - status: `"open_call"`
    /// - start_date: 30 days from now, end_date: 32 days from now
    /// - submission_deadline: 14 days from now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `organizer_id` - ID of the user organizing the event
    pub fn new(db: &'a DatabaseConnection, organizer_id: i32) -> Self {
        let id = next_id();
        let today = Utc::now().date_naive();
        Self {
            db,
            title: format!("Event {}", id),
            description: "Test event description".to_string(),
            theme: None,
            status: "open_call".to_string(),
            start_date: today + Duration::days(30),
            end_date: today + Duration::days(32),
            submission_deadline: Some(today + Duration::days(14)),
            organizer_id,
        }
    }

    /// Sets the event title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the event status, e.g. `"draft"` or `"completed"`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the start date.
    pub fn start_date(mut self, start_date: chrono::NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    /// Sets the end date.
    pub fn end_date(mut self, end_date: chrono::NaiveDate) -> Self {
        self.end_date = end_date;
        self
    }

    /// Builds and inserts the event entity into the database.
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        let now = Utc::now();
        entity::event::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            theme: ActiveValue::Set(self.theme),
            status: ActiveValue::Set(self.status),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            submission_deadline: ActiveValue::Set(self.submission_deadline),
            venue: ActiveValue::Set(None),
            city: ActiveValue::Set(None),
            country: ActiveValue::Set(None),
            organizer_id: ActiveValue::Set(self.organizer_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event in open call with default values.
///
/// Shorthand for `EventFactory::new(db, organizer_id).build().await`.
///
/// # Example
///
/// ```rust,ignore
/// let event = create_event(&db, organizer.id).await?;
/// ```
pub async fn create_event(
    db: &DatabaseConnection,
    organizer_id: i32,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, organizer_id).build().await
}

/// Adds a user to the event's program committee.
///
/// # Arguments
/// - `db` - Database connection
/// - `event_id` - Event the committee belongs to
/// - `user_id` - User to add to the committee
pub async fn add_committee_member(
    db: &DatabaseConnection,
    event_id: i32,
    user_id: i32,
) -> Result<entity::event_committee_member::Model, DbErr> {
    entity::event_committee_member::ActiveModel {
        id: ActiveValue::NotSet,
        event_id: ActiveValue::Set(event_id),
        user_id: ActiveValue::Set(user_id),
    }
    .insert(db)
    .await
}
