//! Workshop factory for creating test workshop entities.

use crate::factory::helpers::next_id;
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test workshops with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::workshop::WorkshopFactory;
///
/// let workshop = WorkshopFactory::new(&db, event.id)
///     .capacity(1)
///     .build()
///     .await?;
/// ```
pub struct WorkshopFactory<'a> {
    db: &'a DatabaseConnection,
    event_id: i32,
    title: String,
    description: String,
    leader_id: Option<i32>,
    date: chrono::NaiveDate,
    capacity: i32,
}

impl<'a> WorkshopFactory<'a> {
    /// Creates a new WorkshopFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Workshop {id}"` where id is auto-incremented
    /// - date: 31 days from now
    /// - capacity: 20
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `event_id` - Event the workshop belongs to
    pub fn new(db: &'a DatabaseConnection, event_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            event_id,
            title: format!("Workshop {}", id),
            description: "Test workshop description".to_string(),
            leader_id: None,
            date: Utc::now().date_naive() + Duration::days(31),
            capacity: 20,
        }
    }

    /// Sets the workshop title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the workshop leader.
    pub fn leader_id(mut self, leader_id: Option<i32>) -> Self {
        self.leader_id = leader_id;
        self
    }

    /// Sets the participant capacity.
    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builds and inserts the workshop entity into the database.
    pub async fn build(self) -> Result<entity::workshop::Model, DbErr> {
        entity::workshop::ActiveModel {
            id: ActiveValue::NotSet,
            event_id: ActiveValue::Set(self.event_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            leader_id: ActiveValue::Set(self.leader_id),
            date: ActiveValue::Set(self.date),
            capacity: ActiveValue::Set(self.capacity),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a workshop with default values.
///
/// Shorthand for `WorkshopFactory::new(db, event_id).build().await`.
pub async fn create_workshop(
    db: &DatabaseConnection,
    event_id: i32,
) -> Result<entity::workshop::Model, DbErr> {
    WorkshopFactory::new(db, event_id).build().await
}

/// Adds a participant to a workshop.
///
/// # Arguments
/// - `db` - Database connection
/// - `workshop_id` - Workshop to join
/// - `user_id` - Joining user's ID
pub async fn add_participant(
    db: &DatabaseConnection,
    workshop_id: i32,
    user_id: i32,
) -> Result<entity::workshop_participant::Model, DbErr> {
    entity::workshop_participant::ActiveModel {
        id: ActiveValue::NotSet,
        workshop_id: ActiveValue::Set(workshop_id),
        user_id: ActiveValue::Set(user_id),
    }
    .insert(db)
    .await
}
