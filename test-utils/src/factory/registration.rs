//! Registration factory for creating test registration entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test registrations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::registration::RegistrationFactory;
///
/// let registration = RegistrationFactory::new(&db, event.id, user.id)
///     .kind("speaker")
///     .payment_status("paid_online")
///     .build()
///     .await?;
/// ```
pub struct RegistrationFactory<'a> {
    db: &'a DatabaseConnection,
    event_id: i32,
    user_id: i32,
    kind: String,
    payment_status: String,
}

impl<'a> RegistrationFactory<'a> {
    /// Creates a new RegistrationFactory with default values.
    ///
    /// Defaults:
    /// - kind: `"participant"`
    /// - payment_status: `"pending"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `event_id` - Event being registered for
    /// - `user_id` - Registering user's ID
    pub fn new(db: &'a DatabaseConnection, event_id: i32, user_id: i32) -> Self {
        Self {
            db,
            event_id,
            user_id,
            kind: "participant".to_string(),
            payment_status: "pending".to_string(),
        }
    }

    /// Sets the registration kind, e.g. `"speaker"` or `"guest"`.
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Sets the payment status, e.g. `"paid_online"` or `"paid_onsite"`.
    pub fn payment_status(mut self, payment_status: impl Into<String>) -> Self {
        self.payment_status = payment_status.into();
        self
    }

    /// Builds and inserts the registration entity into the database.
    pub async fn build(self) -> Result<entity::registration::Model, DbErr> {
        entity::registration::ActiveModel {
            id: ActiveValue::NotSet,
            event_id: ActiveValue::Set(self.event_id),
            user_id: ActiveValue::Set(self.user_id),
            kind: ActiveValue::Set(self.kind),
            payment_status: ActiveValue::Set(self.payment_status),
            registered_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a participant registration with default values.
///
/// Shorthand for `RegistrationFactory::new(db, event_id, user_id).build().await`.
pub async fn create_registration(
    db: &DatabaseConnection,
    event_id: i32,
    user_id: i32,
) -> Result<entity::registration::Model, DbErr> {
    RegistrationFactory::new(db, event_id, user_id).build().await
}
