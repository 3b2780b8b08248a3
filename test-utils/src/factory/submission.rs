//! Submission factory for creating test submission entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test submissions with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::submission::SubmissionFactory;
///
/// let submission = SubmissionFactory::new(&db, event.id, author.id)
///     .status("under_review")
///     .build()
///     .await?;
/// ```
pub struct SubmissionFactory<'a> {
    db: &'a DatabaseConnection,
    event_id: i32,
    author_id: i32,
    title: String,
    abstract_text: String,
    keywords: Option<String>,
    kind: String,
    status: String,
}

impl<'a> SubmissionFactory<'a> {
    /// Creates a new SubmissionFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Submission {id}"` where id is auto-incremented
    /// - kind: `"oral"`
    /// - status: `"pending"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `event_id` - Event the paper is submitted to
    /// - `author_id` - Submitting author's user ID
    pub fn new(db: &'a DatabaseConnection, event_id: i32, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            event_id,
            author_id,
            title: format!("Submission {}", id),
            abstract_text: "Test submission abstract".to_string(),
            keywords: None,
            kind: "oral".to_string(),
            status: "pending".to_string(),
        }
    }

    /// Sets the submission title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the submission kind, e.g. `"poster"` or `"workshop"`.
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Sets the submission status, e.g. `"under_review"` or `"accepted"`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the submission entity into the database.
    pub async fn build(self) -> Result<entity::submission::Model, DbErr> {
        let now = Utc::now();
        entity::submission::ActiveModel {
            id: ActiveValue::NotSet,
            event_id: ActiveValue::Set(self.event_id),
            author_id: ActiveValue::Set(self.author_id),
            title: ActiveValue::Set(self.title),
            abstract_text: ActiveValue::Set(self.abstract_text),
            keywords: ActiveValue::Set(self.keywords),
            kind: ActiveValue::Set(self.kind),
            status: ActiveValue::Set(self.status),
            submitted_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending submission with default values.
///
/// Shorthand for `SubmissionFactory::new(db, event_id, author_id).build().await`.
pub async fn create_submission(
    db: &DatabaseConnection,
    event_id: i32,
    author_id: i32,
) -> Result<entity::submission::Model, DbErr> {
    SubmissionFactory::new(db, event_id, author_id).build().await
}

/// Assigns a reviewer to a submission.
///
/// # Arguments
/// - `db` - Database connection
/// - `submission_id` - Submission under review
/// - `reviewer_id` - User ID of the assigned reviewer
pub async fn assign_reviewer(
    db: &DatabaseConnection,
    submission_id: i32,
    reviewer_id: i32,
) -> Result<entity::submission_reviewer::Model, DbErr> {
    entity::submission_reviewer::ActiveModel {
        id: ActiveValue::NotSet,
        submission_id: ActiveValue::Set(submission_id),
        reviewer_id: ActiveValue::Set(reviewer_id),
    }
    .insert(db)
    .await
}
