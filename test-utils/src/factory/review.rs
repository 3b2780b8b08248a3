//! Review factory for creating test review entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reviews with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::review::ReviewFactory;
///
/// let review = ReviewFactory::new(&db, submission.id, reviewer.id)
///     .scores(5, 4, 4)
///     .decision("accept")
///     .build()
///     .await?;
/// ```
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    submission_id: i32,
    reviewer_id: i32,
    relevance_score: i32,
    quality_score: i32,
    originality_score: i32,
    comments: String,
    decision: String,
}

impl<'a> ReviewFactory<'a> {
    /// Creates a new ReviewFactory with default values.
    ///
    /// Defaults:
    /// - scores: 3 for each criterion
    /// - decision: `"accept"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `submission_id` - Submission being reviewed
    /// - `reviewer_id` - User ID of the reviewer
    pub fn new(db: &'a DatabaseConnection, submission_id: i32, reviewer_id: i32) -> Self {
        Self {
            db,
            submission_id,
            reviewer_id,
            relevance_score: 3,
            quality_score: 3,
            originality_score: 3,
            comments: "Test review comments".to_string(),
            decision: "accept".to_string(),
        }
    }

    /// Sets all three criterion scores at once.
    ///
    /// # Arguments
    /// - `relevance` - Relevance score (1-5)
    /// - `quality` - Quality score (1-5)
    /// - `originality` - Originality score (1-5)
    pub fn scores(mut self, relevance: i32, quality: i32, originality: i32) -> Self {
        self.relevance_score = relevance;
        self.quality_score = quality;
        self.originality_score = originality;
        self
    }

    /// Sets the reviewer's recommendation, e.g. `"reject"` or `"revise"`.
    pub fn decision(mut self, decision: impl Into<String>) -> Self {
        self.decision = decision.into();
        self
    }

    /// Builds and inserts the review entity into the database.
    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            id: ActiveValue::NotSet,
            submission_id: ActiveValue::Set(self.submission_id),
            reviewer_id: ActiveValue::Set(self.reviewer_id),
            relevance_score: ActiveValue::Set(self.relevance_score),
            quality_score: ActiveValue::Set(self.quality_score),
            originality_score: ActiveValue::Set(self.originality_score),
            comments: ActiveValue::Set(self.comments),
            decision: ActiveValue::Set(self.decision),
            reviewed_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a review with default scores.
///
/// Shorthand for `ReviewFactory::new(db, submission_id, reviewer_id).build().await`.
pub async fn create_review(
    db: &DatabaseConnection,
    submission_id: i32,
    reviewer_id: i32,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db, submission_id, reviewer_id).build().await
}
