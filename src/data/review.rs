use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use entity::prelude::Review;

use crate::model::review::{ReviewScores, ReviewerDecision};

pub struct ReviewRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReviewRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        ReviewRepository { db }
    }

    /// Files a review for a submission
    ///
    /// # Arguments
    /// - `submission_id`: Submission being reviewed
    /// - `reviewer_id`: ID of the assigned reviewer
    /// - `scores`: The three criterion scores, each in [1,5]
    /// - `comments`: Free-text comments for the author
    /// - `decision`: The reviewer's own recommendation
    ///
    /// # Returns
    /// - `Ok(Model)`: The created review
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        submission_id: i32,
        reviewer_id: i32,
        scores: ReviewScores,
        comments: String,
        decision: ReviewerDecision,
    ) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            submission_id: ActiveValue::Set(submission_id),
            reviewer_id: ActiveValue::Set(reviewer_id),
            relevance_score: ActiveValue::Set(scores.relevance),
            quality_score: ActiveValue::Set(scores.quality),
            originality_score: ActiveValue::Set(scores.originality),
            comments: ActiveValue::Set(comments),
            decision: ActiveValue::Set(decision.to_string()),
            reviewed_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn exists_for_reviewer(
        &self,
        submission_id: i32,
        reviewer_id: i32,
    ) -> Result<bool, DbErr> {
        let count = Review::find()
            .filter(entity::review::Column::SubmissionId.eq(submission_id))
            .filter(entity::review::Column::ReviewerId.eq(reviewer_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Lists a submission's reviews in the order they were filed
    pub async fn list_by_submission(
        &self,
        submission_id: i32,
    ) -> Result<Vec<entity::review::Model>, DbErr> {
        Review::find()
            .filter(entity::review::Column::SubmissionId.eq(submission_id))
            .order_by_asc(entity::review::Column::ReviewedAt)
            .all(self.db)
            .await
    }

    pub async fn list_by_reviewer(
        &self,
        reviewer_id: i32,
    ) -> Result<Vec<entity::review::Model>, DbErr> {
        Review::find()
            .filter(entity::review::Column::ReviewerId.eq(reviewer_id))
            .order_by_asc(entity::review::Column::ReviewedAt)
            .all(self.db)
            .await
    }

    pub async fn count_by_submission(&self, submission_id: i32) -> Result<u64, DbErr> {
        Review::find()
            .filter(entity::review::Column::SubmissionId.eq(submission_id))
            .count(self.db)
            .await
    }
}
