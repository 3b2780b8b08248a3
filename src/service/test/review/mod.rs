use crate::{
    error::{auth::AuthError, AppError},
    model::{
        notification,
        review::{AssignReviewersDto, ReviewScores, ReviewerDecision, SubmitReviewDto},
        submission::SubmissionStatus,
    },
    service::review::ReviewService,
};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod assign_reviewers;
mod submit_review;

fn review_dto(relevance: i32, quality: i32, originality: i32) -> SubmitReviewDto {
    SubmitReviewDto {
        scores: ReviewScores {
            relevance,
            quality,
            originality,
        },
        comments: "Test review comments".to_string(),
        decision: ReviewerDecision::Accept,
    }
}

async fn submission_status(db: &DatabaseConnection, submission_id: i32) -> Result<String, DbErr> {
    Ok(entity::prelude::Submission::find_by_id(submission_id)
        .one(db)
        .await?
        .unwrap()
        .status)
}

async fn notifications_for(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<Vec<entity::notification::Model>, DbErr> {
    entity::prelude::Notification::find()
        .filter(entity::notification::Column::UserId.eq(user_id))
        .all(db)
        .await
}
