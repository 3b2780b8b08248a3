use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use entity::prelude::{Submission, SubmissionReviewer};

use crate::model::submission::{CreateSubmissionDto, SubmissionStatus};

pub struct SubmissionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SubmissionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        SubmissionRepository { db }
    }

    /// Creates a new submission in pending status
    ///
    /// # Arguments
    /// - `event_id`: Event the paper is submitted to
    /// - `author_id`: ID of the submitting user
    /// - `params`: Submission fields from the create request
    ///
    /// # Returns
    /// - `Ok(Model)`: The created submission
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        event_id: i32,
        author_id: i32,
        params: CreateSubmissionDto,
    ) -> Result<entity::submission::Model, DbErr> {
        let now = Utc::now();

        entity::submission::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            author_id: ActiveValue::Set(author_id),
            title: ActiveValue::Set(params.title),
            abstract_text: ActiveValue::Set(params.abstract_text),
            keywords: ActiveValue::Set(params.keywords),
            kind: ActiveValue::Set(params.kind.to_string()),
            status: ActiveValue::Set(SubmissionStatus::Pending.to_string()),
            submitted_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::submission::Model>, DbErr> {
        Submission::find_by_id(id).one(self.db).await
    }

    pub async fn list_by_event(
        &self,
        event_id: i32,
    ) -> Result<Vec<entity::submission::Model>, DbErr> {
        Submission::find()
            .filter(entity::submission::Column::EventId.eq(event_id))
            .order_by_asc(entity::submission::Column::SubmittedAt)
            .all(self.db)
            .await
    }

    pub async fn list_by_author(
        &self,
        author_id: i32,
    ) -> Result<Vec<entity::submission::Model>, DbErr> {
        Submission::find()
            .filter(entity::submission::Column::AuthorId.eq(author_id))
            .order_by_asc(entity::submission::Column::SubmittedAt)
            .all(self.db)
            .await
    }

    pub async fn count_by_event(&self, event_id: i32) -> Result<u64, DbErr> {
        Submission::find()
            .filter(entity::submission::Column::EventId.eq(event_id))
            .count(self.db)
            .await
    }

    /// Sets the submission status, bumping `updated_at`
    pub async fn set_status(
        &self,
        submission: entity::submission::Model,
        status: SubmissionStatus,
    ) -> Result<entity::submission::Model, DbErr> {
        let mut active: entity::submission::ActiveModel = submission.into();
        active.status = ActiveValue::Set(status.to_string());
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await
    }

    /// Records a reviewer assignment. Callers must check `is_assigned` first;
    /// the unique (submission, reviewer) index rejects duplicates.
    pub async fn add_reviewer(&self, submission_id: i32, reviewer_id: i32) -> Result<(), DbErr> {
        entity::submission_reviewer::ActiveModel {
            submission_id: ActiveValue::Set(submission_id),
            reviewer_id: ActiveValue::Set(reviewer_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    pub async fn is_assigned(&self, submission_id: i32, reviewer_id: i32) -> Result<bool, DbErr> {
        let count = SubmissionReviewer::find()
            .filter(entity::submission_reviewer::Column::SubmissionId.eq(submission_id))
            .filter(entity::submission_reviewer::Column::ReviewerId.eq(reviewer_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn assigned_reviewer_ids(&self, submission_id: i32) -> Result<Vec<i32>, DbErr> {
        let rows = SubmissionReviewer::find()
            .filter(entity::submission_reviewer::Column::SubmissionId.eq(submission_id))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|r| r.reviewer_id).collect())
    }

    /// Lists submissions a reviewer has been assigned to
    pub async fn list_assigned_to_reviewer(
        &self,
        reviewer_id: i32,
    ) -> Result<Vec<entity::submission::Model>, DbErr> {
        let submission_ids: Vec<i32> = SubmissionReviewer::find()
            .filter(entity::submission_reviewer::Column::ReviewerId.eq(reviewer_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|r| r.submission_id)
            .collect();

        Submission::find()
            .filter(entity::submission::Column::Id.is_in(submission_ids))
            .order_by_asc(entity::submission::Column::SubmittedAt)
            .all(self.db)
            .await
    }
}
