use sea_orm::DatabaseConnection;

use crate::{
    data::{
        event::EventRepository, review::ReviewRepository, submission::SubmissionRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        event::EventStatus,
        notification::{self, EmitNotificationParams},
        review::ReviewDto,
        submission::{
            CreateSubmissionDto, OverrideStatusDto, SubmissionDetailDto, SubmissionDto,
            SubmissionStatus,
        },
        user::Role,
    },
    service::{notification::NotificationService, review},
};

pub struct SubmissionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubmissionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits a paper to an event.
    ///
    /// The event's call must be open. The submission starts in pending status
    /// with no reviewers assigned.
    ///
    /// # Returns
    /// - `Ok(SubmissionDto)`: The created submission
    /// - `Err(AppError)`: Event not found, call closed or database error
    pub async fn create(
        &self,
        current_user: &entity::user::Model,
        event_id: i32,
        dto: CreateSubmissionDto,
    ) -> Result<SubmissionDto, AppError> {
        if dto.title.trim().is_empty() {
            return Err(AppError::Validation("Title must not be empty".to_string()));
        }
        if dto.abstract_text.trim().is_empty() {
            return Err(AppError::Validation(
                "Abstract must not be empty".to_string(),
            ));
        }

        let event = EventRepository::new(self.db)
            .get_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", event_id)))?;

        let status = event
            .status
            .parse::<EventStatus>()
            .map_err(AppError::InternalError)?;
        if status != EventStatus::OpenCall {
            return Err(AppError::Validation(format!(
                "Event {} is not accepting submissions",
                event_id
            )));
        }

        let submission = SubmissionRepository::new(self.db)
            .create(event_id, current_user.id, dto)
            .await?;

        SubmissionDto::from_model(submission).map_err(AppError::InternalError)
    }

    /// Gets the full submission view: abstract, assigned reviewers, reviews
    /// and aggregate score.
    ///
    /// Only the author, the event's organizer or committee, an assigned
    /// reviewer or a super admin may see the detail view.
    pub async fn get_detail(
        &self,
        current_user: &entity::user::Model,
        submission_id: i32,
    ) -> Result<SubmissionDetailDto, AppError> {
        let submission_repo = SubmissionRepository::new(self.db);

        let submission = submission_repo
            .get_by_id(submission_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Submission {} not found", submission_id)))?;

        self.authorize_detail_access(current_user, &submission)
            .await?;

        let assigned_reviewer_ids = submission_repo.assigned_reviewer_ids(submission_id).await?;

        let review_models = ReviewRepository::new(self.db)
            .list_by_submission(submission_id)
            .await?;

        let average = review::average_score(&review_models);

        let reviews = review_models
            .into_iter()
            .map(|r| ReviewDto::from_model(r).map_err(AppError::InternalError))
            .collect::<Result<Vec<_>, _>>()?;

        let kind = submission
            .kind
            .parse()
            .map_err(AppError::InternalError)?;
        let status = submission
            .status
            .parse()
            .map_err(AppError::InternalError)?;

        Ok(SubmissionDetailDto {
            id: submission.id,
            event_id: submission.event_id,
            author_id: submission.author_id,
            title: submission.title,
            abstract_text: submission.abstract_text,
            keywords: submission.keywords,
            kind,
            status,
            assigned_reviewer_ids,
            reviews,
            average_score: average,
            submitted_at: submission.submitted_at,
            updated_at: submission.updated_at,
        })
    }

    /// Lists an event's submissions. Restricted to the event's organizer,
    /// committee members and super admins.
    pub async fn list_by_event(
        &self,
        current_user: &entity::user::Model,
        event_id: i32,
    ) -> Result<Vec<SubmissionDto>, AppError> {
        let event_repo = EventRepository::new(self.db);

        let event = event_repo
            .get_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", event_id)))?;

        let allowed = current_user.role == Role::SuperAdmin.as_str()
            || event.organizer_id == current_user.id
            || event_repo
                .is_committee_member(event_id, current_user.id)
                .await?;
        if !allowed {
            return Err(AuthError::NotEventOrganizer {
                user_id: current_user.id,
                event_id,
            }
            .into());
        }

        let submissions = SubmissionRepository::new(self.db)
            .list_by_event(event_id)
            .await?;

        submissions
            .into_iter()
            .map(|s| SubmissionDto::from_model(s).map_err(AppError::InternalError))
            .collect()
    }

    /// Lists the current user's own submissions.
    pub async fn list_mine(
        &self,
        current_user: &entity::user::Model,
    ) -> Result<Vec<SubmissionDto>, AppError> {
        let submissions = SubmissionRepository::new(self.db)
            .list_by_author(current_user.id)
            .await?;

        submissions
            .into_iter()
            .map(|s| SubmissionDto::from_model(s).map_err(AppError::InternalError))
            .collect()
    }

    /// Lists submissions assigned to the current user for review.
    pub async fn list_assigned_to_me(
        &self,
        current_user: &entity::user::Model,
    ) -> Result<Vec<SubmissionDto>, AppError> {
        let submissions = SubmissionRepository::new(self.db)
            .list_assigned_to_reviewer(current_user.id)
            .await?;

        submissions
            .into_iter()
            .map(|s| SubmissionDto::from_model(s).map_err(AppError::InternalError))
            .collect()
    }

    /// Manually overrides a submission's status, bypassing the decision rule.
    ///
    /// Restricted to the event's organizer or a super admin. The author is
    /// notified when the override lands on a decision status.
    pub async fn override_status(
        &self,
        current_user: &entity::user::Model,
        submission_id: i32,
        dto: OverrideStatusDto,
    ) -> Result<SubmissionDto, AppError> {
        let submission_repo = SubmissionRepository::new(self.db);

        let submission = submission_repo
            .get_by_id(submission_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Submission {} not found", submission_id)))?;

        let event = EventRepository::new(self.db)
            .get_by_id(submission.event_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Event {} not found", submission.event_id))
            })?;

        if current_user.role != Role::SuperAdmin.as_str() && event.organizer_id != current_user.id {
            return Err(AuthError::NotEventOrganizer {
                user_id: current_user.id,
                event_id: event.id,
            }
            .into());
        }

        let author_id = submission.author_id;
        let event_id = submission.event_id;
        let title = submission.title.clone();

        let updated = submission_repo.set_status(submission, dto.status).await?;

        if dto.status.is_terminal() {
            NotificationService::new(self.db)
                .emit(EmitNotificationParams {
                    user_id: author_id,
                    kind: notification::submission_decision_kind(dto.status),
                    title: format!("Submission {}", dto.status.display_name().to_lowercase()),
                    message: format!(
                        "Your submission \"{}\" is now: {}",
                        title,
                        dto.status.display_name()
                    ),
                    related_event_id: Some(event_id),
                })
                .await;
        }

        SubmissionDto::from_model(updated).map_err(AppError::InternalError)
    }

    async fn authorize_detail_access(
        &self,
        current_user: &entity::user::Model,
        submission: &entity::submission::Model,
    ) -> Result<(), AppError> {
        if current_user.role == Role::SuperAdmin.as_str()
            || submission.author_id == current_user.id
        {
            return Ok(());
        }

        let event_repo = EventRepository::new(self.db);
        if let Some(event) = event_repo.get_by_id(submission.event_id).await? {
            if event.organizer_id == current_user.id {
                return Ok(());
            }
        }
        if event_repo
            .is_committee_member(submission.event_id, current_user.id)
            .await?
        {
            return Ok(());
        }

        if SubmissionRepository::new(self.db)
            .is_assigned(submission.id, current_user.id)
            .await?
        {
            return Ok(());
        }

        Err(AuthError::AccessDenied {
            user_id: current_user.id,
            reason: format!("submission {} detail is restricted", submission.id),
        }
        .into())
    }
}
