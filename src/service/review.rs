use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        event::EventRepository, review::ReviewRepository, submission::SubmissionRepository,
        user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        notification::{self, EmitNotificationParams},
        review::{AssignReviewersDto, AssignmentOutcomeDto, ReviewDto, SubmitReviewDto},
        submission::SubmissionStatus,
        user::Role,
    },
    service::notification::NotificationService,
};

/// Number of reviews required before the decision rule fires.
pub const REVIEW_QUORUM: u64 = 2;

/// Aggregate score at or above which a submission is accepted.
pub const ACCEPT_THRESHOLD: f64 = 4.0;

/// Aggregate score below which a submission is rejected.
pub const REJECT_THRESHOLD: f64 = 2.5;

/// Applies the decision rule to an aggregate score.
///
/// The aggregate is the mean of each review's own three-criterion average.
/// Scores in the middle band request a revision rather than deciding either
/// way.
pub fn decide(average_score: f64) -> SubmissionStatus {
    if average_score >= ACCEPT_THRESHOLD {
        SubmissionStatus::Accepted
    } else if average_score < REJECT_THRESHOLD {
        SubmissionStatus::Rejected
    } else {
        SubmissionStatus::RevisionRequested
    }
}

/// Mean of each review's three-criterion average, `None` when no reviews
/// have been filed.
pub fn average_score(reviews: &[entity::review::Model]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }

    let sum: f64 = reviews
        .iter()
        .map(|r| f64::from(r.relevance_score + r.quality_score + r.originality_score) / 3.0)
        .sum();

    Some(sum / reviews.len() as f64)
}

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Assigns reviewers to a submission.
    ///
    /// Only the event's organizer, a scientific committee member or a super
    /// admin may assign. The operation is idempotent and tolerant: ids that
    /// are already assigned or that don't resolve to a reviewer-role user are
    /// reported in the outcome instead of failing the request. A pending
    /// submission moves to under review as soon as at least one reviewer is
    /// assigned.
    ///
    /// # Returns
    /// - `Ok(AssignmentOutcomeDto)`: Per-id outcome and the resulting status
    /// - `Err(AppError)`: Submission not found, authorization or database error
    pub async fn assign_reviewers(
        &self,
        current_user: &entity::user::Model,
        submission_id: i32,
        dto: AssignReviewersDto,
    ) -> Result<AssignmentOutcomeDto, AppError> {
        if dto.reviewer_ids.is_empty() {
            return Err(AppError::Validation(
                "At least one reviewer id is required".to_string(),
            ));
        }

        let submission = SubmissionRepository::new(self.db)
            .get_by_id(submission_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Submission {} not found", submission_id)))?;

        self.authorize_event_admin(current_user, submission.event_id)
            .await?;

        let submission_title = submission.title.clone();
        let event_id = submission.event_id;

        let txn = self.db.begin().await?;

        let submission_repo = SubmissionRepository::new(&txn);
        let user_repo = UserRepository::new(&txn);

        let mut assigned_ids = Vec::new();
        let mut already_assigned_ids = Vec::new();
        let mut missing_ids = Vec::new();

        for reviewer_id in dto.reviewer_ids {
            if assigned_ids.contains(&reviewer_id) || already_assigned_ids.contains(&reviewer_id) {
                continue;
            }

            let is_reviewer = match user_repo.get_by_id(reviewer_id).await? {
                Some(user) => user.role == Role::Reviewer.as_str(),
                None => false,
            };
            if !is_reviewer {
                if !missing_ids.contains(&reviewer_id) {
                    missing_ids.push(reviewer_id);
                }
                continue;
            }

            if submission_repo.is_assigned(submission_id, reviewer_id).await? {
                already_assigned_ids.push(reviewer_id);
                continue;
            }

            submission_repo.add_reviewer(submission_id, reviewer_id).await?;
            assigned_ids.push(reviewer_id);
        }

        let mut status = submission
            .status
            .parse::<SubmissionStatus>()
            .map_err(AppError::InternalError)?;

        let has_reviewers = !assigned_ids.is_empty() || !already_assigned_ids.is_empty();
        if status == SubmissionStatus::Pending && has_reviewers {
            submission_repo
                .set_status(submission, SubmissionStatus::UnderReview)
                .await?;
            status = SubmissionStatus::UnderReview;
        }

        txn.commit().await?;

        let notification_service = NotificationService::new(self.db);
        for reviewer_id in &assigned_ids {
            notification_service
                .emit(EmitNotificationParams {
                    user_id: *reviewer_id,
                    kind: notification::KIND_REVIEW_ASSIGNED.to_string(),
                    title: "New review assignment".to_string(),
                    message: format!("You have been assigned to review \"{}\"", submission_title),
                    related_event_id: Some(event_id),
                })
                .await;
        }

        Ok(AssignmentOutcomeDto {
            submission_id,
            assigned_ids,
            already_assigned_ids,
            missing_ids,
            status,
        })
    }

    /// Files a review and runs the decision rule.
    ///
    /// The actor must be in the submission's assigned-reviewers set and must
    /// not have reviewed it already. Once the quorum is reached, the decision
    /// rule sets the submission status from the aggregate score. Terminal
    /// statuses never re-fire: extra reviews are recorded but leave the
    /// decision alone. The author is notified when a decision is made.
    ///
    /// # Returns
    /// - `Ok(ReviewDto)`: The filed review
    /// - `Err(AppError)`: Validation, authorization, conflict or database error
    pub async fn submit_review(
        &self,
        current_user: &entity::user::Model,
        submission_id: i32,
        dto: SubmitReviewDto,
    ) -> Result<ReviewDto, AppError> {
        for (name, value) in [
            ("relevance", dto.scores.relevance),
            ("quality", dto.scores.quality),
            ("originality", dto.scores.originality),
        ] {
            if !(1..=5).contains(&value) {
                return Err(AppError::Validation(format!(
                    "Score '{}' must be between 1 and 5, got {}",
                    name, value
                )));
            }
        }

        let submission = SubmissionRepository::new(self.db)
            .get_by_id(submission_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Submission {} not found", submission_id)))?;

        let submission_title = submission.title.clone();
        let author_id = submission.author_id;
        let event_id = submission.event_id;

        let txn = self.db.begin().await?;

        let submission_repo = SubmissionRepository::new(&txn);
        let review_repo = ReviewRepository::new(&txn);

        if !submission_repo
            .is_assigned(submission_id, current_user.id)
            .await?
        {
            return Err(AuthError::NotAssignedReviewer {
                user_id: current_user.id,
                submission_id,
            }
            .into());
        }

        if review_repo
            .exists_for_reviewer(submission_id, current_user.id)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "You have already reviewed submission {}",
                submission_id
            )));
        }

        let review = review_repo
            .create(
                submission_id,
                current_user.id,
                dto.scores,
                dto.comments,
                dto.decision,
            )
            .await?;

        let status = submission
            .status
            .parse::<SubmissionStatus>()
            .map_err(AppError::InternalError)?;

        let mut decision_fired = None;

        if !status.is_terminal() {
            let reviews = review_repo.list_by_submission(submission_id).await?;
            if reviews.len() as u64 >= REVIEW_QUORUM {
                if let Some(average) = average_score(&reviews) {
                    let new_status = decide(average);
                    submission_repo.set_status(submission, new_status).await?;
                    decision_fired = Some(new_status);
                }
            }
        }

        txn.commit().await?;

        if let Some(new_status) = decision_fired {
            NotificationService::new(self.db)
                .emit(EmitNotificationParams {
                    user_id: author_id,
                    kind: notification::submission_decision_kind(new_status),
                    title: format!("Submission {}", new_status.display_name().to_lowercase()),
                    message: format!(
                        "Your submission \"{}\" is now: {}",
                        submission_title,
                        new_status.display_name()
                    ),
                    related_event_id: Some(event_id),
                })
                .await;
        }

        ReviewDto::from_model(review).map_err(AppError::InternalError)
    }

    /// Lists the reviews filed by the current user.
    pub async fn list_my_reviews(
        &self,
        current_user: &entity::user::Model,
    ) -> Result<Vec<ReviewDto>, AppError> {
        let reviews = ReviewRepository::new(self.db)
            .list_by_reviewer(current_user.id)
            .await?;

        reviews
            .into_iter()
            .map(|r| ReviewDto::from_model(r).map_err(AppError::InternalError))
            .collect()
    }

    /// Checks that the actor may manage reviews for the event: its organizer,
    /// a scientific committee member, or a super admin.
    async fn authorize_event_admin(
        &self,
        current_user: &entity::user::Model,
        event_id: i32,
    ) -> Result<(), AppError> {
        if current_user.role == Role::SuperAdmin.as_str() {
            return Ok(());
        }

        let event_repo = EventRepository::new(self.db);

        let event = event_repo
            .get_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", event_id)))?;

        if event.organizer_id == current_user.id {
            return Ok(());
        }

        if event_repo
            .is_committee_member(event_id, current_user.id)
            .await?
        {
            return Ok(());
        }

        Err(AuthError::NotEventOrganizer {
            user_id: current_user.id,
            event_id,
        }
        .into())
    }
}
