use super::*;

async fn submission_with_reviewers(
    db: &DatabaseConnection,
    reviewer_count: usize,
) -> Result<(entity::submission::Model, Vec<entity::user::Model>), AppError> {
    let (_, _, _, submission) = factory::helpers::create_submission_with_dependencies(db)
        .await
        .unwrap();

    let mut reviewers = Vec::new();
    for _ in 0..reviewer_count {
        let reviewer = factory::user::create_reviewer(db).await?;
        factory::submission::assign_reviewer(db, submission.id, reviewer.id).await?;
        reviewers.push(reviewer);
    }

    Ok((submission, reviewers))
}

/// Tests the accept path of the decision rule.
///
/// Two reviews averaging 4.0 or above reach the quorum and accept the
/// submission, notifying the author.
///
/// Expected: Ok with submission accepted
#[tokio::test]
async fn accepts_submission_at_quorum_with_high_average() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (submission, reviewers) = submission_with_reviewers(db, 2).await?;
    let author_id = submission.author_id;

    let service = ReviewService::new(db);

    service
        .submit_review(&reviewers[0], submission.id, review_dto(5, 4, 4))
        .await?;
    // Below quorum after one review
    assert_eq!(submission_status(db, submission.id).await?, "pending");

    service
        .submit_review(&reviewers[1], submission.id, review_dto(4, 4, 4))
        .await?;

    // (13/3 + 4.0) / 2 ≈ 4.17 >= 4.0
    assert_eq!(submission_status(db, submission.id).await?, "accepted");

    let notifications = notifications_for(db, author_id).await?;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, "submission_accepted");

    Ok(())
}

/// Tests the reject path of the decision rule.
///
/// Two reviews averaging below 2.5 reject the submission.
///
/// Expected: Ok with submission rejected
#[tokio::test]
async fn rejects_submission_with_low_average() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (submission, reviewers) = submission_with_reviewers(db, 2).await?;
    let author_id = submission.author_id;

    let service = ReviewService::new(db);
    service
        .submit_review(&reviewers[0], submission.id, review_dto(1, 2, 2))
        .await?;
    service
        .submit_review(&reviewers[1], submission.id, review_dto(2, 2, 2))
        .await?;

    assert_eq!(submission_status(db, submission.id).await?, "rejected");

    let notifications = notifications_for(db, author_id).await?;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, "submission_rejected");

    Ok(())
}

/// Tests the middle band of the decision rule.
///
/// An average between 2.5 and 4.0 asks the author for a revision instead of
/// deciding either way.
///
/// Expected: Ok with revision requested
#[tokio::test]
async fn requests_revision_in_middle_band() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (submission, reviewers) = submission_with_reviewers(db, 2).await?;

    let service = ReviewService::new(db);
    service
        .submit_review(&reviewers[0], submission.id, review_dto(3, 3, 3))
        .await?;
    service
        .submit_review(&reviewers[1], submission.id, review_dto(3, 3, 3))
        .await?;

    assert_eq!(
        submission_status(db, submission.id).await?,
        "revision_requested"
    );

    Ok(())
}

/// Tests that a single review never fires the decision rule.
///
/// Expected: Ok with status unchanged and no author notification
#[tokio::test]
async fn stays_undecided_below_quorum() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (submission, reviewers) = submission_with_reviewers(db, 1).await?;
    let author_id = submission.author_id;

    let service = ReviewService::new(db);
    service
        .submit_review(&reviewers[0], submission.id, review_dto(5, 5, 5))
        .await?;

    assert_eq!(submission_status(db, submission.id).await?, "pending");
    assert!(notifications_for(db, author_id).await?.is_empty());

    Ok(())
}

/// Tests that a decided submission never re-fires the rule.
///
/// A third review on an accepted submission is recorded but leaves the
/// decision alone even if it would flip the aggregate.
///
/// Expected: Ok with review stored and status still accepted
#[tokio::test]
async fn terminal_status_never_refires() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (submission, reviewers) = submission_with_reviewers(db, 3).await?;

    let service = ReviewService::new(db);
    service
        .submit_review(&reviewers[0], submission.id, review_dto(5, 5, 5))
        .await?;
    service
        .submit_review(&reviewers[1], submission.id, review_dto(4, 4, 4))
        .await?;
    assert_eq!(submission_status(db, submission.id).await?, "accepted");

    // A hostile third review would drag the aggregate below the reject line
    let review = service
        .submit_review(&reviewers[2], submission.id, review_dto(1, 1, 1))
        .await?;

    assert_eq!(review.submission_id, submission.id);
    assert_eq!(submission_status(db, submission.id).await?, "accepted");

    Ok(())
}

/// Tests the one-review-per-reviewer rule.
///
/// Expected: Err(AppError::Conflict) on the second attempt
#[tokio::test]
async fn rejects_duplicate_review() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (submission, reviewers) = submission_with_reviewers(db, 1).await?;

    let service = ReviewService::new(db);
    service
        .submit_review(&reviewers[0], submission.id, review_dto(4, 4, 4))
        .await?;

    let result = service
        .submit_review(&reviewers[0], submission.id, review_dto(2, 2, 2))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that only assigned reviewers may file.
///
/// Expected: Err(AuthError::NotAssignedReviewer)
#[tokio::test]
async fn denies_unassigned_reviewer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (submission, _) = submission_with_reviewers(db, 0).await?;
    let outsider = factory::user::create_reviewer(db).await?;

    let service = ReviewService::new(db);
    let result = service
        .submit_review(&outsider, submission.id, review_dto(4, 4, 4))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotAssignedReviewer { .. }))
    ));

    Ok(())
}

/// Tests score range validation.
///
/// Expected: Err(AppError::Validation) for each out-of-range score
#[tokio::test]
async fn rejects_out_of_range_scores() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (submission, reviewers) = submission_with_reviewers(db, 1).await?;

    let service = ReviewService::new(db);

    for dto in [review_dto(0, 3, 3), review_dto(3, 6, 3), review_dto(3, 3, -1)] {
        let result = service
            .submit_review(&reviewers[0], submission.id, dto)
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    Ok(())
}
