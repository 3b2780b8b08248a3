use super::*;

/// Tests assigning reviewers to a pending submission.
///
/// Verifies that both reviewers are assigned, the submission moves to under
/// review, and each reviewer receives an assignment notification.
///
/// Expected: Ok with both ids assigned and status under_review
#[tokio::test]
async fn assigns_reviewers_and_moves_pending_to_under_review() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (organizer, _, _, submission) =
        factory::helpers::create_submission_with_dependencies(db)
            .await
            .unwrap();
    let reviewer1 = factory::user::create_reviewer(db).await?;
    let reviewer2 = factory::user::create_reviewer(db).await?;

    let service = ReviewService::new(db);
    let outcome = service
        .assign_reviewers(
            &organizer,
            submission.id,
            AssignReviewersDto {
                reviewer_ids: vec![reviewer1.id, reviewer2.id],
            },
        )
        .await?;

    assert_eq!(outcome.assigned_ids, vec![reviewer1.id, reviewer2.id]);
    assert!(outcome.already_assigned_ids.is_empty());
    assert!(outcome.missing_ids.is_empty());
    assert_eq!(outcome.status, SubmissionStatus::UnderReview);

    assert_eq!(submission_status(db, submission.id).await?, "under_review");

    // Each reviewer got an assignment notification
    for reviewer in [&reviewer1, &reviewer2] {
        let notifications = notifications_for(db, reviewer.id).await?;
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].kind, notification::KIND_REVIEW_ASSIGNED);
    }

    Ok(())
}

/// Tests the tolerant per-id outcome reporting.
///
/// Verifies that already-assigned ids and ids that don't resolve to a
/// reviewer-role user are reported instead of failing the request, and that
/// re-assigning someone does not emit a second assignment notification.
///
/// Expected: Ok with ids sorted into the three outcome buckets
#[tokio::test]
async fn reports_already_assigned_and_missing_ids() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (organizer, _, author, submission) =
        factory::helpers::create_submission_with_dependencies(db)
            .await
            .unwrap();
    let assigned = factory::user::create_reviewer(db).await?;
    let fresh = factory::user::create_reviewer(db).await?;
    factory::submission::assign_reviewer(db, submission.id, assigned.id).await?;

    let service = ReviewService::new(db);
    let outcome = service
        .assign_reviewers(
            &organizer,
            submission.id,
            // author.id has the wrong role, 9999 doesn't exist
            AssignReviewersDto {
                reviewer_ids: vec![assigned.id, fresh.id, author.id, 9999],
            },
        )
        .await?;

    assert_eq!(outcome.assigned_ids, vec![fresh.id]);
    assert_eq!(outcome.already_assigned_ids, vec![assigned.id]);
    assert_eq!(outcome.missing_ids, vec![author.id, 9999]);

    // Only the newly assigned reviewer is notified
    assert!(notifications_for(db, assigned.id).await?.is_empty());
    assert_eq!(notifications_for(db, fresh.id).await?.len(), 1);

    Ok(())
}

/// Tests that an empty reviewer list is rejected up front.
///
/// Expected: Err(AppError::Validation)
#[tokio::test]
async fn rejects_empty_reviewer_list() {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (organizer, _, _, submission) =
        factory::helpers::create_submission_with_dependencies(db)
            .await
            .unwrap();

    let service = ReviewService::new(db);
    let result = service
        .assign_reviewers(
            &organizer,
            submission.id,
            AssignReviewersDto {
                reviewer_ids: vec![],
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
}

/// Tests that a user with no standing on the event cannot assign.
///
/// Expected: Err(AuthError::NotEventOrganizer)
#[tokio::test]
async fn denies_user_without_event_standing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, submission) = factory::helpers::create_submission_with_dependencies(db)
        .await
        .unwrap();
    let outsider = factory::user::create_organizer(db).await?;
    let reviewer = factory::user::create_reviewer(db).await?;

    let service = ReviewService::new(db);
    let result = service
        .assign_reviewers(
            &outsider,
            submission.id,
            AssignReviewersDto {
                reviewer_ids: vec![reviewer.id],
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotEventOrganizer { .. }))
    ));

    Ok(())
}

/// Tests that a scientific committee member may assign reviewers.
///
/// Expected: Ok with reviewer assigned
#[tokio::test]
async fn allows_committee_member_to_assign() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, event, _, submission) = factory::helpers::create_submission_with_dependencies(db)
        .await
        .unwrap();
    let member = factory::user::create_reviewer(db).await?;
    factory::event::add_committee_member(db, event.id, member.id).await?;
    let reviewer = factory::user::create_reviewer(db).await?;

    let service = ReviewService::new(db);
    let outcome = service
        .assign_reviewers(
            &member,
            submission.id,
            AssignReviewersDto {
                reviewer_ids: vec![reviewer.id],
            },
        )
        .await?;

    assert_eq!(outcome.assigned_ids, vec![reviewer.id]);

    Ok(())
}

/// Tests assignment against an unknown submission.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_submission() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_organizer(db).await?;
    let reviewer = factory::user::create_reviewer(db).await?;

    let service = ReviewService::new(db);
    let result = service
        .assign_reviewers(
            &organizer,
            9999,
            AssignReviewersDto {
                reviewer_ids: vec![reviewer.id],
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
