use super::*;

/// Tests the organizer forcing a decision status by hand.
///
/// Verifies that the status lands without any reviews on record and that the
/// author is notified of the decision.
///
/// Expected: Ok with status accepted and one author notification
#[tokio::test]
async fn organizer_override_notifies_author() -> Result<(), AppError> {
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

    let service = SubmissionService::new(db);
    let updated = service
        .override_status(
            &organizer,
            submission.id,
            OverrideStatusDto {
                status: SubmissionStatus::Accepted,
            },
        )
        .await?;

    assert_eq!(updated.status, SubmissionStatus::Accepted);

    let notifications = entity::prelude::Notification::find()
        .filter(entity::notification::Column::UserId.eq(author.id))
        .all(db)
        .await
        .unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, "submission_accepted");

    Ok(())
}

/// Tests that a non-decision override stays silent.
///
/// Moving a submission back to under review is bookkeeping; the author only
/// hears about decisions.
///
/// Expected: Ok with no notification emitted
#[tokio::test]
async fn non_terminal_override_emits_no_notification() -> Result<(), AppError> {
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

    let service = SubmissionService::new(db);
    let updated = service
        .override_status(
            &organizer,
            submission.id,
            OverrideStatusDto {
                status: SubmissionStatus::UnderReview,
            },
        )
        .await?;

    assert_eq!(updated.status, SubmissionStatus::UnderReview);

    let notifications = entity::prelude::Notification::find()
        .filter(entity::notification::Column::UserId.eq(author.id))
        .all(db)
        .await
        .unwrap();
    assert!(notifications.is_empty());

    Ok(())
}

/// Tests that only the event's organizer (or a super admin) may override.
///
/// Expected: Err(AuthError::NotEventOrganizer)
#[tokio::test]
async fn denies_other_organizers() -> Result<(), AppError> {
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

    let service = SubmissionService::new(db);
    let result = service
        .override_status(
            &outsider,
            submission.id,
            OverrideStatusDto {
                status: SubmissionStatus::Rejected,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotEventOrganizer { .. }))
    ));

    Ok(())
}
