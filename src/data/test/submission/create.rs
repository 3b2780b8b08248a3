use super::*;

/// Tests creating a new submission.
///
/// Verifies that the repository creates a submission in pending status with
/// the submitting author and target event recorded.
///
/// Expected: Ok with pending submission created
#[tokio::test]
async fn creates_pending_submission() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_organizer(db).await?;
    let event = factory::event::create_event(db, organizer.id).await?;
    let author = factory::user::create_user(db).await?;

    let repo = SubmissionRepository::new(db);
    let submission = repo
        .create(
            event.id,
            author.id,
            CreateSubmissionDto {
                title: "A Study of Things".to_string(),
                abstract_text: "We study things.".to_string(),
                keywords: Some("things, studies".to_string()),
                kind: SubmissionKind::Oral,
            },
        )
        .await?;

    assert_eq!(submission.event_id, event.id);
    assert_eq!(submission.author_id, author.id);
    assert_eq!(submission.title, "A Study of Things");
    assert_eq!(submission.kind, "oral");
    assert_eq!(submission.status, "pending");

    // Verify submission exists in database
    let db_submission = entity::prelude::Submission::find_by_id(submission.id)
        .one(db)
        .await?;
    assert!(db_submission.is_some());

    Ok(())
}

/// Tests counting submissions per event.
///
/// Expected: count reflects only the given event's submissions
#[tokio::test]
async fn counts_submissions_by_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_organizer(db).await?;
    let event1 = factory::event::create_event(db, organizer.id).await?;
    let event2 = factory::event::create_event(db, organizer.id).await?;
    let author = factory::user::create_user(db).await?;

    factory::submission::create_submission(db, event1.id, author.id).await?;
    factory::submission::create_submission(db, event1.id, author.id).await?;
    factory::submission::create_submission(db, event2.id, author.id).await?;

    let repo = SubmissionRepository::new(db);
    assert_eq!(repo.count_by_event(event1.id).await?, 2);
    assert_eq!(repo.count_by_event(event2.id).await?, 1);

    Ok(())
}
