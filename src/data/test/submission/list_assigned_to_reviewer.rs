use super::*;

/// Tests listing the submissions assigned to a reviewer.
///
/// Verifies that only submissions with an assignment row for the reviewer are
/// returned, not every submission in the event.
///
/// Expected: Ok with only the assigned submission
#[tokio::test]
async fn lists_only_assigned_submissions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, event, author, assigned) =
        test_utils::factory::helpers::create_submission_with_dependencies(db)
            .await
            .unwrap();
    let other = factory::submission::create_submission(db, event.id, author.id).await?;
    let reviewer = factory::user::create_reviewer(db).await?;

    let repo = SubmissionRepository::new(db);
    repo.add_reviewer(assigned.id, reviewer.id).await?;

    let listed = repo.list_assigned_to_reviewer(reviewer.id).await?;

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, assigned.id);
    assert!(listed.iter().all(|s| s.id != other.id));

    Ok(())
}

/// Tests that a reviewer with no assignments gets an empty list.
///
/// Expected: Ok with empty vec
#[tokio::test]
async fn returns_empty_for_unassigned_reviewer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let reviewer = factory::user::create_reviewer(db).await?;

    let repo = SubmissionRepository::new(db);
    let listed = repo.list_assigned_to_reviewer(reviewer.id).await?;

    assert!(listed.is_empty());

    Ok(())
}
