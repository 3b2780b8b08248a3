use super::*;

/// Tests recording a reviewer assignment.
///
/// Verifies that the assignment is persisted and visible through both
/// `is_assigned` and `assigned_reviewer_ids`.
///
/// Expected: Ok with assignment recorded
#[tokio::test]
async fn records_assignment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, submission) =
        test_utils::factory::helpers::create_submission_with_dependencies(db)
            .await
            .unwrap();
    let reviewer = factory::user::create_reviewer(db).await?;

    let repo = SubmissionRepository::new(db);
    repo.add_reviewer(submission.id, reviewer.id).await?;

    assert!(repo.is_assigned(submission.id, reviewer.id).await?);
    assert_eq!(
        repo.assigned_reviewer_ids(submission.id).await?,
        vec![reviewer.id]
    );

    Ok(())
}

/// Tests that unassigned reviewers are not reported as assigned.
///
/// Expected: is_assigned returns false
#[tokio::test]
async fn reports_unassigned_reviewer_as_not_assigned() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, submission) =
        test_utils::factory::helpers::create_submission_with_dependencies(db)
            .await
            .unwrap();
    let reviewer = factory::user::create_reviewer(db).await?;

    let repo = SubmissionRepository::new(db);
    assert!(!repo.is_assigned(submission.id, reviewer.id).await?);
    assert!(repo.assigned_reviewer_ids(submission.id).await?.is_empty());

    Ok(())
}
