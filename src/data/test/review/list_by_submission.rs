use super::*;

/// Tests listing and counting the reviews on one submission.
///
/// Verifies that reviews on other submissions are excluded.
///
/// Expected: Ok with only the submission's reviews
#[tokio::test]
async fn lists_reviews_for_one_submission() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, event, author, submission) =
        test_utils::factory::helpers::create_submission_with_dependencies(db)
            .await
            .unwrap();
    let other = factory::submission::create_submission(db, event.id, author.id).await?;
    let reviewer1 = factory::user::create_reviewer(db).await?;
    let reviewer2 = factory::user::create_reviewer(db).await?;

    factory::review::create_review(db, submission.id, reviewer1.id).await?;
    factory::review::create_review(db, submission.id, reviewer2.id).await?;
    factory::review::create_review(db, other.id, reviewer1.id).await?;

    let repo = ReviewRepository::new(db);
    let reviews = repo.list_by_submission(submission.id).await?;

    assert_eq!(reviews.len(), 2);
    assert!(reviews.iter().all(|r| r.submission_id == submission.id));
    assert_eq!(repo.count_by_submission(submission.id).await?, 2);
    assert_eq!(repo.count_by_submission(other.id).await?, 1);

    Ok(())
}
