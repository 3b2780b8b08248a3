use super::*;

/// Tests marking every unread notification as read in one pass.
///
/// Verifies that the returned count reflects the rows touched and that other
/// users' notifications are untouched.
///
/// Expected: Ok with unread count dropping to zero
#[tokio::test]
async fn marks_all_unread_as_read() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    let repo = NotificationRepository::new(db);
    repo.create(params(user.id, notification::KIND_REVIEW_ASSIGNED))
        .await?;
    repo.create(params(user.id, notification::KIND_NEW_MESSAGE))
        .await?;
    repo.create(params(other.id, notification::KIND_NEW_MESSAGE))
        .await?;

    let updated = repo.mark_all_read(user.id).await?;

    assert_eq!(updated, 2);
    assert_eq!(repo.count_unread(user.id).await?, 0);
    assert_eq!(repo.count_unread(other.id).await?, 1);

    // A second pass has nothing left to touch
    assert_eq!(repo.mark_all_read(user.id).await?, 0);

    Ok(())
}
