use super::*;

/// Tests the unread badge count.
///
/// Verifies that only unread notifications for the given user are counted.
///
/// Expected: Ok with per-user unread count
#[tokio::test]
async fn counts_only_unread_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    let repo = NotificationRepository::new(db);
    let first = repo
        .create(params(user.id, notification::KIND_REVIEW_ASSIGNED))
        .await?;
    repo.create(params(user.id, notification::KIND_NEW_MESSAGE))
        .await?;
    repo.create(params(other.id, notification::KIND_NEW_MESSAGE))
        .await?;

    assert_eq!(repo.count_unread(user.id).await?, 2);

    repo.mark_read(first).await?;
    assert_eq!(repo.count_unread(user.id).await?, 1);
    assert_eq!(repo.count_unread(other.id).await?, 1);

    Ok(())
}
