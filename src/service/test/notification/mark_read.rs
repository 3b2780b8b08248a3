use super::*;

/// Tests marking one's own notification as read.
///
/// Expected: Ok with the notification flagged read
#[tokio::test]
async fn marks_own_notification_read() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let service = NotificationService::new(db);
    service.emit(params(user.id)).await;

    let notifications = service.list_mine(&user).await?;
    assert_eq!(notifications.len(), 1);
    assert!(!notifications[0].is_read);

    let updated = service.mark_read(&user, notifications[0].id).await?;
    assert!(updated.is_read);
    assert_eq!(service.unread_count(&user).await?, 0);

    Ok(())
}

/// Tests that a notification can only be marked read by its owner.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_marking_another_users_notification() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    let service = NotificationService::new(db);
    service.emit(params(owner.id)).await;

    let notifications = service.list_mine(&owner).await?;
    let result = service.mark_read(&other, notifications[0].id).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied { .. }))
    ));

    // The owner's notification is untouched
    assert_eq!(service.unread_count(&owner).await?, 1);

    Ok(())
}
