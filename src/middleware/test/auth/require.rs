use super::*;

/// Tests an organizer passing an organizer check.
///
/// Verifies that the guard resolves the session's user, finds them in the
/// database and accepts the matching role.
///
/// Expected: Ok(User) with the organizer returned
#[tokio::test]
async fn grants_access_to_matching_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_organizer(db).await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::Organizer]).await;

    assert!(result.is_ok());
    let returned_user = result.unwrap();
    assert_eq!(returned_user.id, user.id);
    assert_eq!(returned_user.role, "organizer");

    Ok(())
}

/// Tests super admin passing role-specific checks.
///
/// A super admin satisfies organizer and reviewer requirements without
/// holding those roles.
///
/// Expected: Ok(User) for both checks
#[tokio::test]
async fn super_admin_passes_role_checks() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .role("super_admin")
        .build()
        .await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);

    assert!(auth_guard.require(&[Permission::Organizer]).await.is_ok());
    assert!(auth_guard.require(&[Permission::Reviewer]).await.is_ok());
    assert!(auth_guard.require(&[Permission::SuperAdmin]).await.is_ok());

    Ok(())
}

/// Tests a user lacking the required role.
///
/// Expected: Err(AuthError::RoleRequired)
#[tokio::test]
async fn denies_wrong_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::Organizer]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::RoleRequired { .. }))
    ));

    Ok(())
}

/// Tests an empty permission list only requires being logged in.
///
/// Expected: Ok(User) for any authenticated account
#[tokio::test]
async fn empty_permissions_require_login_only() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, user.id);

    Ok(())
}

/// Tests an unauthenticated session.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn denies_unauthenticated_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at a deleted account.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn denies_stale_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(9999).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(9999)))
    ));

    Ok(())
}
