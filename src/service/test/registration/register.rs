use super::*;

/// Tests a user registering for an open event.
///
/// Expected: Ok with a pending-payment registration
#[tokio::test]
async fn registers_for_open_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_participation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_organizer(db).await?;
    let event = factory::create_event(db, organizer.id).await?;
    let user = factory::user::create_user(db).await?;

    let service = RegistrationService::new(db);
    let registration = service
        .register(
            &user,
            event.id,
            CreateRegistrationDto {
                kind: RegistrationKind::Participant,
            },
        )
        .await?;

    assert_eq!(registration.event_id, event.id);
    assert_eq!(registration.user_id, user.id);
    assert_eq!(registration.kind, RegistrationKind::Participant);

    Ok(())
}

/// Tests that one user cannot register twice for the same event.
///
/// Expected: Err(AppError::Conflict) on the second attempt
#[tokio::test]
async fn rejects_duplicate_registration() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_participation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_organizer(db).await?;
    let event = factory::create_event(db, organizer.id).await?;
    let user = factory::user::create_user(db).await?;

    let service = RegistrationService::new(db);
    service
        .register(
            &user,
            event.id,
            CreateRegistrationDto {
                kind: RegistrationKind::Participant,
            },
        )
        .await?;

    let result = service
        .register(
            &user,
            event.id,
            CreateRegistrationDto {
                kind: RegistrationKind::Speaker,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that a draft event does not accept registrations.
///
/// Expected: Err(AppError::Validation)
#[tokio::test]
async fn rejects_draft_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_participation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_organizer(db).await?;
    let event = factory::event::EventFactory::new(db, organizer.id)
        .status("draft")
        .build()
        .await?;
    let user = factory::user::create_user(db).await?;

    let service = RegistrationService::new(db);
    let result = service
        .register(
            &user,
            event.id,
            CreateRegistrationDto {
                kind: RegistrationKind::Participant,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}
