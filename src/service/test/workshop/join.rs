use super::*;

/// Tests joining a workshop with free seats.
///
/// Expected: Ok with the participant counted
#[tokio::test]
async fn joins_workshop_with_free_seats() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_participation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_organizer(db).await?;
    let event = factory::event::create_event(db, organizer.id).await?;
    let workshop = factory::workshop::create_workshop(db, event.id).await?;
    let user = factory::user::create_user(db).await?;

    let service = WorkshopService::new(db);
    let dto = service.join(&user, workshop.id).await?;

    assert_eq!(dto.participants_count, 1);

    Ok(())
}

/// Tests the capacity limit.
///
/// A workshop with one seat rejects the second joiner with a conflict.
///
/// Expected: Err(AppError::Conflict) once full
#[tokio::test]
async fn rejects_joiner_when_full() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_participation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_organizer(db).await?;
    let event = factory::event::create_event(db, organizer.id).await?;
    let workshop = factory::workshop::WorkshopFactory::new(db, event.id)
        .capacity(1)
        .build()
        .await?;
    let seated = factory::user::create_user(db).await?;
    factory::workshop::add_participant(db, workshop.id, seated.id).await?;

    let late = factory::user::create_user(db).await?;

    let service = WorkshopService::new(db);
    let result = service.join(&late, workshop.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that joining twice is rejected.
///
/// Expected: Err(AppError::Conflict) on the second join
#[tokio::test]
async fn rejects_double_join() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_participation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_organizer(db).await?;
    let event = factory::event::create_event(db, organizer.id).await?;
    let workshop = factory::workshop::create_workshop(db, event.id).await?;
    let user = factory::user::create_user(db).await?;

    let service = WorkshopService::new(db);
    service.join(&user, workshop.id).await?;

    let result = service.join(&user, workshop.id).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests leaving frees the seat for someone else.
///
/// Expected: Ok with the freed seat taken by the next joiner
#[tokio::test]
async fn leave_frees_the_seat() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_participation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_organizer(db).await?;
    let event = factory::event::create_event(db, organizer.id).await?;
    let workshop = factory::workshop::WorkshopFactory::new(db, event.id)
        .capacity(1)
        .build()
        .await?;
    let first = factory::user::create_user(db).await?;
    let second = factory::user::create_user(db).await?;

    let service = WorkshopService::new(db);
    service.join(&first, workshop.id).await?;
    service.leave(&first, workshop.id).await?;

    let dto = service.join(&second, workshop.id).await?;
    assert_eq!(dto.participants_count, 1);

    Ok(())
}
