use super::*;

/// Tests a full certificate generation pass over a completed event.
///
/// A participant registrant, a speaker registrant, a committee member and the
/// organizer each receive their kind of certificate. Re-running the pass
/// creates nothing new.
///
/// Expected: Ok with 4 created, then 0 created and 4 existing
#[tokio::test]
async fn generates_certificates_for_every_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_participation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_organizer(db).await?;
    let event = factory::event::EventFactory::new(db, organizer.id)
        .status("completed")
        .build()
        .await?;

    let attendee = factory::user::create_user(db).await?;
    factory::registration::create_registration(db, event.id, attendee.id).await?;

    let speaker = factory::user::create_user(db).await?;
    factory::registration::RegistrationFactory::new(db, event.id, speaker.id)
        .kind("speaker")
        .build()
        .await?;

    let member = factory::user::create_reviewer(db).await?;
    factory::event::add_committee_member(db, event.id, member.id).await?;

    let service = CertificateService::new(db);
    let outcome = service.generate_for_event(&organizer, event.id).await?;

    assert_eq!(outcome.created, 4);
    assert_eq!(outcome.existing, 0);

    let kinds: Vec<(i32, &str)> = vec![
        (attendee.id, "participation"),
        (speaker.id, "presentation"),
        (member.id, "committee"),
        (organizer.id, "organization"),
    ];
    for (user_id, kind) in kinds {
        let certificates = service
            .list_mine(
                &entity::prelude::User::find_by_id(user_id)
                    .one(db)
                    .await?
                    .unwrap(),
            )
            .await?;
        assert!(certificates.iter().any(|c| c.kind.as_str() == kind));
    }

    // Second pass is idempotent
    let rerun = service.generate_for_event(&organizer, event.id).await?;
    assert_eq!(rerun.created, 0);
    assert_eq!(rerun.existing, 4);

    Ok(())
}

/// Tests that unregistered users earn nothing.
///
/// Expected: Ok with only the organizer's certificate created
#[tokio::test]
async fn skips_unregistered_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_participation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_organizer(db).await?;
    let event = factory::event::EventFactory::new(db, organizer.id)
        .status("completed")
        .build()
        .await?;

    let bystander = factory::user::create_user(db).await?;

    let service = CertificateService::new(db);
    let outcome = service.generate_for_event(&organizer, event.id).await?;

    assert_eq!(outcome.created, 1);
    assert!(service.list_mine(&bystander).await?.is_empty());

    Ok(())
}

/// Tests that generation is refused before the event has completed.
///
/// Expected: Err(AppError::Validation)
#[tokio::test]
async fn rejects_uncompleted_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_participation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_organizer(db).await?;
    let event = factory::event::create_event(db, organizer.id).await?;

    let service = CertificateService::new(db);
    let result = service.generate_for_event(&organizer, event.id).await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests that only the event's organizer (or a super admin) may generate.
///
/// Expected: Err(AuthError::NotEventOrganizer)
#[tokio::test]
async fn denies_other_organizers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_participation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_organizer(db).await?;
    let event = factory::event::EventFactory::new(db, organizer.id)
        .status("completed")
        .build()
        .await?;
    let other = factory::user::create_organizer(db).await?;

    let service = CertificateService::new(db);
    let result = service.generate_for_event(&other, event.id).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotEventOrganizer { .. }))
    ));

    Ok(())
}
