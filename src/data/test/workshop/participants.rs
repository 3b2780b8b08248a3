use super::*;

/// Tests the participant roster operations.
///
/// Verifies that joining, counting and leaving all agree with each other.
///
/// Expected: Ok with roster reflecting each change
#[tokio::test]
async fn tracks_participants() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_participation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_organizer(db).await?;
    let event = factory::event::create_event(db, organizer.id).await?;
    let workshop = factory::workshop::create_workshop(db, event.id).await?;
    let user1 = factory::user::create_user(db).await?;
    let user2 = factory::user::create_user(db).await?;

    let repo = WorkshopRepository::new(db);

    repo.add_participant(workshop.id, user1.id).await?;
    repo.add_participant(workshop.id, user2.id).await?;

    assert_eq!(repo.count_participants(workshop.id).await?, 2);
    assert!(repo.is_participant(workshop.id, user1.id).await?);

    repo.remove_participant(workshop.id, user1.id).await?;

    assert_eq!(repo.count_participants(workshop.id).await?, 1);
    assert!(!repo.is_participant(workshop.id, user1.id).await?);
    assert!(repo.is_participant(workshop.id, user2.id).await?);

    Ok(())
}
