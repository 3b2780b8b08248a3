use super::*;

/// Tests moving an event through its lifecycle states.
///
/// Expected: Ok with each status persisted in turn
#[tokio::test]
async fn updates_event_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_organizer(db).await?;
    let event = factory::event::create_event(db, organizer.id).await?;

    let repo = EventRepository::new(db);
    let event = repo.set_status(event, EventStatus::Reviewing).await?;
    assert_eq!(event.status, "reviewing");

    let event = repo.set_status(event, EventStatus::Completed).await?;
    assert_eq!(event.status, "completed");

    let db_event = entity::prelude::Event::find_by_id(event.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_event.status, "completed");

    Ok(())
}
