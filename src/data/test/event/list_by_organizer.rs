use super::*;

/// Tests listing events owned by one organizer.
///
/// Verifies that only that organizer's events come back, soonest first.
///
/// Expected: Ok with two events in start-date order
#[tokio::test]
async fn lists_only_own_events_soonest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_organizer(db).await?;
    let other = factory::user::create_organizer(db).await?;

    let later = factory::event::EventFactory::new(db, organizer.id)
        .title("Later Event")
        .start_date(NaiveDate::from_ymd_opt(2026, 12, 1).unwrap())
        .build()
        .await?;
    let sooner = factory::event::EventFactory::new(db, organizer.id)
        .title("Sooner Event")
        .start_date(NaiveDate::from_ymd_opt(2026, 10, 1).unwrap())
        .build()
        .await?;
    factory::create_event(db, other.id).await?;

    let events = EventRepository::new(db)
        .list_by_organizer(organizer.id)
        .await?;

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].id, sooner.id);
    assert_eq!(events[1].id, later.id);

    Ok(())
}
