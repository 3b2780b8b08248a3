use super::*;

/// Tests adding a user to the scientific committee.
///
/// Verifies that a first add returns true and a repeat add returns false
/// without creating a duplicate row.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn adds_member_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_organizer(db).await?;
    let event = factory::event::create_event(db, organizer.id).await?;
    let member = factory::user::create_reviewer(db).await?;

    let repo = EventRepository::new(db);

    assert!(repo.add_committee_member(event.id, member.id).await?);
    assert!(!repo.add_committee_member(event.id, member.id).await?);

    assert!(repo.is_committee_member(event.id, member.id).await?);
    assert_eq!(repo.committee_member_ids(event.id).await?, vec![member.id]);

    Ok(())
}

/// Tests committee membership is scoped per event.
///
/// Expected: member of one event is not a member of another
#[tokio::test]
async fn scopes_membership_to_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_organizer(db).await?;
    let event1 = factory::event::create_event(db, organizer.id).await?;
    let event2 = factory::event::create_event(db, organizer.id).await?;
    let member = factory::user::create_reviewer(db).await?;

    let repo = EventRepository::new(db);
    repo.add_committee_member(event1.id, member.id).await?;

    assert!(repo.is_committee_member(event1.id, member.id).await?);
    assert!(!repo.is_committee_member(event2.id, member.id).await?);

    Ok(())
}
