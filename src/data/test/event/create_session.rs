use super::*;

fn session_dto(title: &str, hour: u32) -> CreateConferenceSessionDto {
    CreateConferenceSessionDto {
        title: title.to_string(),
        session_type: "talks".to_string(),
        date: NaiveDate::from_ymd_opt(2026, 11, 2).unwrap(),
        start_time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(hour + 1, 30, 0).unwrap(),
        room: Some("Room A".to_string()),
        chair_id: None,
    }
}

/// Tests creating and listing program sessions.
///
/// Verifies that sessions come back ordered by date and start time regardless
/// of insertion order.
///
/// Expected: Ok with sessions in chronological order
#[tokio::test]
async fn lists_sessions_in_chronological_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_participation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_organizer(db).await?;
    let event = factory::event::create_event(db, organizer.id).await?;

    let repo = EventRepository::new(db);
    repo.create_session(event.id, session_dto("Afternoon talks", 14))
        .await?;
    repo.create_session(event.id, session_dto("Morning talks", 9))
        .await?;

    let sessions = repo.list_sessions(event.id).await?;

    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0].title, "Morning talks");
    assert_eq!(sessions[1].title, "Afternoon talks");

    Ok(())
}

/// Tests deleting a session from the program.
///
/// Expected: Ok with session removed
#[tokio::test]
async fn deletes_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_participation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_organizer(db).await?;
    let event = factory::event::create_event(db, organizer.id).await?;

    let repo = EventRepository::new(db);
    let session = repo
        .create_session(event.id, session_dto("Keynote", 10))
        .await?;

    repo.delete_session(session.id).await?;

    assert!(repo.list_sessions(event.id).await?.is_empty());

    Ok(())
}
