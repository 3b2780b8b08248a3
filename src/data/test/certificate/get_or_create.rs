use super::*;

/// Tests the get-or-create behavior behind certificate generation.
///
/// Verifies that a second call for the same (event, user, kind) returns the
/// existing row instead of creating a duplicate, while a different kind for
/// the same user creates a new one.
///
/// Expected: Ok((_, true)) once per (event, user, kind)
#[tokio::test]
async fn creates_once_per_event_user_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_participation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_organizer(db).await?;
    let event = factory::event::create_event(db, organizer.id).await?;
    let user = factory::user::create_user(db).await?;

    let repo = CertificateRepository::new(db);

    let (certificate, created) = repo
        .get_or_create(event.id, user.id, CertificateKind::Participation)
        .await?;
    assert!(created);
    assert_eq!(certificate.kind, "participation");

    let (existing, created) = repo
        .get_or_create(event.id, user.id, CertificateKind::Participation)
        .await?;
    assert!(!created);
    assert_eq!(existing.id, certificate.id);

    // Same user, different kind is a new certificate
    let (presentation, created) = repo
        .get_or_create(event.id, user.id, CertificateKind::Presentation)
        .await?;
    assert!(created);
    assert_ne!(presentation.id, certificate.id);

    assert_eq!(repo.list_by_user(user.id).await?.len(), 2);

    Ok(())
}
