//! Cross-entity helpers for building common test scenarios.

use std::sync::atomic::{AtomicU64, Ordering};

use sea_orm::DatabaseConnection;

use crate::error::TestError;

use super::{event::EventFactory, submission::SubmissionFactory, user::UserFactory};

static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Returns a process-wide unique id for factory-generated values.
///
/// Used to keep generated usernames and emails distinct across tests that
/// share a factory within one binary.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Creates an organizer, an event in open call, an author, and a pending
/// submission by that author to that event.
///
/// # Returns
///
/// `(organizer, event, author, submission)`
pub async fn create_submission_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::event::Model,
        entity::user::Model,
        entity::submission::Model,
    ),
    TestError,
> {
    let organizer = UserFactory::new(db).role("organizer").build().await?;
    let event = EventFactory::new(db, organizer.id)
        .status("open_call")
        .build()
        .await?;
    let author = UserFactory::new(db).build().await?;
    let submission = SubmissionFactory::new(db, event.id, author.id).build().await?;

    Ok((organizer, event, author, submission))
}
