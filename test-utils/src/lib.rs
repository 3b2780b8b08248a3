//! Symposia Test Utils
//!
//! Shared testing utilities for the conference backend. Offers a builder
//! pattern for creating test contexts with in-memory SQLite databases and
//! customizable table schemas, plus factories for constructing domain
//! entities with sensible defaults.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database
//! tables, then the factories to populate it:
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//! use entity::prelude::{Event, User};
//!
//! #[tokio::test]
//! async fn lists_events() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(User)
//!         .with_table(Event)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     let organizer = factory::user::UserFactory::new(db).role("organizer").build().await?;
//!     let event = factory::event::create_event(db, organizer.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
