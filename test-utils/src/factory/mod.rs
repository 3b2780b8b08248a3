//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` struct for customization plus a `create_*`
//! convenience function for quick default creation. Factories generate unique
//! values from a shared counter so tests never collide on unique columns.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Defaults
//! let reviewer = factory::user::create_reviewer(&db).await?;
//!
//! // Customization via the builder
//! let event = factory::event::EventFactory::new(&db, organizer.id)
//!     .status("completed")
//!     .build()
//!     .await?;
//!
//! // Whole-workflow helper
//! let (organizer, event, author, submission) =
//!     factory::helpers::create_submission_with_dependencies(&db).await?;
//! ```

pub mod event;
pub mod helpers;
pub mod registration;
pub mod review;
pub mod submission;
pub mod survey;
pub mod user;
pub mod workshop;

// Re-export commonly used factory functions for concise usage
pub use event::create_event;
pub use registration::create_registration;
pub use review::create_review;
pub use submission::create_submission;
pub use survey::create_survey;
pub use user::{create_reviewer, create_user};
pub use workshop::create_workshop;
