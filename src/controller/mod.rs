//! HTTP request handlers.
//!
//! Controllers parse the request, run the `AuthGuard` for coarse role checks,
//! delegate to a service and serialize the resulting DTO. No business logic
//! lives here.

pub mod auth;
pub mod certificate;
pub mod event;
pub mod message;
pub mod notification;
pub mod registration;
pub mod review;
pub mod submission;
pub mod survey;
pub mod user;
pub mod workshop;
