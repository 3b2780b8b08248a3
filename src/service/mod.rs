//! Business logic layer.
//!
//! Services sit between the controllers and the repositories: they enforce
//! authorization rules that depend on data (event ownership, reviewer
//! assignment), run multi-step workflows in transactions, and convert entity
//! models into DTOs. Notification emission is fire-and-forget: a failed
//! notification is logged and never fails the operation that triggered it.

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

#[cfg(test)]
mod test;
