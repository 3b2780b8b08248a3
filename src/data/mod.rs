//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD)
//! for each domain in the application. Repositories use SeaORM entity models
//! internally and return them to the service layer, which converts to DTOs at the
//! controller boundary. Repositories are generic over `ConnectionTrait` so the
//! review workflow can run them against a transaction as well as the pooled
//! connection.

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
