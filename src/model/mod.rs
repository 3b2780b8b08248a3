//! Domain models, DTOs and operation parameter types.
//!
//! This module contains the typed vocabulary of the application: string-backed
//! enums for roles and statuses, DTOs exchanged with API clients, and parameter
//! structs passed from controllers into services. Enum values are stored as
//! strings in the database and parsed here at the boundary; services and the
//! review engine only ever see the typed forms.

pub mod api;
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
