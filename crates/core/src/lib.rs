//! Wai'tuMusic Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for the internal booking
//! objectives system. It is database-agnostic and defines traits that are
//! implemented by the `storage-sqlite` crate.

pub mod auth;
pub mod errors;
pub mod objectives;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
