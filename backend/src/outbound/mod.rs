//! Outbound adapters implementing the [`crate::domain::ports::UserRepository`]
//! port.
//!
//! - **persistence**: PostgreSQL-backed repository using Diesel.
//! - **memory**: process-local store for running without a database.
//!
//! Adapters translate between domain types and storage representations and
//! contain no business logic.

pub mod memory;
pub mod persistence;
