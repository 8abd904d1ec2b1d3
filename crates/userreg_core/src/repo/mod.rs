//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract used by the user store.
//! - Isolate SQLite query details from use-case orchestration.
//!
//! # Invariants
//! - Write paths validate input before any SQL mutation.
//! - Duplicate usernames are a value (`false`), not an error.

pub mod user_repo;
