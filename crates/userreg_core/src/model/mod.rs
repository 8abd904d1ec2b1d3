//! Domain model for registered users.
//!
//! # Invariants
//! - A username identifies at most one record.
//! - Records are immutable once stored.

pub mod user;
