//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into registration use-cases.
//! - Keep callers decoupled from storage details.

pub mod user_store;
