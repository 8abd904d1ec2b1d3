//! User store use-case service.
//!
//! # Responsibility
//! - Provide the registration entry points: initialize, add, authenticate, list.
//! - Emit metadata-only diagnostics for each call.
//!
//! # Invariants
//! - Duplicate usernames and failed logins are values, never errors.
//! - Passwords and emails never appear in log lines.
//! - The store holds no state of its own; each call is independent.

use crate::model::user::{NewUser, User, UserListing};
use crate::repo::user_repo::{RepoResult, UserRepository};
use log::{debug, info, warn};

/// Use-case service for user registration and login checks.
pub struct UserStore<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserStore<R> {
    /// Creates a store over the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Ensures the persistent `users` table exists. Safe to call repeatedly.
    pub fn initialize(&self) -> RepoResult<()> {
        self.repo.ensure_schema()?;
        info!("event=store_init module=user_store status=ok");
        Ok(())
    }

    /// Registers a new user.
    ///
    /// # Contract
    /// - Returns `Ok(true)` when the record was inserted.
    /// - Returns `Ok(false)` when the username is already taken; the existing
    ///   record is left untouched.
    ///
    /// # Errors
    /// - `RepoError::Validation` for an empty username.
    /// - `RepoError::Db` when storage is unavailable or uninitialized.
    pub fn add_user(&self, username: &str, email: &str, password: &str) -> RepoResult<bool> {
        let inserted = self
            .repo
            .insert_user(&NewUser::new(username, email, password))
            .inspect_err(|err| {
                warn!("event=user_add module=user_store status=error error={err}");
            })?;

        if inserted {
            info!(
                "event=user_add module=user_store status=ok username_len={}",
                username.len()
            );
        } else {
            info!("event=user_add module=user_store status=duplicate");
        }
        Ok(inserted)
    }

    /// Checks a username/password pair.
    ///
    /// Returns `Ok(true)` only when the user exists and the stored password is
    /// exactly `password`. Unknown user and wrong password are indistinguishable.
    pub fn authenticate_user(&self, username: &str, password: &str) -> RepoResult<bool> {
        let matched = self
            .repo
            .get_user(username)?
            .is_some_and(|user| user.password_matches(password));

        debug!(
            "event=user_auth module=user_store status={}",
            if matched { "ok" } else { "rejected" }
        );
        Ok(matched)
    }

    /// Returns every `(username, email)` pair in insertion order.
    pub fn display_users(&self) -> RepoResult<UserListing> {
        let listing = self.repo.list_users()?;
        debug!("event=user_list module=user_store status=ok count={}", listing.len());
        Ok(listing)
    }

    /// Looks up one record by exact username.
    pub fn find_user(&self, username: &str) -> RepoResult<Option<User>> {
        self.repo.get_user(username)
    }

    /// Returns the number of stored users.
    pub fn user_count(&self) -> RepoResult<u64> {
        self.repo.count_users()
    }
}
