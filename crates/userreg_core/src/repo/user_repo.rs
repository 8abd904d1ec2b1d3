//! User repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Insert, look up and enumerate rows of the `users` table.
//! - Translate storage outcomes into semantic results.
//!
//! # Invariants
//! - Uniqueness is enforced by the table constraint, never by a pre-check.
//! - Listing order is insertion order (`rowid`).
//! - Read paths reject persisted rows that violate the model.

use crate::db::{initialize_schema, DbError};
use crate::model::user::{validate_username, NewUser, User, UserListing, UserValidationError};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const USER_SELECT_SQL: &str = "SELECT
    username,
    email,
    password,
    created_at
FROM users";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for user persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(UserValidationError),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted user data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<UserValidationError> for RepoError {
    fn from(value: UserValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for the `users` table.
pub trait UserRepository {
    /// Creates the backing table if it is missing.
    fn ensure_schema(&self) -> RepoResult<()>;
    /// Inserts a user; `Ok(false)` when the username is already taken.
    fn insert_user(&self, user: &NewUser) -> RepoResult<bool>;
    fn get_user(&self, username: &str) -> RepoResult<Option<User>>;
    fn list_users(&self) -> RepoResult<UserListing>;
    fn count_users(&self) -> RepoResult<u64>;
}

/// SQLite-backed user repository over a caller-owned connection.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn ensure_schema(&self) -> RepoResult<()> {
        initialize_schema(self.conn)?;
        Ok(())
    }

    fn insert_user(&self, user: &NewUser) -> RepoResult<bool> {
        user.validate()?;

        let changed = self.conn.execute(
            "INSERT INTO users (username, email, password)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(username) DO NOTHING;",
            params![
                user.username.as_str(),
                user.email.as_str(),
                user.password.as_str(),
            ],
        )?;

        Ok(changed == 1)
    }

    fn get_user(&self, username: &str) -> RepoResult<Option<User>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} WHERE username = ?1;"))?;

        let row = stmt
            .query_row([username], |row| Ok(read_user_row(row)))
            .optional()?;

        match row {
            Some(parsed) => Ok(Some(parsed?)),
            None => Ok(None),
        }
    }

    fn list_users(&self) -> RepoResult<UserListing> {
        let mut stmt = self
            .conn
            .prepare("SELECT username, email FROM users ORDER BY rowid ASC;")?;
        let mut rows = stmt.query([])?;
        let mut listing = Vec::new();

        while let Some(row) = rows.next()? {
            let username: String = row.get("username")?;
            validate_username(&username).map_err(|_| empty_username_error())?;
            listing.push((username, row.get("email")?));
        }

        Ok(listing)
    }

    fn count_users(&self) -> RepoResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM users;", [], |row| row.get(0))?;
        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative row count `{count}`")))
    }
}

fn read_user_row(row: &Row<'_>) -> RepoResult<User> {
    let user = User {
        username: row.get("username")?,
        email: row.get("email")?,
        password: row.get("password")?,
        created_at: row.get("created_at")?,
    };
    validate_username(&user.username).map_err(|_| empty_username_error())?;
    Ok(user)
}

fn empty_username_error() -> RepoError {
    RepoError::InvalidData("empty value in users.username".to_string())
}
