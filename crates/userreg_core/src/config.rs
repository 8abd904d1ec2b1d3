//! Store location configuration.
//!
//! The data file defaults to `users.db` in the working directory. Nothing is
//! read from the environment; callers override the path explicitly.

use crate::db::{open_db, DbResult};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Default data-file name for the user store.
pub const DEFAULT_DB_FILE_NAME: &str = "users.db";

/// Where the user store keeps its data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub db_path: PathBuf,
}

impl StoreConfig {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Places the default data file inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(DEFAULT_DB_FILE_NAME))
    }

    /// Opens the configured data file with the schema initialized.
    pub fn open(&self) -> DbResult<Connection> {
        open_db(&self.db_path)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DB_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::{StoreConfig, DEFAULT_DB_FILE_NAME};
    use std::path::Path;

    #[test]
    fn default_points_at_relative_users_db() {
        assert_eq!(StoreConfig::default().db_path, Path::new(DEFAULT_DB_FILE_NAME));
    }

    #[test]
    fn in_dir_joins_default_file_name() {
        let config = StoreConfig::in_dir("/tmp/registry");
        assert_eq!(config.db_path, Path::new("/tmp/registry/users.db"));
    }
}
