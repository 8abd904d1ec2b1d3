//! Schema definition for the `users` table.
//!
//! There is exactly one schema version. `initialize_schema` may run against
//! a fresh or an already-initialized database with the same outcome.

use super::DbResult;
use rusqlite::Connection;

/// Name of the only table owned by the store.
pub const USERS_TABLE: &str = "users";

const CREATE_USERS_SQL: &str = "CREATE TABLE IF NOT EXISTS users (
    username TEXT NOT NULL UNIQUE,
    email TEXT NOT NULL,
    password TEXT NOT NULL,
    created_at INTEGER NOT NULL DEFAULT (CAST((julianday('now') - 2440587.5) * 86400000 AS INTEGER))
);";

/// Creates the `users` table when absent.
pub fn initialize_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(CREATE_USERS_SQL)?;
    Ok(())
}

/// Returns whether a table with `name` exists in the main schema.
pub fn table_exists(conn: &Connection, name: &str) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [name],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

#[cfg(test)]
mod tests {
    use super::{initialize_schema, table_exists, USERS_TABLE};
    use rusqlite::Connection;

    #[test]
    fn table_exists_reports_false_before_initialization() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(!table_exists(&conn, USERS_TABLE).unwrap());

        initialize_schema(&conn).unwrap();
        assert!(table_exists(&conn, USERS_TABLE).unwrap());
    }

    #[test]
    fn initialize_schema_twice_keeps_rows() {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn).unwrap();
        conn.execute(
            "INSERT INTO users (username, email, password) VALUES ('a', 'a@x', 'p');",
            [],
        )
        .unwrap();

        initialize_schema(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM users;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
