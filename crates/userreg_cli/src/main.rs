//! CLI smoke entry point.
//!
//! Prints deterministic facts about the linked core crate and runs one
//! in-memory store round so the `db_open` and `store_init` log events land
//! under the temp log directory.

use userreg_core::db::open_db_in_memory;
use userreg_core::{default_log_level, init_logging, SqliteUserRepository, UserStore};

const LOG_DIR_NAME: &str = "userreg-logs";

fn main() {
    let log_dir = std::env::temp_dir().join(LOG_DIR_NAME);
    match init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        Ok(()) => println!("userreg_core log_dir={}", log_dir.display()),
        Err(err) => eprintln!("userreg_core logging disabled: {err}"),
    }

    println!("userreg_core ping={}", userreg_core::ping());
    println!("userreg_core version={}", userreg_core::core_version());
    println!(
        "userreg_core default_db={}",
        userreg_core::StoreConfig::default().db_path.display()
    );

    match open_db_in_memory() {
        Ok(conn) => {
            let store = UserStore::new(SqliteUserRepository::new(&conn));
            match store.initialize().and_then(|()| store.user_count()) {
                Ok(count) => println!("userreg_core store=ok users={count}"),
                Err(err) => eprintln!("userreg_core store=error {err}"),
            }
        }
        Err(err) => eprintln!("userreg_core store=error {err}"),
    }
}
