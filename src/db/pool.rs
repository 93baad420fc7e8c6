//! Shared SQLite handle for the HTTP server.
//!
//! rusqlite connections are not `Sync`, so the single connection lives behind
//! a mutex and every caller goes through [`Database::with_conn`]: acquisition
//! is scoped to the closure and the guard drop releases the connection on
//! every exit path (success, empty result, or error). Callers past the bound
//! block on the lock, which is the pool's queueing policy.

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// In-memory database, used by tests and `init --db :memory:` dry runs.
    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Execute a closure with the acquired connection.
    pub fn with_conn<F, T>(&self, func: F) -> AppResult<T>
    where
        F: FnOnce(&Connection) -> AppResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|_| AppError::Server("database lock poisoned".to_string()))?;
        func(&guard)
    }
}
