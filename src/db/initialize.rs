//! Database schema creation and sample data.

use crate::errors::AppResult;
use chrono::Local;
use rusqlite::Connection;

/// Create the reporting schema if it does not exist yet.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS locations (
            id    INTEGER PRIMARY KEY AUTOINCREMENT,
            name  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS workers (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            username     TEXT NOT NULL,
            hourly_wage  REAL NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS tasks (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            description  TEXT,
            completed    INTEGER NOT NULL DEFAULT 0,
            location_id  INTEGER REFERENCES locations(id)
        );

        CREATE TABLE IF NOT EXISTS logged_time (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            task_id       INTEGER NOT NULL REFERENCES tasks(id),
            worker_id     INTEGER NOT NULL REFERENCES workers(id),
            time_seconds  INTEGER NOT NULL,
            created_at    TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_logged_time_task_id ON logged_time(task_id);
        CREATE INDEX IF NOT EXISTS idx_logged_time_worker_id ON logged_time(worker_id);
        CREATE INDEX IF NOT EXISTS idx_tasks_location_id ON tasks(location_id);
        "#,
    )?;
    Ok(())
}

/// Insert a small demo dataset: two locations, two workers, three tasks and
/// a handful of logged-time entries. Idempotent only in the sense that it
/// appends; meant for a freshly initialized database.
pub fn seed_sample_data(conn: &Connection) -> AppResult<()> {
    let now = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    conn.execute_batch(
        r#"
        INSERT INTO locations (name) VALUES ('Warehouse'), ('Office');
        INSERT INTO workers (username, hourly_wage) VALUES ('alice', 10.0), ('bob', 12.5);
        INSERT INTO tasks (description, completed, location_id) VALUES
            ('Inventory count', 1, 1),
            ('Fix shelving', 0, 1),
            ('File quarterly report', 0, 2);
        "#,
    )?;

    let entries: &[(i64, i64, i64)] = &[
        (1, 1, 3600),
        (1, 1, 1800),
        (2, 2, 5400),
        (3, 1, 900),
    ];
    for (task_id, worker_id, seconds) in entries {
        conn.execute(
            "INSERT INTO logged_time (task_id, worker_id, time_seconds, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![task_id, worker_id, seconds, now],
        )?;
    }

    Ok(())
}
