#![allow(dead_code)]
use taskcost_server::db::initialize::init_db;
use taskcost_server::db::models::TaskRow;
use taskcost_server::db::pool::Database;

/// In-memory database with the reporting schema applied.
pub fn memory_db() -> Database {
    let db = Database::open_in_memory().expect("open in-memory db");
    db.with_conn(init_db).expect("init schema");
    db
}

pub fn insert_location(db: &Database, id: i64, name: &str) {
    db.with_conn(|conn| {
        conn.execute(
            "INSERT INTO locations (id, name) VALUES (?1, ?2)",
            rusqlite::params![id, name],
        )?;
        Ok(())
    })
    .expect("insert location");
}

pub fn insert_worker(db: &Database, id: i64, username: &str, hourly_wage: f64) {
    db.with_conn(|conn| {
        conn.execute(
            "INSERT INTO workers (id, username, hourly_wage) VALUES (?1, ?2, ?3)",
            rusqlite::params![id, username, hourly_wage],
        )?;
        Ok(())
    })
    .expect("insert worker");
}

pub fn insert_task(
    db: &Database,
    id: i64,
    description: &str,
    completed: bool,
    location_id: Option<i64>,
) {
    db.with_conn(|conn| {
        conn.execute(
            "INSERT INTO tasks (id, description, completed, location_id) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![id, description, completed, location_id],
        )?;
        Ok(())
    })
    .expect("insert task");
}

pub fn insert_logged_time(db: &Database, task_id: i64, worker_id: i64, seconds: i64) {
    db.with_conn(|conn| {
        conn.execute(
            "INSERT INTO logged_time (task_id, worker_id, time_seconds, created_at)
             VALUES (?1, ?2, ?3, '2025-01-15 09:00:00')",
            rusqlite::params![task_id, worker_id, seconds],
        )?;
        Ok(())
    })
    .expect("insert logged time");
}

/// A join row with sensible static fields, varying only cost inputs.
pub fn row(id: i64, hourly_wage: Option<f64>, logged_seconds: Option<i64>) -> TaskRow {
    TaskRow {
        id,
        description: Some(format!("task {id}")),
        completed: false,
        location_id: Some(1),
        location_name: Some("Warehouse".to_string()),
        worker_id: Some(1),
        worker_username: Some("alice".to_string()),
        logged_seconds,
        hourly_wage,
    }
}
