//! Raw row model for the task cost join.

use rusqlite::{Result, Row};

/// One row of the tasks × logged_time × workers × locations join.
///
/// A task appears once per logged-time entry, or once with null
/// worker/seconds/wage fields when nothing has been logged against it
/// (left join).
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    pub id: i64,
    pub description: Option<String>,
    pub completed: bool,
    pub location_id: Option<i64>,
    pub location_name: Option<String>,
    pub worker_id: Option<i64>,
    pub worker_username: Option<String>,
    pub logged_seconds: Option<i64>,
    pub hourly_wage: Option<f64>,
}

pub fn map_task_row(row: &Row) -> Result<TaskRow> {
    Ok(TaskRow {
        id: row.get("id")?,
        description: row.get("description")?,
        completed: row.get("completed")?,
        location_id: row.get("location_id")?,
        location_name: row.get("location_name")?,
        worker_id: row.get("worker_id")?,
        worker_username: row.get("worker_username")?,
        logged_seconds: row.get("logged_seconds")?,
        hourly_wage: row.get("hourly_wage")?,
    })
}
