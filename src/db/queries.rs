//! Task cost query construction and execution.

use crate::db::models::{TaskRow, map_task_row};
use crate::errors::AppResult;
use rusqlite::Connection;
use rusqlite::types::Value;
use tracing::debug;

/// Optional constraints on the task cost report. An absent field means
/// "no constraint on that axis"; an all-absent set is valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilters {
    pub worker_id: Option<i64>,
    pub location_id: Option<i64>,
    pub completed: Option<bool>,
}

impl TaskFilters {
    /// True when only the worker filter is set. This selects the legacy
    /// worker-only query shape, which omits the `lt.id IS NOT NULL`
    /// predicate the other paths carry. Known asymmetry, kept on purpose.
    pub fn is_worker_only(&self) -> bool {
        self.worker_id.is_some() && self.location_id.is_none() && self.completed.is_none()
    }
}

const BASE_SELECT: &str = "SELECT t.id, t.description, t.completed, t.location_id,
    l.name AS location_name,
    w.id AS worker_id,
    w.username AS worker_username,
    lt.time_seconds AS logged_seconds,
    w.hourly_wage
    FROM tasks AS t
    LEFT JOIN logged_time AS lt ON t.id = lt.task_id
    LEFT JOIN workers AS w ON lt.worker_id = w.id
    LEFT JOIN locations AS l ON t.location_id = l.id";

/// Build the parameterized task cost statement for a filter set.
///
/// Present filters append one `AND <col> = ?` clause each, in the fixed
/// order worker, location, completed; the returned bind values line up with
/// the placeholders. User input never reaches the SQL text itself.
pub fn build_task_cost_query(filters: &TaskFilters) -> (String, Vec<Value>) {
    let mut sql = String::from(BASE_SELECT);
    let mut params: Vec<Value> = Vec::new();

    // The worker-only path predates the combined-filter query and has no
    // base predicate; every other path only reports tasks with logged time.
    if let Some(worker_id) = filters.worker_id
        && filters.is_worker_only()
    {
        sql.push_str("\n    WHERE w.id = ?");
        params.push(Value::from(worker_id));
        return (sql, params);
    }

    sql.push_str("\n    WHERE lt.id IS NOT NULL");

    if let Some(worker_id) = filters.worker_id {
        sql.push_str(" AND w.id = ?");
        params.push(Value::from(worker_id));
    }

    if let Some(location_id) = filters.location_id {
        sql.push_str(" AND l.id = ?");
        params.push(Value::from(location_id));
    }

    if let Some(completed) = filters.completed {
        sql.push_str(" AND t.completed = ?");
        params.push(Value::from(completed));
    }

    (sql, params)
}

/// Run the task cost join and collect the raw rows in statement order.
pub fn query_task_costs(conn: &Connection, filters: &TaskFilters) -> AppResult<Vec<TaskRow>> {
    let (sql, params) = build_task_cost_query(filters);
    debug!(sql = %sql, bind_count = params.len(), "task cost query");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(params), map_task_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
