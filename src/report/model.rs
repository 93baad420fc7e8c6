//! Report wire model: per-task entries, the insertion-ordered entry map,
//! and the response envelope. Field names here are the JSON contract.

use crate::db::models::TaskRow;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskReportEntry {
    pub task_id: i64,
    pub description: Option<String>,
    pub completed: bool,
    pub location_id: Option<i64>,
    pub location_name: Option<String>,
    pub worker_id: Option<i64>,
    pub worker_username: Option<String>,
    pub logged_seconds: Option<i64>,
    pub hourly_wage: Option<f64>,
    pub labor_cost: f64,
}

impl TaskReportEntry {
    /// Seed an entry from the first row seen for a task id. Static fields
    /// (description, completion, location, worker, wage) come from this row
    /// and are never overwritten by later rows of the same task.
    pub fn seed(row: &TaskRow, initial_cost: f64) -> Self {
        Self {
            task_id: row.id,
            description: row.description.clone(),
            completed: row.completed,
            location_id: row.location_id,
            location_name: row.location_name.clone(),
            worker_id: row.worker_id,
            worker_username: row.worker_username.clone(),
            logged_seconds: row.logged_seconds,
            hourly_wage: row.hourly_wage,
            labor_cost: initial_cost,
        }
    }
}

/// Map of task id → entry that keeps first-seen order.
///
/// Serializes as a JSON object keyed by the decimal task id, iterating in
/// insertion order. Reports are small, so lookups scan the backing vec.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskEntries {
    entries: Vec<TaskReportEntry>,
}

impl TaskEntries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, task_id: i64) -> Option<&TaskReportEntry> {
        self.entries.iter().find(|e| e.task_id == task_id)
    }

    pub fn get_mut(&mut self, task_id: i64) -> Option<&mut TaskReportEntry> {
        self.entries.iter_mut().find(|e| e.task_id == task_id)
    }

    /// Append an entry. The caller guarantees the task id is not present yet.
    pub fn push(&mut self, entry: TaskReportEntry) {
        self.entries.push(entry);
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaskReportEntry> {
        self.entries.iter()
    }
}

impl Serialize for TaskEntries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.task_id.to_string(), entry)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub total_labor_cost: f64,
    pub tasks: TaskEntries,
}

/// Stable response envelope. Failures carry no detail: `success` flips to
/// false and `data` is null, whatever the underlying cause was.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportResponse {
    pub success: bool,
    pub data: Option<Report>,
}

impl ReportResponse {
    pub fn ok(report: Report) -> Self {
        Self {
            success: true,
            data: Some(report),
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            data: None,
        }
    }
}
