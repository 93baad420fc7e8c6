//! Row-to-report folding.
//!
//! Folds the flat join rows into one entry per distinct task id while
//! accumulating cost and duration. The rounding discipline is asymmetric and
//! load-bearing: per-entry costs are sums of increments each rounded to two
//! decimals first, while the grand total is the unrounded running sum rounded
//! once at the end. The two can legitimately differ by a cent.

use crate::db::models::TaskRow;
use crate::report::model::{Report, TaskEntries, TaskReportEntry};
use crate::utils::money::round2;

const SECONDS_IN_HOUR: f64 = 3600.0;

/// Labor cost of a single row, unrounded. Zero or missing wage/seconds
/// contribute nothing.
pub fn row_labor_cost(row: &TaskRow) -> f64 {
    match (row.hourly_wage, row.logged_seconds) {
        (Some(wage), Some(seconds)) if wage != 0.0 && seconds != 0 => {
            (seconds as f64 / SECONDS_IN_HOUR) * wage
        }
        _ => 0.0,
    }
}

/// Fold raw rows into per-task entries plus the grand total.
///
/// Pure: the input is only read, so repeated calls on the same rows yield
/// identical reports. Entries appear in first-seen order of their task id.
pub fn aggregate(rows: &[TaskRow]) -> Report {
    let mut tasks = TaskEntries::new();
    let mut total_labor_cost = 0.0_f64;

    for row in rows {
        let cost = row_labor_cost(row);
        total_labor_cost += cost;

        match tasks.get_mut(row.id) {
            None => tasks.push(TaskReportEntry::seed(row, round2(cost))),
            Some(entry) => {
                entry.labor_cost += round2(cost);
                if let Some(seconds) = row.logged_seconds {
                    entry.logged_seconds = Some(entry.logged_seconds.unwrap_or(0) + seconds);
                }
            }
        }
    }

    Report {
        total_labor_cost: round2(total_labor_cost),
        tasks,
    }
}
