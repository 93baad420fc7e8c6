//! Report assembly: query construction, store execution, folding, envelope.

use crate::db::pool::Database;
use crate::db::queries::{TaskFilters, query_task_costs};
use crate::errors::{AppError, AppResult};
use crate::report::aggregate::aggregate;
use crate::report::model::{Report, ReportResponse};
use tracing::warn;

/// Assembles task cost reports against an explicitly injected store handle.
#[derive(Clone)]
pub struct ReportService {
    db: Database,
}

impl ReportService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Produce the task cost report for a filter set.
    ///
    /// Every failure past this point (store, query, fold) is flattened to the
    /// uniform failure envelope; the cause is logged server-side and never
    /// echoed to the client.
    pub async fn task_cost_report(&self, filters: TaskFilters) -> ReportResponse {
        match self.build_report(filters).await {
            Ok(report) => ReportResponse::ok(report),
            Err(e) => {
                warn!(error = %e, "task cost report failed");
                ReportResponse::failed()
            }
        }
    }

    async fn build_report(&self, filters: TaskFilters) -> AppResult<Report> {
        let db = self.db.clone();
        // rusqlite is synchronous; keep the query off the async workers.
        let rows = tokio::task::spawn_blocking(move || {
            db.with_conn(|conn| query_task_costs(conn, &filters))
        })
        .await
        .map_err(|e| AppError::Server(format!("query task panicked: {e}")))??;

        Ok(aggregate(&rows))
    }
}
