//! Handle the `serve` command: wire the store, the report service and the
//! HTTP router together and block on the listener.

use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::Database;
use crate::errors::AppResult;
use crate::report::service::ReportService;
use crate::server::{self, AppState};
use std::sync::Arc;
use tracing::info;

pub async fn handle(cfg: &Config) -> AppResult<()> {
    let db = Database::open(&cfg.database)?;
    db.with_conn(init_db)?;

    let state = AppState {
        reports: Arc::new(ReportService::new(db)),
    };

    let addr = format!("{}:{}", cfg.listen_addr, cfg.port);
    info!("report server starting (db: {})", cfg.database);
    server::serve(state, &addr).await
}
