//! HTTP surface: the two report routes and their parameter binding.
//!
//! Both routes answer HTTP 200 whatever happens; logical failure is signaled
//! only through the body's `success` flag. Query parameters arrive as raw
//! strings so a malformed value becomes a failure envelope instead of a
//! transport-level rejection.

use crate::db::queries::TaskFilters;
use crate::errors::{AppError, AppResult};
use crate::report::model::ReportResponse;
use crate::report::service::ReportService;
use axum::{
    Router,
    extract::{Path, Query, State},
    response::Json,
    routing::get,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub reports: Arc<ReportService>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/reports/tasks/workers/{worker_id}", get(tasks_by_worker))
        .route(
            "/reports/tasks/locations/{location_id}",
            get(tasks_by_location),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind the listener and serve until the process is stopped.
pub async fn serve(state: AppState, addr: &str) -> AppResult<()> {
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {addr}");
    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Server(e.to_string()))?;
    Ok(())
}

/// Raw report query parameters, kept as strings until validated.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportQuery {
    pub completed_tasks: Option<String>,
    pub location_id: Option<String>,
    pub worker_id: Option<String>,
}

impl ReportQuery {
    /// Combine path-bound and query-bound values into a filter set. A path
    /// parameter wins over its query-string twin.
    pub fn into_filters(
        self,
        path_worker_id: Option<i64>,
        path_location_id: Option<i64>,
    ) -> AppResult<TaskFilters> {
        let worker_id = match path_worker_id {
            Some(id) => Some(id),
            None => parse_id_param("workerId", self.worker_id.as_deref())?,
        };
        let location_id = match path_location_id {
            Some(id) => Some(id),
            None => parse_id_param("locationId", self.location_id.as_deref())?,
        };
        let completed = parse_bool_param("completedTasks", self.completed_tasks.as_deref())?;

        Ok(TaskFilters {
            worker_id,
            location_id,
            completed,
        })
    }
}

/// Parse an optional boolean-ish query value: true/false/1/0, any case.
pub fn parse_bool_param(name: &str, value: Option<&str>) -> AppResult<Option<bool>> {
    let Some(raw) = value else {
        return Ok(None);
    };
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(Some(true)),
        "false" | "0" => Ok(Some(false)),
        _ => Err(AppError::InvalidFilter(format!("{name}={raw}"))),
    }
}

/// Parse an optional integer id query value.
pub fn parse_id_param(name: &str, value: Option<&str>) -> AppResult<Option<i64>> {
    let Some(raw) = value else {
        return Ok(None);
    };
    raw.parse::<i64>()
        .map(Some)
        .map_err(|_| AppError::InvalidFilter(format!("{name}={raw}")))
}

async fn tasks_by_worker(
    State(state): State<AppState>,
    Path(worker_id): Path<i64>,
    Query(query): Query<ReportQuery>,
) -> Json<ReportResponse> {
    let filters = match query.into_filters(Some(worker_id), None) {
        Ok(f) => f,
        Err(e) => {
            warn!(error = %e, "rejected worker report request");
            return Json(ReportResponse::failed());
        }
    };
    Json(state.reports.task_cost_report(filters).await)
}

async fn tasks_by_location(
    State(state): State<AppState>,
    Path(location_id): Path<i64>,
    Query(query): Query<ReportQuery>,
) -> Json<ReportResponse> {
    let filters = match query.into_filters(None, Some(location_id)) {
        Ok(f) => f,
        Err(e) => {
            warn!(error = %e, "rejected location report request");
            return Json(ReportResponse::failed());
        }
    };
    Json(state.reports.task_cost_report(filters).await)
}
