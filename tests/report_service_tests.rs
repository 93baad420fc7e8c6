mod common;
use common::{insert_location, insert_logged_time, insert_task, insert_worker, memory_db};
use taskcost_server::db::pool::Database;
use taskcost_server::db::queries::TaskFilters;
use taskcost_server::report::service::ReportService;

/// Fixture: two tasks at one location, one of them completed, plus a third
/// task nothing has been logged against.
fn seeded_service() -> ReportService {
    let db = memory_db();
    insert_location(&db, 1, "Warehouse");
    insert_worker(&db, 1, "alice", 10.0);
    insert_worker(&db, 2, "bob", 0.0);
    insert_task(&db, 1, "Inventory count", true, Some(1));
    insert_task(&db, 2, "Fix shelving", false, Some(1));
    insert_task(&db, 3, "Untouched task", false, Some(1));
    insert_logged_time(&db, 1, 1, 3600);
    insert_logged_time(&db, 1, 1, 1800);
    insert_logged_time(&db, 2, 2, 100);
    ReportService::new(db)
}

#[tokio::test]
async fn full_report_matches_worked_example() {
    let service = seeded_service();
    let response = service.task_cost_report(TaskFilters::default()).await;

    assert!(response.success);
    let report = response.data.expect("report data");
    assert_eq!(report.total_labor_cost, 15.0);

    let task1 = report.tasks.get(1).expect("task 1");
    assert_eq!(task1.logged_seconds, Some(5400));
    assert_eq!(task1.labor_cost, 15.0);
    assert_eq!(task1.worker_username.as_deref(), Some("alice"));
    assert_eq!(task1.location_name.as_deref(), Some("Warehouse"));

    let task2 = report.tasks.get(2).expect("task 2");
    assert_eq!(task2.labor_cost, 0.0);
    assert_eq!(task2.logged_seconds, Some(100));

    // the base predicate excludes tasks with no logged time on this path
    assert!(report.tasks.get(3).is_none());
    assert_eq!(report.tasks.len(), 2);
}

#[tokio::test]
async fn worker_filter_narrows_the_report() {
    let service = seeded_service();
    let filters = TaskFilters {
        worker_id: Some(1),
        ..TaskFilters::default()
    };
    let response = service.task_cost_report(filters).await;

    assert!(response.success);
    let report = response.data.expect("report data");
    assert_eq!(report.tasks.len(), 1);
    assert!(report.tasks.get(1).is_some());
    assert_eq!(report.total_labor_cost, 15.0);
}

#[tokio::test]
async fn completed_filter_narrows_the_report() {
    let service = seeded_service();
    let filters = TaskFilters {
        completed: Some(true),
        ..TaskFilters::default()
    };
    let response = service.task_cost_report(filters).await;

    assert!(response.success);
    let report = response.data.expect("report data");
    let ids: Vec<i64> = report.tasks.iter().map(|e| e.task_id).collect();
    assert_eq!(ids, vec![1]);
}

#[tokio::test]
async fn store_failure_yields_failure_envelope() {
    // no schema: the join has nothing to run against
    let db = Database::open_in_memory().expect("open db");
    let service = ReportService::new(db);

    let response = service.task_cost_report(TaskFilters::default()).await;
    assert!(!response.success);
    assert!(response.data.is_none());
}

#[tokio::test]
async fn wire_json_matches_the_contract() {
    let service = seeded_service();
    let response = service.task_cost_report(TaskFilters::default()).await;

    let body = serde_json::to_value(&response).expect("serialize response");
    assert_eq!(body["success"], serde_json::json!(true));
    assert_eq!(body["data"]["total_labor_cost"], serde_json::json!(15.0));

    let task1 = &body["data"]["tasks"]["1"];
    for field in [
        "task_id",
        "description",
        "completed",
        "location_id",
        "location_name",
        "worker_id",
        "worker_username",
        "logged_seconds",
        "hourly_wage",
        "labor_cost",
    ] {
        assert!(!task1[field].is_null(), "missing {field}");
    }
    assert_eq!(task1["task_id"], serde_json::json!(1));
    assert_eq!(task1["hourly_wage"], serde_json::json!(10.0));
}

#[tokio::test]
async fn failure_envelope_serializes_with_null_data() {
    let db = Database::open_in_memory().expect("open db");
    let service = ReportService::new(db);
    let response = service.task_cost_report(TaskFilters::default()).await;

    let body = serde_json::to_string(&response).expect("serialize response");
    assert_eq!(body, r#"{"success":false,"data":null}"#);
}
