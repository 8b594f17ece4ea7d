//! End-to-end API flow tests
//!
//! Drives the real router over an in-memory database: seed the org
//! through the HTTP API, clock in and out, generate an invoice and
//! send it, and walk an asset through a scan cycle.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::util::ServiceExt;

use crew_server::db::MIGRATOR;
use crew_server::{Config, ServerState, build_router};
use sqlx::sqlite::SqlitePoolOptions;

async fn test_app() -> Router {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    MIGRATOR.run(&pool).await.unwrap();
    build_router(ServerState::new(Config::from_env(), pool))
}

async fn request(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Create business → location → client → employee → job, returning
/// `(employee_id, billed_job_id, clientless_job_id)`
async fn seed_org(app: &Router) -> (i64, i64, i64) {
    let (status, business) = request(
        app,
        "POST",
        "/api/businesses",
        Some(json!({"name": "Hargrove Construction"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let business_id = business["id"].as_i64().unwrap();

    let (status, location) = request(
        app,
        "POST",
        "/api/locations",
        Some(json!({
            "business_id": business_id,
            "name": "Riverside site",
            "address": "14 Quay Rd"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let location_id = location["id"].as_i64().unwrap();

    let (status, client) = request(
        app,
        "POST",
        "/api/clients",
        Some(json!({
            "business_id": business_id,
            "name": "Meridian Property",
            "email": "accounts@meridian.test"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let client_id = client["id"].as_i64().unwrap();

    let (status, employee) = request(
        app,
        "POST",
        "/api/employees",
        Some(json!({
            "business_id": business_id,
            "name": "Dana Webb",
            "email": "dana@hargrove.test",
            "role": "crew",
            "hourly_rate": 50.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let employee_id = employee["id"].as_i64().unwrap();

    let (status, job) = request(
        app,
        "POST",
        "/api/jobs",
        Some(json!({
            "business_id": business_id,
            "location_id": location_id,
            "client_id": client_id,
            "title": "Deck rebuild",
            "start_date": 0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let job_id = job["id"].as_i64().unwrap();

    let (status, yard) = request(
        app,
        "POST",
        "/api/jobs",
        Some(json!({
            "business_id": business_id,
            "location_id": location_id,
            "title": "Internal yard work",
            "start_date": 0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let clientless_job_id = yard["id"].as_i64().unwrap();

    (employee_id, job_id, clientless_job_id)
}

#[tokio::test]
async fn health_endpoint_reports_database() {
    let app = test_app().await;

    let (status, body) = request(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = request(&app, "GET", "/health/detailed", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["checks"]["database"]["status"], "ok");
}

#[tokio::test]
async fn clock_cycle_over_http() {
    let app = test_app().await;
    let (employee_id, job_id, _) = seed_org(&app).await;

    // No active shift yet
    let (status, body) = request(
        &app,
        "GET",
        &format!("/api/timesheets/active/{employee_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());

    // Clock-out before clock-in → 404 (no active timesheet, code 3003)
    let (status, body) = request(
        &app,
        "POST",
        "/api/timesheets/clock-out",
        Some(json!({"employee_id": employee_id})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3003);

    // Clock in; the rate snapshot falls back to the employee's 50.00
    let (status, ts) = request(
        &app,
        "POST",
        "/api/timesheets/clock-in",
        Some(json!({"employee_id": employee_id, "job_id": job_id})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(ts["employee_id"].as_i64(), Some(employee_id));
    assert_eq!(ts["billable_rate"].as_f64(), Some(50.0));
    assert_eq!(ts["status"], "PENDING");
    assert!(ts["clock_out"].is_null());

    // Double clock-in → 409 (code 3002)
    let (status, body) = request(
        &app,
        "POST",
        "/api/timesheets/clock-in",
        Some(json!({"employee_id": employee_id, "job_id": job_id})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 3002);

    // Clock out with no lunch; immediate turnaround is 0.00 hours
    let (status, closed) = request(
        &app,
        "POST",
        "/api/timesheets/clock-out",
        Some(json!({"employee_id": employee_id, "lunch_break_minutes": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(!closed["clock_out"].is_null());
    assert_eq!(closed["total_hours"].as_f64(), Some(0.0));
    assert_eq!(closed["lunch_break_minutes"].as_i64(), Some(0));

    // Active is null again, and approval works on the closed sheet
    let (_, active) = request(
        &app,
        "GET",
        &format!("/api/timesheets/active/{employee_id}"),
        None,
    )
    .await;
    assert!(active.is_null());

    let ts_id = closed["id"].as_i64().unwrap();
    let (status, approved) = request(
        &app,
        "POST",
        &format!("/api/timesheets/{ts_id}/approve"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(approved["status"], "APPROVED");

    // A second decision is a conflict (code 3005)
    let (status, body) = request(
        &app,
        "POST",
        &format!("/api/timesheets/{ts_id}/reject"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 3005);
}

#[tokio::test]
async fn invoice_flow_over_http() {
    let app = test_app().await;
    let (employee_id, job_id, clientless_job_id) = seed_org(&app).await;

    // Two closed shifts worth 8.00h@50 and 7.5h@60, backdated into the
    // billing week via direct timesheet rows is not possible over HTTP,
    // so run a real clock cycle (0.00h) and assert the zero-hour
    // aggregate; the decimal math itself is covered by unit tests.
    let (status, _) = request(
        &app,
        "POST",
        "/api/timesheets/clock-in",
        Some(json!({"employee_id": employee_id, "job_id": job_id})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = request(
        &app,
        "POST",
        "/api/timesheets/clock-out",
        Some(json!({"employee_id": employee_id, "lunch_break_minutes": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Inverted window → 400 (code 4003)
    let (status, body) = request(
        &app,
        "POST",
        "/api/invoices/generate",
        Some(json!({
            "job_id": job_id,
            "week_start_date": "2026-03-08",
            "week_end_date": "2026-03-02"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4003);

    // Unknown job → 404
    let (status, body) = request(
        &app,
        "POST",
        "/api/invoices/generate",
        Some(json!({
            "job_id": 9999,
            "week_start_date": "2026-03-02",
            "week_end_date": "2026-03-08"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 2003);

    // Clientless job → 400 (code 2004), and no invoice is created
    let (status, body) = request(
        &app,
        "POST",
        "/api/invoices/generate",
        Some(json!({
            "job_id": clientless_job_id,
            "week_start_date": "2026-03-02",
            "week_end_date": "2026-03-08"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2004);

    // Valid window covering today's clock cycle (padded a day on each
    // side so a midnight boundary can't slip the shift out of range)
    let now = chrono::Utc::now().date_naive();
    let week_start = (now - chrono::Duration::days(1)).to_string();
    let week_end = (now + chrono::Duration::days(1)).to_string();
    let (status, invoice) = request(
        &app,
        "POST",
        "/api/invoices/generate",
        Some(json!({
            "job_id": job_id,
            "week_start_date": week_start,
            "week_end_date": week_end
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(invoice["status"], "DRAFT");
    assert_eq!(invoice["total_hours"].as_f64(), Some(0.0));
    assert_eq!(invoice["total_amount"].as_f64(), Some(0.0));
    assert!(
        invoice["invoice_number"]
            .as_str()
            .unwrap()
            .starts_with("INV-")
    );
    let invoice_id = invoice["id"].as_i64().unwrap();

    // Send, then send again → 409 (code 4002)
    let (status, sent) = request(
        &app,
        "POST",
        &format!("/api/invoices/{invoice_id}/send"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sent["status"], "SENT");
    assert!(!sent["sent_at"].is_null());

    let (status, body) = request(
        &app,
        "POST",
        &format!("/api/invoices/{invoice_id}/send"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 4002);

    // Listing by job finds it
    let (status, list) = request(&app, "GET", &format!("/api/invoices?job_id={job_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn asset_scan_flow_over_http() {
    let app = test_app().await;
    let (employee_id, job_id, _) = seed_org(&app).await;

    let (status, asset) = request(
        &app,
        "POST",
        "/api/assets",
        Some(json!({
            "business_id": 1,
            "title": "Makita table saw",
            "barcode": "BC-1001"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(asset["status"], "AVAILABLE");
    let asset_id = asset["id"].as_i64().unwrap();

    // Scanner lookup by barcode
    let (status, found) = request(&app, "GET", "/api/assets/scan/BC-1001?type=barcode", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["id"].as_i64(), Some(asset_id));

    // Unknown scan type → 400
    let (status, _) = request(&app, "GET", "/api/assets/scan/BC-1001?type=rfid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Check-out flips the asset to IN_USE
    let (status, _) = request(
        &app,
        "POST",
        "/api/asset-scans",
        Some(json!({
            "asset_id": asset_id,
            "employee_id": employee_id,
            "job_id": job_id,
            "scan_type": "CHECK_OUT"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, asset) = request(&app, "GET", &format!("/api/assets/{asset_id}"), None).await;
    assert_eq!(asset["status"], "IN_USE");

    // Check-in brings it back
    let (status, _) = request(
        &app,
        "POST",
        "/api/asset-scans",
        Some(json!({
            "asset_id": asset_id,
            "employee_id": employee_id,
            "scan_type": "CHECK_IN"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, asset) = request(&app, "GET", &format!("/api/assets/{asset_id}"), None).await;
    assert_eq!(asset["status"], "AVAILABLE");

    let (_, scans) = request(
        &app,
        "GET",
        &format!("/api/asset-scans?asset_id={asset_id}"),
        None,
    )
    .await;
    assert_eq!(scans.as_array().unwrap().len(), 2);
}
