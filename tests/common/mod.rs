//! Shared fixtures: raw entity JSON and an in-process mock of the Coddie API.
//!
//! The mock answers each resource with a different envelope shape so the
//! client is exercised against all of them:
//!
//! - `/projects`: `{"success": true, "data": [...]}`
//! - `/projects/{id}`: bare object
//! - `/projects/{id}/features`: `{"data": [...]}`
//! - `/projects/{id}/phases`: bare array
//! - `/projects/{id}/phases/{id}`: `{"success": true, "data": {...}}`
//! - `/projects/{id}/phases/{id}/steps`: `{"success": true, "data": [...]}`
//! - `/projects/{id}/rules`: bare array
//! - `/projects/{id}/rules/{id}`: `{"success": true, "data": {...}}`
//!
//! The identifiers `missing`, `broken`, `garbage`, `nulled`, `rejected` and
//! `malformed` trigger the corresponding failure responses. Features of the
//! project `unusual` carry fractional and negative priorities.

#![allow(dead_code)]

use axum::{
    extract::{Path, Request},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

pub const API_KEY: &str = "test-key";
const BEARER: &str = "Bearer test-key";

// ============================================================
// Raw entity fixtures
// ============================================================

pub fn project(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "user_id": "user-1",
        "name": format!("Project {}", id),
        "description": "A task tracker",
        "project_summary": null,
        "full_description": null,
        "status": status,
        "detailed_generation_status": {"docs": "done", "phases": "done"},
        "error_message": null,
        "current_phase_index": 2,
        "last_generated_phase_index": 5,
        "number_of_phases": 5,
        "current_phase_id": "ph-2",
        "context_summary": "Authentication is implemented.",
        "planning_context": null,
        "last_accessed_at": "2025-03-01T09:00:00.000Z",
        "created_at": "2025-01-10T09:00:00.000Z",
        "updated_at": "2025-02-20T17:30:00.000Z"
    })
}

pub fn feature(id: &str, priority: i32, status: &str) -> Value {
    json!({
        "id": id,
        "project_id": "p1",
        "name": format!("Feature {}", id),
        "description": null,
        "priority": priority,
        "is_post_mvp": priority > 2,
        "status": status,
        "created_at": "2025-01-10T09:00:00.000Z",
        "updated_at": "2025-01-11T09:00:00.000Z"
    })
}

pub fn phase(id: &str, order: Option<i32>) -> Value {
    json!({
        "id": id,
        "project_id": "p1",
        "phase_order": order,
        "title": format!("Phase {}", id),
        "description": "Set up the backend",
        "full_description": "Long form description",
        "status": "in_progress",
        "total_steps": 4,
        "created_at": "2025-01-10T09:00:00.000Z",
        "updated_at": "2025-01-11T09:00:00.000Z"
    })
}

pub fn step(id: &str, order: Option<i32>, status: &str) -> Value {
    json!({
        "id": id,
        "phase_id": "ph-1",
        "step_order": order,
        "name": format!("Step {}", id),
        "content": "Create the schema",
        "code": {"language": "sql", "snippet": "create table todos ();"},
        "status": status,
        "created_at": "2025-01-10T09:00:00.000Z",
        "updated_at": "2025-01-11T09:00:00.000Z"
    })
}

pub fn rule(id: &str, content: Option<&str>) -> Value {
    json!({
        "id": id,
        "project_id": "p1",
        "file_name": format!("{}.mdc", id),
        "description": null,
        "globs": "src/**/*.ts",
        "always_apply": false,
        "content": content,
        "is_generated": content.is_some(),
        "generation_status": null,
        "created_at": "2025-01-10T09:00:00.000Z",
        "updated_at": "2025-01-11T09:00:00.000Z"
    })
}

// ============================================================
// Mock upstream
// ============================================================

async fn require_bearer(req: Request, next: Next) -> Response {
    let authorized = req
        .headers()
        .get(header::AUTHORIZATION)
        .is_some_and(|value| value.as_bytes() == BEARER.as_bytes());
    if !authorized {
        return (StatusCode::UNAUTHORIZED, "invalid api key").into_response();
    }
    next.run(req).await
}

/// Shared failure responses keyed by identifier.
fn failure(id: &str) -> Option<Response> {
    let response = match id {
        "missing" => (StatusCode::NOT_FOUND, "Not found").into_response(),
        "broken" => (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable").into_response(),
        "garbage" => "<html>maintenance</html>".into_response(),
        "nulled" => Json(json!({"success": true, "data": null})).into_response(),
        "rejected" => Json(json!({"success": false, "error": "Project archived"})).into_response(),
        "malformed" => Json(json!({"success": true, "data": {"id": "malformed"}})).into_response(),
        _ => return None,
    };
    Some(response)
}

async fn list_projects() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": [project("p1", "in_progress"), project("p2", "planning")]
    }))
}

async fn get_project(Path(project_id): Path<String>) -> Response {
    failure(&project_id)
        .unwrap_or_else(|| Json(project(&project_id, "in_progress")).into_response())
}

async fn list_features(Path(project_id): Path<String>) -> Response {
    if project_id == "unusual" {
        let mut fractional = feature("f4", 1, "planned");
        fractional["priority"] = json!(1.5);
        let mut negative = feature("f5", 1, "planned");
        negative["priority"] = json!(-2);
        return Json(json!({"data": [fractional, negative]})).into_response();
    }
    failure(&project_id).unwrap_or_else(|| {
        Json(json!({
            "data": [
                feature("f2", 2, "planned"),
                feature("f1", 1, "done"),
                feature("f3", 3, "on_hold")
            ]
        }))
        .into_response()
    })
}

async fn list_phases(Path(project_id): Path<String>) -> Response {
    failure(&project_id).unwrap_or_else(|| {
        Json(json!([phase("ph-1", None), phase("ph-2", Some(2))])).into_response()
    })
}

async fn get_phase(Path((_project_id, phase_id)): Path<(String, String)>) -> Response {
    failure(&phase_id).unwrap_or_else(|| {
        Json(json!({"success": true, "data": phase(&phase_id, Some(1))})).into_response()
    })
}

async fn list_steps(Path((_project_id, phase_id)): Path<(String, String)>) -> Response {
    failure(&phase_id).unwrap_or_else(|| {
        Json(json!({
            "success": true,
            "data": [
                step("s3", Some(3), "completed"),
                step("s1", Some(1), "generated"),
                step("s2", None, "in_progress")
            ]
        }))
        .into_response()
    })
}

async fn list_rules(Path(project_id): Path<String>) -> Response {
    failure(&project_id).unwrap_or_else(|| {
        Json(json!([rule("r1", None), rule("r2", Some("Always use strict mode"))]))
            .into_response()
    })
}

async fn get_rule(Path((_project_id, rule_id)): Path<(String, String)>) -> Response {
    failure(&rule_id).unwrap_or_else(|| {
        Json(json!({"success": true, "data": rule(&rule_id, None)})).into_response()
    })
}

pub fn upstream_router() -> Router {
    let api = Router::new()
        .route("/projects", get(list_projects))
        .route("/projects/{project_id}", get(get_project))
        .route("/projects/{project_id}/features", get(list_features))
        .route("/projects/{project_id}/phases", get(list_phases))
        .route("/projects/{project_id}/phases/{phase_id}", get(get_phase))
        .route("/projects/{project_id}/phases/{phase_id}/steps", get(list_steps))
        .route("/projects/{project_id}/rules", get(list_rules))
        .route("/projects/{project_id}/rules/{rule_id}", get(get_rule))
        .layer(middleware::from_fn(require_bearer));

    Router::new().nest("/api/mcp", api)
}

/// Serve the mock upstream on an ephemeral port and return its base URL.
/// Must be called from inside a tokio runtime.
pub async fn spawn_upstream() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock upstream");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        axum::serve(listener, upstream_router())
            .await
            .expect("Mock upstream failed");
    });
    format!("http://{}/api/mcp", addr)
}

/// Serve the mock upstream from a background thread with its own runtime, for
/// tests that are not async themselves.
pub fn spawn_upstream_blocking() -> String {
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().expect("Failed to build runtime");
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("Failed to bind mock upstream");
            let addr = listener.local_addr().expect("Failed to read local addr");
            tx.send(format!("http://{}/api/mcp", addr))
                .expect("Failed to report address");
            axum::serve(listener, upstream_router())
                .await
                .expect("Mock upstream failed");
        });
    });
    rx.recv().expect("Mock upstream did not start")
}

/// A base URL nothing listens on, for simulating network failures.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);
    format!("http://{}/api/mcp", addr)
}
