//! Integration tests for health probes
mod common;

use crate::common::{body_json, create_test_app, get_request, send};

use axum::http::StatusCode;

#[tokio::test]
async fn given_running_server_when_checking_liveness_then_ok() {
    let app = create_test_app().await;

    let response = send(&app.state, get_request("/live", None)).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn given_open_database_when_checking_readiness_then_ready() {
    let app = create_test_app().await;

    let response = send(&app.state, get_request("/ready", None)).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn given_open_database_when_checking_health_then_healthy() {
    let app = create_test_app().await;

    let response = send(&app.state, get_request("/health", None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["components"]["database"], "operational");
}
