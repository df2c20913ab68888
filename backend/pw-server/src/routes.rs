use crate::{AppState, health, me, profile, sign_in, sign_out, sign_up, status};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use log::warn;
use tower_http::cors::CorsLayer;

/// Build the application router with all endpoints.
///
/// With no `cors_origins` the API is same-origin only.
pub fn build_router(state: AppState, cors_origins: &[String]) -> Router {
    let router = Router::new()
        // Authentication
        .route("/api/v1/auth/sign-up", post(sign_up))
        .route("/api/v1/auth/sign-in", post(sign_in))
        .route("/api/v1/auth/sign-out", post(sign_out))
        .route("/api/v1/auth/me", get(me))
        .route("/api/v1/auth/status", get(status))
        .route("/api/v1/auth/profile", get(profile))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state);

    match cors_layer(cors_origins) {
        Some(cors) => router.layer(cors),
        None => router,
    }
}

/// Credentialed CORS for the listed origins, so the `session` cookie is sent
/// cross-origin. Credentials cannot be combined with a wildcard origin.
fn cors_layer(cors_origins: &[String]) -> Option<CorsLayer> {
    let origins: Vec<HeaderValue> = cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE])
            .allow_credentials(true),
    )
}
