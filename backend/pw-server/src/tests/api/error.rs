use crate::ApiError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

#[tokio::test]
async fn given_unauthorized_when_rendered_then_401_with_json_body() {
    let error = ApiError::unauthorized("Sign in required");

    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    assert_eq!(json["error"]["message"], "Sign in required");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn given_validation_error_when_rendered_then_400_with_field() {
    let error = ApiError::Validation {
        message: "email is not a valid address".into(),
        field: Some("email".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "email");
}

#[tokio::test]
async fn given_database_error_when_converted_then_503_without_detail() {
    let error = ApiError::from(pw_db::DbError::Initialization {
        message: "disk full at /var/lib/pw".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["message"], "Database unavailable");
}

#[tokio::test]
async fn given_internal_error_when_rendered_then_500() {
    let error = ApiError::Internal {
        message: "unexpected".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
