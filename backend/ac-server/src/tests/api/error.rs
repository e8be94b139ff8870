use crate::ApiError;

use ac_accounts::AccountsError;
use ac_auth::AuthError;
use ac_core::{Capability, FieldErrors};
use ac_db::DbError;
use ac_mail::MailError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_invalid_credentials_returns_401_with_fixed_message() {
    let error: ApiError = AccountsError::invalid_credentials().into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "INVALID_CREDENTIALS");
    assert_eq!(
        json["error"]["message"],
        "No active account found with the given credentials."
    );
}

#[tokio::test]
async fn test_validation_error_returns_400_with_every_field() {
    let mut errors = FieldErrors::new();
    errors.add("new_password", "This password is too common.");
    errors.add("confirm_password", "The two password fields didn't match.");
    let error: ApiError = AccountsError::validation(errors).into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "confirm_password");
    assert_eq!(
        json["error"]["fields"]["new_password"][0],
        "This password is too common."
    );
    assert_eq!(
        json["error"]["fields"]["confirm_password"][0],
        "The two password fields didn't match."
    );
}

#[tokio::test]
async fn test_duplicate_identity_returns_400_scoped_to_email() {
    let error: ApiError = DbError::DuplicateEmail {
        email: "taken@example.com".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "DUPLICATE_IDENTITY");
    assert_eq!(json["error"]["field"], "email");
}

#[tokio::test]
async fn test_forbidden_returns_403_without_capability_name() {
    let error: ApiError = AccountsError::forbidden(Capability::SuperAdmin).into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_notification_failure_returns_502() {
    let error: ApiError = AccountsError::from(MailError::delivery("relay refused")).into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["error"]["code"], "NOTIFICATION_DELIVERY_FAILED");
    assert!(
        !json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("relay refused")
    );
}

#[tokio::test]
async fn test_rate_limit_returns_429() {
    let error: ApiError = AuthError::RateLimitExceeded {
        limit: 5,
        window_secs: 60,
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json["error"]["code"], "RATE_LIMITED");
    assert!(json["error"]["message"].as_str().unwrap().contains("5"));
}

#[tokio::test]
async fn test_collapsed_token_error_returns_invalid_or_expired() {
    let error: ApiError = AuthError::InvalidOrExpiredToken {
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "INVALID_OR_EXPIRED_TOKEN");
}

#[test]
fn test_other_token_failures_convert_to_unauthorized() {
    let error: ApiError = AuthError::MissingHeader {
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    assert!(matches!(error, ApiError::Unauthorized { .. }));
}

#[test]
fn test_hashing_failure_converts_to_internal() {
    let error: ApiError = AuthError::Hashing {
        message: "cost out of range".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    match error {
        ApiError::Internal { message, .. } => assert!(!message.contains("cost")),
        other => panic!("Expected Internal error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_database_error_hides_details() {
    let error: ApiError = sqlx::Error::PoolTimedOut.into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "Database operation failed");
}
