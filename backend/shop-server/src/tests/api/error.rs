use crate::ApiError;

use shop_auth::AuthError;
use shop_core::{CoreError, Role};
use shop_db::DbError;

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
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Item not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Item not found");
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "Name too long".into(),
        field: Some("name".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "name");
}

#[tokio::test]
async fn test_not_found_omits_field() {
    let error = ApiError::NotFound {
        message: "gone".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (_, json) = body_json(error).await;

    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_unauthenticated_auth_error_returns_401() {
    let error: ApiError = AuthError::Unauthenticated {
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_forbidden_auth_error_returns_403_naming_roles() {
    let error: ApiError = AuthError::Forbidden {
        required: Role::Merchant,
        actual: Role::Unset,
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "FORBIDDEN");
    let message = json["error"]["message"].as_str().unwrap();
    assert!(message.contains("merchant"));
    assert!(message.contains("unset"));
}

#[tokio::test]
async fn test_store_failure_returns_500_without_details() {
    let error: ApiError = AuthError::store_failure("disk I/O error at /var/db").into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "STORE_FAILURE");
    assert!(!json["error"]["message"].as_str().unwrap().contains("/var/db"));
}

#[tokio::test]
async fn test_provider_error_returns_502() {
    let error: ApiError = AuthError::provider("token endpoint returned 500").into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["error"]["code"], "PROVIDER_ERROR");
}

#[tokio::test]
async fn test_invalid_state_returns_400() {
    let error: ApiError = AuthError::InvalidState {
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "INVALID_STATE");
}

#[tokio::test]
async fn test_role_already_assigned_returns_409() {
    let error: ApiError = CoreError::RoleAlreadyAssigned {
        current: Role::Client,
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_invalid_role_returns_400_with_role_field() {
    let error: ApiError = CoreError::InvalidRole {
        value: "admin".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "role");
}

#[tokio::test]
async fn test_db_not_found_returns_404() {
    let error: ApiError = DbError::NotFound {
        entity: "product",
        id: "abc".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let (status, _) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database connection failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_uuid_error_converts_to_validation() {
    let uuid_err = uuid::Uuid::parse_str("not-a-uuid").unwrap_err();
    let api_err: ApiError = uuid_err.into();

    match api_err {
        ApiError::Validation { message, field, .. } => {
            assert!(message.contains("Invalid UUID"));
            assert!(field.is_none());
        }
        _ => panic!("Expected Validation error"),
    }
}
