use crate::ApiError;

use yz_auth::AuthError;
use yz_db::DbError;
use yz_identity::IdentityError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use googletest::prelude::*;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn given_not_found_when_rendered_then_404_with_error_and_code() {
    // Given
    let error = ApiError::NotFound {
        message: "User not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let (status, json) = body_json(error).await;

    // Then
    assert_that!(status, eq(StatusCode::NOT_FOUND));
    assert_that!(json["error"].as_str(), some(eq("User not found")));
    assert_that!(json["code"].as_str(), some(eq("NOT_FOUND")));
}

#[tokio::test]
async fn given_missing_token_when_converted_then_401_missing_token() {
    // Given
    let error: ApiError = AuthError::MissingToken {
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    // When
    let (status, json) = body_json(error).await;

    // Then
    assert_that!(status, eq(StatusCode::UNAUTHORIZED));
    assert_that!(json["error"].as_str(), some(eq("No token provided")));
    assert_that!(json["code"].as_str(), some(eq("MISSING_TOKEN")));
}

#[tokio::test]
async fn given_key_fetch_failure_when_converted_then_401_invalid_token_without_url() {
    // Given
    let error: ApiError = AuthError::KeyFetch {
        url: "https://keys.internal/jwks".into(),
        message: "connection refused".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    // When
    let (status, json) = body_json(error).await;

    // Then
    assert_that!(status, eq(StatusCode::UNAUTHORIZED));
    assert_that!(json["code"].as_str(), some(eq("INVALID_TOKEN")));
    assert_that!(json.to_string(), not(contains_substring("keys.internal")));
}

#[tokio::test]
async fn given_persistence_failure_when_converted_then_500_without_sql_details() {
    // Given
    let error: ApiError = IdentityError::Persistence {
        source: DbError::Corrupt {
            message: "Invalid UUID in users.id".into(),
            location: ErrorLocation::from(Location::caller()),
        },
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    // When
    let (status, json) = body_json(error.with_internal_message("Failed to fetch profile")).await;

    // Then
    assert_that!(status, eq(StatusCode::INTERNAL_SERVER_ERROR));
    assert_that!(json["error"].as_str(), some(eq("Failed to fetch profile")));
    assert_that!(json["code"].as_str(), some(eq("PERSISTENCE_FAILURE")));
    assert_that!(json.to_string(), not(contains_substring("users.id")));
}

#[tokio::test]
async fn given_not_found_when_internal_message_applied_then_unchanged() {
    // Given
    let error: ApiError = IdentityError::not_found("abc").into();

    // When
    let (status, json) = body_json(error.with_internal_message("ignored")).await;

    // Then
    assert_that!(status, eq(StatusCode::NOT_FOUND));
    assert_that!(json["error"].as_str(), some(eq("User not found")));
}

#[tokio::test]
async fn given_credential_failure_when_collapsed_to_internal_then_500_keeps_code() {
    // Given
    let error: ApiError = IdentityError::from(AuthError::MissingToken {
        location: ErrorLocation::from(Location::caller()),
    })
    .into();

    // When
    let (status, json) = body_json(error.into_internal("Authentication failed")).await;

    // Then
    assert_that!(status, eq(StatusCode::INTERNAL_SERVER_ERROR));
    assert_that!(json["error"].as_str(), some(eq("Authentication failed")));
    assert_that!(json["code"].as_str(), some(eq("MISSING_TOKEN")));
}

#[tokio::test]
async fn given_not_found_when_collapsed_to_internal_then_500() {
    // Given
    let error: ApiError = IdentityError::not_found("abc").into();

    // When
    let (status, json) = body_json(error.into_internal("Authentication failed")).await;

    // Then
    assert_that!(status, eq(StatusCode::INTERNAL_SERVER_ERROR));
    assert_that!(json["code"].as_str(), some(eq("NOT_FOUND")));
}
