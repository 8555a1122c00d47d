//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router or
//! server is involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use bookshelf_api::error::{AppError, BookAction};
use bookshelf_core::error::CoreError;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

fn book_error(action: BookAction, source: CoreError) -> AppError {
    AppError::book(action)(source)
}

// ---------------------------------------------------------------------------
// Test: NotFound maps to 404, with a per-operation message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_not_found_returns_404() {
    let err = book_error(
        BookAction::Fetch,
        CoreError::NotFound { id: "abc".into() },
    );

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], "fail");
    assert_eq!(json["message"], "Book not found");
}

#[tokio::test]
async fn delete_not_found_mentions_operation() {
    let err = book_error(
        BookAction::Delete,
        CoreError::NotFound { id: "abc".into() },
    );

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Failed to delete book. Id not found");
}

// ---------------------------------------------------------------------------
// Test: validation errors map to 400 with status "fail"
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_name_returns_400() {
    let err = book_error(BookAction::Update, CoreError::MissingName);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], "fail");
    assert_eq!(
        json["message"],
        "Failed to update book. Please provide the book name"
    );
    assert!(json.get("data").is_none());
}

#[tokio::test]
async fn page_overflow_returns_400() {
    let err = book_error(
        BookAction::Add,
        CoreError::PageOverflow {
            read_page: 5,
            page_count: 4,
        },
    );

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["message"],
        "Failed to add book. readPage cannot be greater than pageCount"
    );
}

#[tokio::test]
async fn bad_request_returns_400_with_detail() {
    let err = AppError::BadRequest {
        action: BookAction::Add,
        detail: "expected value at line 1".into(),
    };

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], "fail");
    assert_eq!(json["message"], "Failed to add book. expected value at line 1");
}

#[tokio::test]
async fn invalid_payload_returns_400_with_detail() {
    let err = book_error(
        BookAction::Update,
        CoreError::InvalidPayload("invalid type: string \"100\", expected u32".into()),
    );

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], "fail");
    assert_eq!(
        json["message"],
        "Failed to update book. invalid type: string \"100\", expected u32"
    );
}

// ---------------------------------------------------------------------------
// Test: server-side failures map to 500 with status "error"
// ---------------------------------------------------------------------------

#[tokio::test]
async fn insert_failure_returns_500() {
    let err = book_error(
        BookAction::Add,
        CoreError::InsertFailed { id: "abc".into() },
    );

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], "Failed to add book");
}
