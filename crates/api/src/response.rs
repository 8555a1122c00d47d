//! Shared response envelope types for API handlers.
//!
//! Every response body is `{ "status": ..., "message"?: ..., "data"?: ... }`.
//! Use [`Envelope`] instead of ad-hoc `json!` bodies to keep the shape
//! consistent between success and failure paths.

use axum::http::StatusCode;
use bookshelf_core::book::{Book, BookSummary};
use bookshelf_core::types::BookId;
use serde::Serialize;

/// Outcome class carried in the `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    /// The client sent something the server will not accept.
    Fail,
    /// The server could not complete a valid request.
    Error,
}

impl Status {
    /// Classify a non-success HTTP status code.
    pub fn for_failure(code: StatusCode) -> Self {
        if code.is_server_error() {
            Status::Error
        } else {
            Status::Fail
        }
    }
}

/// Standard response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(Envelope::success(BooksData { books })))
/// ```
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: Status::Success,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            status: Status::Success,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    /// A success envelope carrying only a confirmation message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: Status::Success,
            message: Some(message.into()),
            data: None,
        }
    }

    /// A `fail` or `error` envelope carrying only a message.
    pub fn failure(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: Some(message.into()),
            data: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

/// `data` of a successful create.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBook {
    pub book_id: BookId,
}

/// `data` of a list.
#[derive(Debug, Serialize)]
pub struct BookList {
    pub books: Vec<BookSummary>,
}

/// `data` of a fetch by id.
#[derive(Debug, Serialize)]
pub struct BookDetail {
    pub book: Book,
}
