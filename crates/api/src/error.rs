use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bookshelf_core::error::CoreError;

use crate::response::{Envelope, Status};

/// The book operation a request was performing when it failed.
///
/// Client-facing messages are prefixed with the operation, e.g.
/// `"Failed to update book. Id not found"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookAction {
    Add,
    Fetch,
    Update,
    Delete,
}

impl BookAction {
    fn failure_prefix(self) -> &'static str {
        match self {
            BookAction::Add => "Failed to add book",
            BookAction::Fetch => "Failed to fetch book",
            BookAction::Update => "Failed to update book",
            BookAction::Delete => "Failed to delete book",
        }
    }
}

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] together with the operation that produced it, and
/// adds HTTP-specific variants. Implements [`IntoResponse`] to produce the
/// standard envelope with `status` set to `fail` or `error`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `bookshelf_core`.
    #[error("{action:?}: {source}")]
    Book {
        action: BookAction,
        source: CoreError,
    },

    /// The request body could not be decoded.
    #[error("Bad request: {detail}")]
    BadRequest { action: BookAction, detail: String },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Tag a core error with the operation it came from.
    pub fn book(action: BookAction) -> impl FnOnce(CoreError) -> AppError {
        move |source| AppError::Book { action, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Book { action, source } => match source {
                CoreError::NotFound { .. } if *action == BookAction::Fetch => {
                    (StatusCode::NOT_FOUND, "Book not found".to_string())
                }
                CoreError::NotFound { .. } => (
                    StatusCode::NOT_FOUND,
                    format!("{}. Id not found", action.failure_prefix()),
                ),
                CoreError::MissingName
                | CoreError::InvalidPayload(_)
                | CoreError::MissingField(_)
                | CoreError::PageOverflow { .. } => (
                    StatusCode::BAD_REQUEST,
                    format!("{}. {source}", action.failure_prefix()),
                ),
                CoreError::InsertFailed { id } => {
                    tracing::error!(book_id = %id, "Book missing from store after insert");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        action.failure_prefix().to_string(),
                    )
                }
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest { action, detail } => (
                StatusCode::BAD_REQUEST,
                format!("{}. {detail}", action.failure_prefix()),
            ),
        };

        let body = Envelope::failure(Status::for_failure(status), message);

        (status, Json(body)).into_response()
    }
}
