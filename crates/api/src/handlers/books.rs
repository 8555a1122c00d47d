//! Handlers for the book collection.
//!
//! Each handler extracts and type-checks the request, runs one
//! [`BookStore`](bookshelf_core::store::BookStore) operation under the
//! shared lock, and wraps the outcome in the standard [`Envelope`].

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use bookshelf_core::book::BookInput;
use bookshelf_core::types::BookId;

use crate::error::{AppError, AppResult, BookAction};
use crate::query::BookListParams;
use crate::response::{BookDetail, BookList, CreatedBook, Envelope};
use crate::state::AppState;

/// POST /books
///
/// Add a book. Responds 201 with the new id.
pub async fn create_book(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = json_body(payload, BookAction::Add)?;

    let book_id = state
        .books
        .write()
        .await
        .create(input)
        .map_err(AppError::book(BookAction::Add))?;

    tracing::info!(book_id = %book_id, "Book added");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::success_with_message(
            "Book added successfully",
            CreatedBook { book_id },
        )),
    ))
}

/// GET /books?name=&reading=&finished=
///
/// List book summaries, optionally filtered.
pub async fn list_books(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<impl IntoResponse> {
    let filter = BookListParams::from_pairs(pairs).into_filter();
    let books = state.books.read().await.list(&filter);

    tracing::debug!(?filter, count = books.len(), "Books listed");

    Ok(Json(Envelope::success(BookList { books })))
}

/// GET /books/{book_id}
pub async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<BookId>,
) -> AppResult<impl IntoResponse> {
    let book = state
        .books
        .read()
        .await
        .get(&book_id)
        .map_err(AppError::book(BookAction::Fetch))?;

    Ok(Json(Envelope::success(BookDetail { book })))
}

/// PUT /books/{book_id}
///
/// Replace every mutable field of a book. The payload is validated before
/// the id is looked up.
pub async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<BookId>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = json_body(payload, BookAction::Update)?;

    let book = state
        .books
        .write()
        .await
        .update(&book_id, input)
        .map_err(AppError::book(BookAction::Update))?;

    tracing::info!(book_id = %book.id, finished = book.finished, "Book updated");

    Ok(Json(Envelope::message("Book updated successfully")))
}

/// DELETE /books/{book_id}
pub async fn delete_book(
    State(state): State<AppState>,
    Path(book_id): Path<BookId>,
) -> AppResult<impl IntoResponse> {
    let removed = state
        .books
        .write()
        .await
        .delete(&book_id)
        .map_err(AppError::book(BookAction::Delete))?;

    tracing::info!(book_id = %removed.id, "Book deleted");

    Ok(Json(Envelope::message("Book deleted successfully")))
}

/// Decode a JSON body into [`BookInput`].
///
/// Unparsable JSON is a 400 for `action`. Otherwise the name check runs on
/// the raw value before any field types are enforced.
fn json_body(
    payload: Result<Json<serde_json::Value>, JsonRejection>,
    action: BookAction,
) -> AppResult<BookInput> {
    let Json(value) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, ?action, "Rejected book payload");
        AppError::BadRequest {
            action,
            detail: rejection.body_text(),
        }
    })?;

    BookInput::from_json(value).map_err(AppError::book(action))
}
