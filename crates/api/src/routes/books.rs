//! Route definitions for the book collection.

use axum::routing::get;
use axum::Router;

use crate::handlers::books;
use crate::state::AppState;

/// Book routes mounted at `/books`.
///
/// ```text
/// GET    /              -> list_books
/// POST   /              -> create_book
/// GET    /{book_id}     -> get_book
/// PUT    /{book_id}     -> update_book
/// DELETE /{book_id}     -> delete_book
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(books::list_books).post(books::create_book))
        .route(
            "/{book_id}",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
}
