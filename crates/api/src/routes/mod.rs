pub mod books;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /books                 list, create
/// /books/{book_id}       get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/books", books::router())
}
