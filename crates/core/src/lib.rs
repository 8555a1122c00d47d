//! Domain layer for the bookshelf service.
//!
//! Holds the book model, the write-time validation policy, id generation and
//! the in-memory [`store::BookStore`]. Nothing in here knows about HTTP.

pub mod book;
pub mod error;
pub mod id;
pub mod store;
pub mod types;
