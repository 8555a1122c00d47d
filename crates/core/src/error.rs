use crate::types::BookId;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Please provide the book name")]
    MissingName,

    #[error("{0}")]
    InvalidPayload(String),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("readPage cannot be greater than pageCount")]
    PageOverflow { read_page: u32, page_count: u32 },

    #[error("Book with id {id} not found")]
    NotFound { id: BookId },

    #[error("Book with id {id} missing after insert")]
    InsertFailed { id: BookId },
}
