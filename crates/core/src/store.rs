//! In-memory book repository.
//!
//! [`BookStore`] owns the whole collection and is the only place records are
//! created, rewritten or removed, so the derived `finished` flag and the
//! timestamps are always maintained here.

use std::collections::HashSet;
use std::fmt;

use chrono::Utc;

use crate::book::{Book, BookFilter, BookInput, BookSummary};
use crate::error::CoreError;
use crate::id::{IdGenerator, RandomIdGenerator};
use crate::types::BookId;

/// Number of candidates drawn before giving up on finding an unused id.
pub const MAX_ID_ATTEMPTS: usize = 16;

/// Ordered collection of books kept in insertion order.
pub struct BookStore {
    books: Vec<Book>,
    /// Every id ever handed out, including those of deleted books.
    issued: HashSet<BookId>,
    ids: Box<dyn IdGenerator>,
}

impl fmt::Debug for BookStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookStore")
            .field("books", &self.books.len())
            .field("issued", &self.issued.len())
            .finish_non_exhaustive()
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookStore {
    /// Create an empty store using random identifiers.
    pub fn new() -> Self {
        Self::with_id_generator(RandomIdGenerator)
    }

    /// Create an empty store drawing identifiers from `ids`.
    pub fn with_id_generator(ids: impl IdGenerator + 'static) -> Self {
        Self {
            books: Vec::new(),
            issued: HashSet::new(),
            ids: Box::new(ids),
        }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Validate `input` and append a new book, returning its id.
    pub fn create(&mut self, input: BookInput) -> Result<BookId, CoreError> {
        let fields = input.validate()?;
        let id = self.next_id()?;
        let now = Utc::now();

        self.books.push(Book {
            id: id.clone(),
            finished: fields.finished(),
            name: fields.name,
            year: fields.year,
            author: fields.author,
            summary: fields.summary,
            publisher: fields.publisher,
            page_count: fields.page_count,
            read_page: fields.read_page,
            reading: fields.reading,
            inserted_at: now,
            updated_at: now,
        });

        if !self.books.iter().any(|book| book.id == id) {
            return Err(CoreError::InsertFailed { id });
        }

        tracing::debug!(book_id = %id, total = self.books.len(), "Book stored");
        Ok(id)
    }

    /// Summaries of every book matching `filter`, in insertion order.
    pub fn list(&self, filter: &BookFilter) -> Vec<BookSummary> {
        self.books
            .iter()
            .filter(|book| filter.matches(book))
            .map(BookSummary::from)
            .collect()
    }

    pub fn get(&self, id: &str) -> Result<Book, CoreError> {
        self.books
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// Replace every mutable field of the book with `id`.
    ///
    /// The payload is validated before the id is looked up, so a malformed
    /// payload is rejected even for an unknown id.
    pub fn update(&mut self, id: &str, input: BookInput) -> Result<Book, CoreError> {
        let fields = input.validate()?;
        let book = self
            .books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or_else(|| not_found(id))?;

        book.finished = fields.finished();
        book.name = fields.name;
        book.year = fields.year;
        book.author = fields.author;
        book.summary = fields.summary;
        book.publisher = fields.publisher;
        book.page_count = fields.page_count;
        book.read_page = fields.read_page;
        book.reading = fields.reading;
        book.updated_at = Utc::now();

        Ok(book.clone())
    }

    /// Remove the book with `id`, returning it.
    pub fn delete(&mut self, id: &str) -> Result<Book, CoreError> {
        let index = self
            .books
            .iter()
            .position(|book| book.id == id)
            .ok_or_else(|| not_found(id))?;

        Ok(self.books.remove(index))
    }

    /// Draw ids until one has never been issued by this store.
    fn next_id(&mut self) -> Result<BookId, CoreError> {
        let mut candidate = self.ids.generate();
        for _ in 1..MAX_ID_ATTEMPTS {
            if !self.issued.contains(&candidate) {
                break;
            }
            tracing::warn!(book_id = %candidate, "Generated id already issued, retrying");
            candidate = self.ids.generate();
        }

        if !self.issued.insert(candidate.clone()) {
            return Err(CoreError::InsertFailed { id: candidate });
        }
        Ok(candidate)
    }
}

fn not_found(id: &str) -> CoreError {
    CoreError::NotFound { id: id.to_string() }
}
