//! Book record, its list projection, and the write-time validation policy.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{BookId, Timestamp};

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A stored book with its reading progress.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub name: String,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: u32,
    pub read_page: u32,
    /// Derived from `page_count` and `read_page` on every write.
    pub finished: bool,
    pub reading: bool,
    pub inserted_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Reduced `{id, name, publisher}` view returned when listing books.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookSummary {
    pub id: BookId,
    pub name: String,
    pub publisher: Option<String>,
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            name: book.name.clone(),
            publisher: book.publisher.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Client payload for create and update.
///
/// Every field is optional at the type level so that a missing `name` is
/// reported as [`CoreError::MissingName`] before anything else is looked at.
/// Decode request bodies through [`BookInput::from_json`] to keep that order
/// when fields also carry the wrong JSON type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookInput {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: Option<u32>,
    pub read_page: Option<u32>,
    pub reading: Option<bool>,
}

/// The mutable fields of a [`Book`] after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFields {
    pub name: String,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: u32,
    pub read_page: u32,
    pub reading: bool,
}

impl BookFields {
    pub fn finished(&self) -> bool {
        is_finished(self.page_count, self.read_page)
    }
}

impl BookInput {
    /// Decode a raw JSON body.
    ///
    /// The name is checked on the raw value first, so an empty or missing
    /// name is reported as [`CoreError::MissingName`] even when other fields
    /// carry the wrong JSON type.
    pub fn from_json(value: serde_json::Value) -> Result<Self, CoreError> {
        let has_name = match value.get("name") {
            None | Some(serde_json::Value::Null) => false,
            Some(serde_json::Value::String(name)) => !name.is_empty(),
            Some(_) => true,
        };
        if !has_name {
            return Err(CoreError::MissingName);
        }

        serde_json::from_value(value).map_err(|e| CoreError::InvalidPayload(e.to_string()))
    }

    /// Apply the write-time rules, in order:
    ///
    /// 1. `name` must be present and non-empty.
    /// 2. `pageCount` and `readPage` must be present.
    /// 3. `readPage` must not exceed `pageCount`.
    pub fn validate(self) -> Result<BookFields, CoreError> {
        let name = match self.name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(CoreError::MissingName),
        };

        let page_count = self.page_count.ok_or(CoreError::MissingField("pageCount"))?;
        let read_page = self.read_page.ok_or(CoreError::MissingField("readPage"))?;

        if read_page > page_count {
            return Err(CoreError::PageOverflow {
                read_page,
                page_count,
            });
        }

        Ok(BookFields {
            name,
            year: self.year,
            author: self.author,
            summary: self.summary,
            publisher: self.publisher,
            page_count,
            read_page,
            reading: self.reading.unwrap_or(false),
        })
    }
}

/// A book is finished once every page has been read.
pub fn is_finished(page_count: u32, read_page: u32) -> bool {
    page_count == read_page
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Optional constraints for listing books. Absent fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    /// Case-insensitive substring of the book name.
    pub name: Option<String>,
    pub reading: Option<bool>,
    pub finished: Option<bool>,
}

impl BookFilter {
    pub fn matches(&self, book: &Book) -> bool {
        if let Some(needle) = &self.name {
            if !book.name.to_lowercase().contains(&needle.to_lowercase()) {
                return false;
            }
        }
        if let Some(reading) = self.reading {
            if book.reading != reading {
                return false;
            }
        }
        if let Some(finished) = self.finished {
            if book.finished != finished {
                return false;
            }
        }
        true
    }
}
