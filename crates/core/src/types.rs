/// Book identifiers are opaque strings issued by the store.
pub type BookId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
