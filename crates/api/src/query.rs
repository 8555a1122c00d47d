//! Query parameter types for the book listing endpoint.
//!
//! The bookshelf client sends boolean filters as loose strings (`?reading=1`,
//! `?finished=0`). They are normalised here so the store only ever sees a
//! typed [`BookFilter`].

use bookshelf_core::book::BookFilter;

/// Raw `?name=&reading=&finished=` parameters.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BookListParams {
    pub name: Option<String>,
    pub reading: Option<String>,
    pub finished: Option<String>,
}

impl BookListParams {
    /// Collect parameters from decoded query pairs.
    ///
    /// A repeated key keeps its last value; unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "name" => params.name = Some(value),
                "reading" => params.reading = Some(value),
                "finished" => params.finished = Some(value),
                _ => {}
            }
        }
        params
    }

    pub fn into_filter(self) -> BookFilter {
        BookFilter {
            name: self.name,
            reading: self.reading.as_deref().map(parse_flag),
            finished: self.finished.as_deref().map(parse_flag),
        }
    }
}

/// Interpret a loosely typed flag as JavaScript's `!!Number(raw)` would.
///
/// Surrounding whitespace is ignored and an empty string counts as zero.
/// Decimal numbers (with optional sign, fraction and exponent), `Infinity`,
/// and unsigned `0x`/`0o`/`0b` integers are recognised; any non-zero value is
/// `true`. Everything else, including the words `true` and `false`, is not a
/// number and therefore `false`.
pub fn parse_flag(raw: &str) -> bool {
    let raw = raw.trim();
    if raw.is_empty() {
        return false;
    }

    let radix = match raw.get(..2).map(str::to_ascii_lowercase).as_deref() {
        Some("0x") => Some(16),
        Some("0o") => Some(8),
        Some("0b") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &raw[2..];
        return !digits.is_empty()
            && digits.chars().all(|c| c.is_digit(radix))
            && digits.chars().any(|c| c != '0');
    }

    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if unsigned == "Infinity" {
        return true;
    }

    // Rust also accepts `inf`/`nan` spellings, which are not numbers here.
    let numeric_chars = unsigned
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !numeric_chars {
        return false;
    }

    match raw.parse::<f64>() {
        Ok(value) => value != 0.0,
        Err(_) => false,
    }
}
