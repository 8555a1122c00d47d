//! Book identifier generation.

use rand::Rng;

use crate::types::BookId;

/// Length of generated identifiers.
pub const ID_LENGTH: usize = 16;

/// URL-safe alphabet (64 symbols).
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Source of fresh book identifiers.
///
/// The store only requires that ids are opaque strings. Uniqueness is
/// enforced by [`crate::store::BookStore`] itself, so an implementation may
/// occasionally repeat.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> BookId;
}

/// Random 16-character URL-safe identifiers drawn from the thread RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> BookId {
        let mut rng = rand::rng();
        (0..ID_LENGTH)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }
}
