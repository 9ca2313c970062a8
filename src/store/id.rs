//! Opaque id generation
//!
//! Ids are short random strings with no meaning beyond uniqueness.
//! The generator is a capability handed to the store at construction,
//! so tests can substitute a deterministic one.

use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;

/// Produces opaque string identifiers.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// URL-safe alphabet, 64 symbols.
const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Random short-id generator.
///
/// Six symbols from a 64-symbol alphabet give 64^6 (~6.9e10) possible
/// ids; collisions are negligible at this scale, not impossible.
#[derive(Debug, Clone)]
pub struct RandomId {
    len: usize,
}

impl RandomId {
    pub const DEFAULT_LEN: usize = 6;

    pub fn new(len: usize) -> Self {
        Self { len }
    }
}

impl Default for RandomId {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LEN)
    }
}

impl IdGenerator for RandomId {
    fn generate(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..self.len)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

/// Deterministic generator for tests: "id1", "id2", ...
#[derive(Debug, Default)]
pub struct SequentialId {
    next: AtomicU64,
}

impl SequentialId {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialId {
    fn generate(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        format!("id{}", n)
    }
}
