//! Core type definitions for comment-box

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a comment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommentId(pub Uuid);

impl CommentId {
    /// Generate a new random CommentId
    pub fn new() -> Self {
        CommentId(Uuid::new_v4())
    }

    /// Create from UUID string
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(CommentId(Uuid::parse_str(s)?))
    }
}

impl Default for CommentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of fresh comment identifiers.
///
/// The store never mints ids itself; it asks its generator. Production code
/// uses [`UuidIdGenerator`]; tests inject [`SequentialIdGenerator`] to get
/// stable, predictable ids.
pub trait IdGenerator {
    /// Produce the next unique identifier
    fn next_id(&mut self) -> CommentId;
}

/// Random UUIDv4 identifiers
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> CommentId {
        CommentId::new()
    }
}

/// Deterministic identifiers counting up from 1
#[derive(Debug, Clone, Default)]
pub struct SequentialIdGenerator {
    last: u128,
}

impl SequentialIdGenerator {
    /// Create a generator whose first id encodes 1
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> CommentId {
        self.last += 1;
        CommentId(Uuid::from_u128(self.last))
    }
}
