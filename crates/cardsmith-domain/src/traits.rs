//! Capabilities injected into the extraction and import pipelines

use crate::card::CardId;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of fresh card identifiers
///
/// Extraction and import take an id generator instead of calling a random
/// generator directly, so tests can supply deterministic ids.
pub trait IdGenerator: Send + Sync {
    /// Produce an identifier that has not been returned before
    fn next_id(&self) -> CardId;
}

/// Generates UUIDv7 ids (time-ordered, 36 characters)
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> CardId {
        CardId::new(uuid::Uuid::now_v7().to_string())
    }
}

/// Deterministic ids: `<prefix>-1`, `<prefix>-2`, ...
///
/// # Examples
///
/// ```
/// use cardsmith_domain::{IdGenerator, SequentialIdGenerator};
///
/// let ids = SequentialIdGenerator::new("card");
/// assert_eq!(ids.next_id().as_str(), "card-1");
/// assert_eq!(ids.next_id().as_str(), "card-2");
/// ```
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    /// Create a generator whose first id is `<prefix>-1`
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("card")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> CardId {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        CardId::new(format!("{}-{}", self.prefix, n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_ids_are_36_chars() {
        let id = UuidIdGenerator.next_id();
        assert_eq!(id.as_str().len(), 36);
    }

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialIdGenerator::new("t");
        assert_eq!(ids.next_id(), CardId::new("t-1"));
        assert_eq!(ids.next_id(), CardId::new("t-2"));
        assert_eq!(ids.next_id(), CardId::new("t-3"));
    }
}
