//! Deduplication strategies for accepted candidates
//!
//! - Memory: exact-content hash set, every word emitted once
//! - NoOp: every accepted candidate is kept, duplicates included

use ahash::RandomState;
use hashbrown::HashSet;

/// Trait for deduplication implementations
pub trait Deduplicator {
    /// Record an item.
    /// Returns true if the item is unique (not seen before)
    fn insert(&mut self, item: &str) -> bool;
}

/// In-memory HashSet-based deduplicator
#[derive(Debug, Default)]
pub struct MemoryDeduplicator {
    set: HashSet<String, RandomState>,
}

impl MemoryDeduplicator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Deduplicator for MemoryDeduplicator {
    fn insert(&mut self, item: &str) -> bool {
        if self.set.contains(item) {
            return false;
        }
        self.set.insert(item.to_string())
    }
}

/// No-op deduplicator for when deduplication is disabled
#[derive(Debug, Default)]
pub struct NoOpDeduplicator;

impl Deduplicator for NoOpDeduplicator {
    fn insert(&mut self, _item: &str) -> bool {
        true // Always "unique" since we don't track
    }
}

/// Pick a deduplicator for the pipeline
pub fn create_deduplicator(dedupe: bool) -> Box<dyn Deduplicator> {
    if dedupe {
        Box::new(MemoryDeduplicator::new())
    } else {
        Box::new(NoOpDeduplicator)
    }
}
