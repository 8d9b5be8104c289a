//! Id generation for new roster items.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::roster::item::ItemId;

/// Monotonic id source.
///
/// Two items created within the same clock tick would collide under
/// wall-clock ids, so ids come from a counter instead. Ids are unique for
/// the life of the process.
#[derive(Debug)]
pub struct IdGenerator {
    next: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// Returns a fresh id, strictly greater than every id handed out before.
    pub fn next_id(&self) -> ItemId {
        ItemId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_strictly_increasing() {
        let ids = IdGenerator::new();
        let first = ids.next_id();
        let second = ids.next_id();
        let third = ids.next_id();
        assert!(first < second);
        assert!(second < third);
    }

    #[test]
    fn rapid_generation_never_repeats() {
        let ids = IdGenerator::new();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(ids.next_id()));
        }
    }
}
