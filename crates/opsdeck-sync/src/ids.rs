// SPDX-License-Identifier: Apache-2.0

use std::time::{SystemTime, UNIX_EPOCH};

/// Allocates ids for entities created while the backend is unreachable.
///
/// Seeded from wall-clock milliseconds so local ids land far above the
/// server's small sequential range, but uniqueness never rests on that:
/// every candidate is checked against the ids currently listed and bumped
/// past any collision.
#[derive(Debug, Clone)]
pub struct LocalIdAllocator {
    next: u64,
}

impl LocalIdAllocator {
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            next: if seed == 0 { 1 } else { seed },
        }
    }

    #[must_use]
    pub fn from_wall_clock() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(1, |d| d.as_millis() as u64);
        Self::new(millis)
    }

    pub fn allocate<F>(&mut self, is_taken: F) -> u64
    where
        F: Fn(u64) -> bool,
    {
        let mut candidate = self.next;
        while is_taken(candidate) {
            candidate = candidate.saturating_add(1);
        }
        self.next = candidate.saturating_add(1);
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consecutive_allocations_differ() {
        let mut ids = LocalIdAllocator::new(100);
        let a = ids.allocate(|_| false);
        let b = ids.allocate(|_| false);
        assert_ne!(a, b);
    }

    #[test]
    fn allocation_skips_taken_ids() {
        let taken = [100_u64, 101, 102];
        let mut ids = LocalIdAllocator::new(100);
        let id = ids.allocate(|candidate| taken.contains(&candidate));
        assert_eq!(id, 103);
    }

    #[test]
    fn zero_seed_is_bumped_to_one() {
        let mut ids = LocalIdAllocator::new(0);
        assert_eq!(ids.allocate(|_| false), 1);
    }
}
