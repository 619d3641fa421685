//! In-memory LRU cache for computed leaderboards
//!
//! Leaderboards are views over every stored batting line, so a cached board
//! is only valid until the next write. Owners call
//! [`LeaderboardCache::invalidate`] on every append, which also bumps a
//! generation counter so a board ranked before the write is never stored
//! after it.

use lru::LruCache;
use std::{
    num::NonZeroUsize,
    sync::{
        atomic::{AtomicU64, Ordering},
        Mutex, MutexGuard,
    },
};

use crate::{cli::types::Category, models::LeaderboardEntry};

/// Cache key for one leaderboard query
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LeaderboardCacheKey {
    pub category: Category,
    pub limit: usize,
}

impl LeaderboardCacheKey {
    pub fn new(category: &Category, limit: usize) -> Self {
        Self {
            category: category.clone(),
            limit,
        }
    }
}

/// LRU cache of ranked boards keyed by category and limit
pub struct LeaderboardCache {
    memory_cache: Mutex<LruCache<LeaderboardCacheKey, Vec<LeaderboardEntry>>>,
    memory_capacity: usize,
    generation: AtomicU64,
}

impl LeaderboardCache {
    /// Create a cache holding at most `memory_capacity` boards (minimum 1)
    pub fn new(memory_capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(memory_capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            memory_cache: Mutex::new(LruCache::new(capacity)),
            memory_capacity: capacity.get(),
            generation: AtomicU64::new(0),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<LeaderboardCacheKey, Vec<LeaderboardEntry>>> {
        // A panic mid-update can only leave a stale board behind, which the
        // next invalidate clears
        self.memory_cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Get a cached board
    pub fn get(&self, key: &LeaderboardCacheKey) -> Option<Vec<LeaderboardEntry>> {
        self.lock().get(key).cloned()
    }

    /// Store a freshly ranked board
    pub fn put(&self, key: LeaderboardCacheKey, board: Vec<LeaderboardEntry>) {
        self.lock().put(key, board);
    }

    /// Current data generation; read it before ranking and hand it to
    /// [`put_if_current`](Self::put_if_current).
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Store a board ranked at `generation`, unless an invalidation has
    /// happened since. Returns whether the board was cached.
    pub fn put_if_current(
        &self,
        generation: u64,
        key: LeaderboardCacheKey,
        board: Vec<LeaderboardEntry>,
    ) -> bool {
        let mut cache = self.lock();
        if self.generation.load(Ordering::Acquire) != generation {
            return false;
        }
        cache.put(key, board);
        true
    }

    /// Drop every cached board
    pub fn invalidate(&self) {
        let mut cache = self.lock();
        cache.clear();
        self.generation.fetch_add(1, Ordering::AcqRel);
    }

    /// (entries in use, capacity)
    pub fn memory_stats(&self) -> (usize, usize) {
        (self.lock().len(), self.memory_capacity)
    }
}

impl Default for LeaderboardCache {
    fn default() -> Self {
        // One board per known category at a handful of limits
        Self::new(32)
    }
}
