//! Core utilities for the stats tracker
//!
//! - `cache`: in-memory LRU cache of computed leaderboards

pub mod cache;

pub use cache::{LeaderboardCache, LeaderboardCacheKey};
