//! Store wrapper that serves leaderboards from an LRU cache.

use super::{aggregate_season, rank_leaderboard, SeasonTotals};
use crate::{
    cli::types::{Category, GameId, LineId},
    core::{LeaderboardCache, LeaderboardCacheKey},
    models::{GameRecord, LeaderboardEntry, PlayerGameLine},
    storage::GameStore,
    Result,
};

/// Wraps a [`GameStore`], caching ranked boards between writes.
///
/// Every append made through the wrapper invalidates the cache, so a board
/// always reflects the full current set of batting lines. Writes made to the
/// inner store directly bypass invalidation.
pub struct StatsService<S> {
    store: S,
    cache: LeaderboardCache,
}

impl<S: GameStore> StatsService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            cache: LeaderboardCache::default(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Ranked board for `category`, at most `limit` entries
    pub fn leaderboard(&self, category: &Category, limit: usize) -> Result<Vec<LeaderboardEntry>> {
        let key = LeaderboardCacheKey::new(category, limit);
        if let Some(board) = self.cache.get(&key) {
            log::debug!("Leaderboard cache hit for {} (limit {})", category, limit);
            return Ok(board);
        }

        let generation = self.cache.generation();
        let board = rank_leaderboard(&self.season_totals()?, category, limit);
        if !self.cache.put_if_current(generation, key, board.clone()) {
            log::debug!("Store changed while ranking {}; board not cached", category);
        }
        Ok(board)
    }

    /// Season totals over every stored line
    pub fn season_totals(&self) -> Result<SeasonTotals> {
        let lines = self.store.list_all_player_lines()?;
        Ok(aggregate_season(&lines))
    }

    /// (cached boards, capacity)
    pub fn cache_stats(&self) -> (usize, usize) {
        self.cache.memory_stats()
    }
}

impl<S: GameStore> GameStore for StatsService<S> {
    fn append_game(&self, game: &GameRecord) -> anyhow::Result<GameId> {
        let id = self.store.append_game(game)?;
        self.cache.invalidate();
        Ok(id)
    }

    fn append_player_lines(&self, lines: &[PlayerGameLine], game_id: GameId) -> anyhow::Result<Vec<LineId>> {
        let ids = self.store.append_player_lines(lines, game_id)?;
        self.cache.invalidate();
        Ok(ids)
    }

    fn append_game_with_lines(
        &self,
        game: &GameRecord,
        lines: &[PlayerGameLine],
    ) -> anyhow::Result<(GameId, Vec<LineId>)> {
        let stored = self.store.append_game_with_lines(game, lines)?;
        self.cache.invalidate();
        Ok(stored)
    }

    fn remove_game(&self, game_id: GameId) -> anyhow::Result<()> {
        self.store.remove_game(game_id)?;
        self.cache.invalidate();
        Ok(())
    }

    fn list_recent_games(&self, limit: usize) -> anyhow::Result<Vec<GameRecord>> {
        self.store.list_recent_games(limit)
    }

    fn list_all_player_lines(&self) -> anyhow::Result<Vec<PlayerGameLine>> {
        self.store.list_all_player_lines()
    }

    fn is_ingested(&self, source: &str) -> anyhow::Result<bool> {
        self.store.is_ingested(source)
    }

    fn mark_ingested(&self, source: &str, game_id: GameId) -> anyhow::Result<()> {
        self.store.mark_ingested(source, game_id)
    }

    fn clear_all(&self) -> anyhow::Result<()> {
        self.store.clear_all()?;
        self.cache.invalidate();
        Ok(())
    }
}
