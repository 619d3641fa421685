//! Season aggregation and leaderboards
//!
//! Both stages are pure functions over the full set of stored batting
//! lines; totals and boards are recomputed from scratch on every query and
//! never persisted.

pub mod aggregate;
pub mod leaderboard;
pub mod service;


pub use aggregate::{aggregate_season, SeasonTotals};
pub use leaderboard::{format_value, rank_leaderboard, BATTING_AVG_QUALIFIER};
pub use service::StatsService;

use crate::{cli::types::Category, models::LeaderboardEntry, storage::GameStore, Result};

/// Aggregate every stored line, then rank by `category`.
pub fn get_leaderboard<S>(store: &S, category: &Category, limit: usize) -> Result<Vec<LeaderboardEntry>>
where
    S: GameStore + ?Sized,
{
    let lines = store.list_all_player_lines()?;
    let totals = aggregate_season(&lines);
    Ok(rank_leaderboard(&totals, category, limit))
}
