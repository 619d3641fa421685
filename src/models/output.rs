//! Output models used for printing and JSON serialization.

use super::player::PlayerSeasonTotals;
use serde::Serialize;

/// One row of a ranked leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    /// 1-based position in the board.
    pub rank: usize,
    pub name: String,
    pub team: String,
    /// Category value already formatted for display (`"0.500"`, `"3"`).
    pub value: String,
}

/// Season totals flattened for table and JSON output.
#[derive(Debug, Serialize)]
pub struct PlayerTotalsRow {
    pub name: String,
    pub team: String,
    pub games: u32,
    pub at_bats: u32,
    pub hits: u32,
    pub runs: u32,
    pub rbi: u32,
    pub home_runs: u32,
    pub stolen_bases: u32,
    /// Three-decimal batting average.
    pub avg: String,
    /// Three-decimal slugging percentage.
    pub slg: String,
}

impl From<&PlayerSeasonTotals> for PlayerTotalsRow {
    fn from(totals: &PlayerSeasonTotals) -> Self {
        Self {
            name: totals.name.clone(),
            team: totals.team.clone(),
            games: totals.games,
            at_bats: totals.at_bats,
            hits: totals.hits,
            runs: totals.runs,
            rbi: totals.rbi,
            home_runs: totals.home_runs,
            stolen_bases: totals.stolen_bases,
            avg: format!("{:.3}", totals.batting_avg),
            slg: format!("{:.3}", totals.slugging_pct),
        }
    }
}
