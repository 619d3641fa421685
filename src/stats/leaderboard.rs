//! Category leaderboards over season totals.

use super::aggregate::SeasonTotals;
use crate::{
    cli::types::Category,
    models::{LeaderboardEntry, PlayerSeasonTotals},
};
use std::cmp::Ordering;

/// Minimum season at-bats to appear on the batting average board.
pub const BATTING_AVG_QUALIFIER: u32 = 10;

/// Numeric sort key. Categories without their own ordering use batting
/// average.
fn sort_value(player: &PlayerSeasonTotals, category: &Category) -> f64 {
    match category {
        Category::HomeRuns => f64::from(player.home_runs),
        Category::Rbi => f64::from(player.rbi),
        Category::Runs => f64::from(player.runs),
        Category::StolenBases => f64::from(player.stolen_bases),
        Category::BattingAvg | Category::Era | Category::Unrecognized(_) => player.batting_avg,
    }
}

/// Display value for one player in `category`.
pub fn format_value(player: &PlayerSeasonTotals, category: &Category) -> String {
    match category {
        Category::BattingAvg | Category::Unrecognized(_) => format!("{:.3}", player.batting_avg),
        Category::Era => "0.00".to_string(),
        Category::HomeRuns => player.home_runs.to_string(),
        Category::Rbi => player.rbi.to_string(),
        Category::Runs => player.runs.to_string(),
        Category::StolenBases => player.stolen_bases.to_string(),
    }
}

/// Descending by value, then ascending name, then ascending team.
fn compare(a: &PlayerSeasonTotals, b: &PlayerSeasonTotals, category: &Category) -> Ordering {
    sort_value(b, category)
        .total_cmp(&sort_value(a, category))
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.team.cmp(&b.team))
}

/// Rank players by `category`, keeping at most `limit` entries.
///
/// Only the batting average board applies the at-bat qualifier; an
/// unrecognized category is ordered by batting average without it.
pub fn rank_leaderboard(
    totals: &SeasonTotals,
    category: &Category,
    limit: usize,
) -> Vec<LeaderboardEntry> {
    let mut population: Vec<&PlayerSeasonTotals> = totals
        .values()
        .filter(|p| *category != Category::BattingAvg || p.at_bats >= BATTING_AVG_QUALIFIER)
        .collect();

    if !category.is_ranked() {
        log::debug!("No ordering for category '{}', ranking by batting average", category);
    }

    population.sort_by(|a, b| compare(a, b, category));

    population
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, player)| LeaderboardEntry {
            rank: i + 1,
            name: player.name.clone(),
            team: player.team.clone(),
            value: format_value(player, category),
        })
        .collect()
}
