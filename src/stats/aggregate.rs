//! Fold per-game batting lines into season totals.

use crate::models::{PlayerGameLine, PlayerKey, PlayerSeasonTotals};
use std::collections::BTreeMap;

/// Season totals keyed by player identity, iterated in key order.
pub type SeasonTotals = BTreeMap<PlayerKey, PlayerSeasonTotals>;

/// Group lines by exact trimmed `(name, team)` and sum them.
///
/// Rate stats are recomputed from the sums rather than averaged from the
/// per-game values. Lines are taken as-is: nothing is validated or dropped.
pub fn aggregate_season(lines: &[PlayerGameLine]) -> SeasonTotals {
    let mut totals = SeasonTotals::new();

    for line in lines {
        let key = line.key();
        totals
            .entry(key)
            .or_insert_with_key(PlayerSeasonTotals::empty)
            .add_line(line);
    }

    for player in totals.values_mut() {
        player.finalize();
    }

    log::debug!(
        "Aggregated {} batting lines into {} players",
        lines.len(),
        totals.len()
    );

    totals
}
