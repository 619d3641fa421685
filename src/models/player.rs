//! Per-game batting lines and the season totals folded from them.

use crate::cli::types::{GameId, LineId};
use serde::{Deserialize, Serialize};

/// `hits / at_bats`, or exactly `0.0` for a player with no at-bats.
pub fn batting_average(hits: u32, at_bats: u32) -> f64 {
    if at_bats == 0 {
        0.0
    } else {
        f64::from(hits) / f64::from(at_bats)
    }
}

/// One player's batting line from one game.
///
/// `hits <= at_bats` is expected but not guaranteed; OCR noise can break it
/// and nothing downstream relies on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerGameLine {
    pub id: Option<LineId>,
    pub game_id: Option<GameId>,
    pub name: String,
    pub team: String,
    pub at_bats: u32,
    pub hits: u32,
    pub runs: u32,
    pub rbi: u32,
    pub doubles: u32,
    pub triples: u32,
    pub home_runs: u32,
    pub stolen_bases: u32,
    pub batting_avg: f64,
}

impl PlayerGameLine {
    /// A line as printed in the box score: AB, H, R, RBI. Extra-base hits and
    /// steals are not in the scanned format and start at zero.
    pub fn new(
        name: impl Into<String>,
        team: impl Into<String>,
        at_bats: u32,
        hits: u32,
        runs: u32,
        rbi: u32,
    ) -> Self {
        Self {
            id: None,
            game_id: None,
            name: name.into(),
            team: team.into(),
            at_bats,
            hits,
            runs,
            rbi,
            doubles: 0,
            triples: 0,
            home_runs: 0,
            stolen_bases: 0,
            batting_avg: batting_average(hits, at_bats),
        }
    }

    /// Set the counting stats the scanned format does not carry.
    pub fn with_extras(mut self, doubles: u32, triples: u32, home_runs: u32, stolen_bases: u32) -> Self {
        self.doubles = doubles;
        self.triples = triples;
        self.home_runs = home_runs;
        self.stolen_bases = stolen_bases;
        self
    }

    /// Grouping identity used by season aggregation.
    pub fn key(&self) -> PlayerKey {
        PlayerKey::new(&self.name, &self.team)
    }
}

/// Exact-string `(name, team)` identity, whitespace-trimmed and
/// case-sensitive. Two OCR spellings of one player are two players.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerKey {
    pub name: String,
    pub team: String,
}

impl PlayerKey {
    pub fn new(name: &str, team: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            team: team.trim().to_string(),
        }
    }
}

/// Placeholder on-base percentage. Walks and hit-by-pitch are not in the
/// scanned format, so OBP cannot be computed.
pub const ON_BASE_PCT_PLACEHOLDER: f64 = 0.33;

/// Season totals for one `(name, team)` identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSeasonTotals {
    pub name: String,
    pub team: String,
    pub games: u32,
    pub at_bats: u32,
    pub hits: u32,
    pub runs: u32,
    pub rbi: u32,
    pub doubles: u32,
    pub triples: u32,
    pub home_runs: u32,
    pub stolen_bases: u32,
    pub batting_avg: f64,
    pub slugging_pct: f64,
    pub on_base_pct: f64,
}

impl PlayerSeasonTotals {
    /// Empty totals for a player who has not been credited with any games.
    pub fn empty(key: &PlayerKey) -> Self {
        Self {
            name: key.name.clone(),
            team: key.team.clone(),
            games: 0,
            at_bats: 0,
            hits: 0,
            runs: 0,
            rbi: 0,
            doubles: 0,
            triples: 0,
            home_runs: 0,
            stolen_bases: 0,
            batting_avg: 0.0,
            slugging_pct: 0.0,
            on_base_pct: ON_BASE_PCT_PLACEHOLDER,
        }
    }

    /// Fold one game line into the running sums.
    pub fn add_line(&mut self, line: &PlayerGameLine) {
        self.games = self.games.saturating_add(1);
        self.at_bats = self.at_bats.saturating_add(line.at_bats);
        self.hits = self.hits.saturating_add(line.hits);
        self.runs = self.runs.saturating_add(line.runs);
        self.rbi = self.rbi.saturating_add(line.rbi);
        self.doubles = self.doubles.saturating_add(line.doubles);
        self.triples = self.triples.saturating_add(line.triples);
        self.home_runs = self.home_runs.saturating_add(line.home_runs);
        self.stolen_bases = self.stolen_bases.saturating_add(line.stolen_bases);
    }

    /// Recompute rate stats from the summed counts.
    pub fn finalize(&mut self) {
        self.batting_avg = batting_average(self.hits, self.at_bats);
        self.slugging_pct = if self.at_bats == 0 {
            0.0
        } else {
            let bases = f64::from(self.hits)
                + f64::from(self.doubles)
                + 2.0 * f64::from(self.triples)
                + 3.0 * f64::from(self.home_runs);
            bases / f64::from(self.at_bats)
        };
        self.on_base_pct = ON_BASE_PCT_PLACEHOLDER;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batting_average_zero_at_bats_is_zero() {
        assert_eq!(batting_average(0, 0), 0.0);
        assert_eq!(batting_average(3, 0), 0.0);
    }

    #[test]
    fn test_batting_average_allows_more_hits_than_at_bats() {
        assert_eq!(batting_average(5, 4), 1.25);
    }

    #[test]
    fn test_new_line_zeroes_extras() {
        let line = PlayerGameLine::new("Alex Smith", "Tigers", 4, 2, 1, 2);
        assert_eq!(line.batting_avg, 0.5);
        assert_eq!(line.doubles, 0);
        assert_eq!(line.triples, 0);
        assert_eq!(line.home_runs, 0);
        assert_eq!(line.stolen_bases, 0);
        assert!(line.game_id.is_none());
    }

    #[test]
    fn test_player_key_trims_but_keeps_case() {
        let a = PlayerKey::new("  Alex Smith ", "Tigers ");
        let b = PlayerKey::new("Alex Smith", "Tigers");
        let c = PlayerKey::new("alex smith", "Tigers");
        assert_eq!(a, b);
        assert_ne!(b, c);
    }

    #[test]
    fn test_slugging_uses_extra_bases() {
        let key = PlayerKey::new("Jamie Garcia", "Hawks");
        let mut totals = PlayerSeasonTotals::empty(&key);
        totals.add_line(&PlayerGameLine::new("Jamie Garcia", "Hawks", 4, 3, 2, 3).with_extras(1, 0, 1, 0));
        totals.finalize();

        // (3 + 1 + 0 + 3) / 4
        assert_eq!(totals.slugging_pct, 1.75);
        assert_eq!(totals.batting_avg, 0.75);
        assert_eq!(totals.on_base_pct, ON_BASE_PCT_PLACEHOLDER);
    }
}
