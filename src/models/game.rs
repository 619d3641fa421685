//! One parsed box score game.

use crate::cli::types::GameId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Team name used whenever the box score never names a team.
pub const UNKNOWN_TEAM: &str = "Unknown Team";

/// Venue is not present in the scanned format, so every game carries this.
pub const UNKNOWN_VENUE: &str = "Unknown Venue";

/// A single game as read off a box score.
///
/// Created once by the parser and never mutated after it is stored; `id` is
/// `None` until the store assigns one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: Option<GameId>,
    pub date: NaiveDate,
    pub away_team: String,
    pub home_team: String,
    pub away_score: u32,
    pub home_score: u32,
    pub venue: String,
    pub processed: bool,
}

impl GameRecord {
    /// A processed game with every field at its fallback value.
    pub fn unknown(date: NaiveDate) -> Self {
        Self {
            id: None,
            date,
            away_team: UNKNOWN_TEAM.to_string(),
            home_team: UNKNOWN_TEAM.to_string(),
            away_score: 0,
            home_score: 0,
            venue: UNKNOWN_VENUE.to_string(),
            processed: true,
        }
    }

    /// One-line result such as `Tigers 5 @ Eagles 3`.
    pub fn summary(&self) -> String {
        format!(
            "{} {} @ {} {}",
            self.away_team, self.away_score, self.home_team, self.home_score
        )
    }

    /// Copy of this record carrying the store-assigned id.
    pub fn with_id(mut self, id: GameId) -> Self {
        self.id = Some(id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn may_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
    }

    #[test]
    fn test_unknown_game_defaults() {
        let game = GameRecord::unknown(may_15());
        assert_eq!(game.away_team, UNKNOWN_TEAM);
        assert_eq!(game.home_team, UNKNOWN_TEAM);
        assert_eq!(game.away_score, 0);
        assert_eq!(game.home_score, 0);
        assert_eq!(game.venue, UNKNOWN_VENUE);
        assert!(game.processed);
        assert!(game.id.is_none());
    }

    #[test]
    fn test_summary_format() {
        let mut game = GameRecord::unknown(may_15());
        game.away_team = "Tigers".to_string();
        game.home_team = "Eagles".to_string();
        game.away_score = 5;
        game.home_score = 3;

        assert_eq!(game.summary(), "Tigers 5 @ Eagles 3");
    }

    #[test]
    fn test_with_id() {
        let game = GameRecord::unknown(may_15()).with_id(GameId::new(7));
        assert_eq!(game.id, Some(GameId::new(7)));
    }
}
