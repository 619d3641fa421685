//! Store-assigned identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Type-safe wrapper for game record IDs.
///
/// IDs are allocated by the store, never by the parser, so a freshly parsed
/// `GameRecord` carries `None` until it has been persisted.
///
/// # Examples
///
/// ```rust
/// use little_league_stats::GameId;
///
/// let game_id = GameId::new(42);
/// assert_eq!(game_id.as_i64(), 42);
/// assert_eq!(game_id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameId(pub i64);

impl GameId {
    /// Create a new GameId from an i64 value.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying i64 value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GameId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Type-safe wrapper for stored player game line IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LineId(pub i64);

impl LineId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_id_round_trips_through_string() {
        let id: GameId = " 17 ".parse().unwrap();
        assert_eq!(id, GameId::new(17));
        assert_eq!(id.to_string(), "17");
    }

    #[test]
    fn test_game_id_rejects_garbage() {
        assert!("seventeen".parse::<GameId>().is_err());
    }

    #[test]
    fn test_ids_order_numerically() {
        assert!(GameId::new(2) > GameId::new(1));
        assert!(LineId::new(9) < LineId::new(10));
    }
}
