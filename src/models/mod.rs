//! Record types shared by the parser, the store and the stats engine.

pub mod game;
pub mod output;
pub mod player;

pub use game::{GameRecord, UNKNOWN_TEAM, UNKNOWN_VENUE};
pub use output::{LeaderboardEntry, PlayerTotalsRow};
pub use player::{batting_average, PlayerGameLine, PlayerKey, PlayerSeasonTotals};
