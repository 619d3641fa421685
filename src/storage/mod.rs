//! Storage layer for box score records
//!
//! The parser and stats engine only see the [`GameStore`] trait; this module
//! provides two implementations:
//! - `schema` / `queries`: SQLite-backed [`StatsDatabase`]
//! - `memory`: [`MemoryStore`], a process-local store for tests and dry runs
//! - `sample`: the demo season the tracker ships with

pub mod memory;
pub mod queries;
pub mod sample;
pub mod schema;


pub use memory::MemoryStore;
pub use sample::seed_sample_data;
pub use schema::StatsDatabase;

use crate::{
    cli::types::{GameId, LineId},
    models::{GameRecord, PlayerGameLine},
};
use anyhow::Result;

/// Repository for games and batting lines.
///
/// Implementations own id allocation and must hand out unique ids even when
/// several writers append at once. Stored records are never updated.
pub trait GameStore {
    /// Store a game and return its newly allocated id. Any id already on
    /// `game` is ignored.
    fn append_game(&self, game: &GameRecord) -> Result<GameId>;

    /// Store batting lines for `game_id`, returning their ids in input order.
    fn append_player_lines(&self, lines: &[PlayerGameLine], game_id: GameId) -> Result<Vec<LineId>>;

    /// Store a game together with its batting lines. Either both land or
    /// neither does.
    ///
    /// The default removes the game again when its lines fail; stores that
    /// can do better override it with a single transaction.
    fn append_game_with_lines(
        &self,
        game: &GameRecord,
        lines: &[PlayerGameLine],
    ) -> Result<(GameId, Vec<LineId>)> {
        let game_id = self.append_game(game)?;
        match self.append_player_lines(lines, game_id) {
            Ok(line_ids) => Ok((game_id, line_ids)),
            Err(e) => {
                if let Err(cleanup) = self.remove_game(game_id) {
                    log::warn!("Could not remove partial game {}: {}", game_id, cleanup);
                }
                Err(e)
            }
        }
    }

    /// Delete a game with its lines and ingestion records.
    fn remove_game(&self, game_id: GameId) -> Result<()>;

    /// Most recent games first (by date, then by id).
    fn list_recent_games(&self, limit: usize) -> Result<Vec<GameRecord>>;

    /// Every stored batting line, in insertion order.
    fn list_all_player_lines(&self) -> Result<Vec<PlayerGameLine>>;

    /// Whether a source file has already been turned into a game.
    fn is_ingested(&self, source: &str) -> Result<bool>;

    /// Remember that `source` produced `game_id`.
    fn mark_ingested(&self, source: &str, game_id: GameId) -> Result<()>;

    /// Remove every game, line and ingestion record.
    fn clear_all(&self) -> Result<()>;
}
