//! Database schema and connection management

use crate::error::StatsError;
use crate::DB_PATH_ENV_VAR;
use anyhow::{Context, Result};
use dirs::data_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// SQLite-backed [`GameStore`](super::GameStore).
pub struct StatsDatabase {
    pub(crate) conn: Connection,
}

impl StatsDatabase {
    /// Open the database at the default location, creating tables if needed
    pub fn open_default() -> Result<Self> {
        let path = Self::default_path()?;
        Self::open(&path)
    }

    /// Open (or create) a database file and ensure tables exist
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure the data directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("opening database {}", path.display()))?;
        let db = Self { conn };
        db.initialize_schema()?;
        log::debug!("Opened stats database at {}", path.display());
        Ok(db)
    }

    /// Create an in-memory database, used by tests and `parse` without `--save`
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// `$LL_STATS_DB`, else `<data dir>/little-league-stats/stats.db`
    pub fn default_path() -> Result<PathBuf> {
        Self::default_path_from(std::env::var(DB_PATH_ENV_VAR).ok(), data_dir())
    }

    /// [`default_path`](Self::default_path) with the environment value and
    /// data directory supplied by the caller. A blank env value is ignored.
    pub fn default_path_from(env_value: Option<String>, data_dir: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = env_value.filter(|p| !p.trim().is_empty()) {
            return Ok(PathBuf::from(path));
        }

        let data_dir = data_dir.ok_or_else(|| StatsError::MissingDataDir {
            env_var: DB_PATH_ENV_VAR.to_string(),
        })?;
        Ok(data_dir.join("little-league-stats").join("stats.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&self) -> Result<()> {
        self.conn.execute("PRAGMA foreign_keys = ON", [])?;

        // AUTOINCREMENT keeps ids unique and never reused, even after deletes
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS games (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                away_team TEXT NOT NULL,
                home_team TEXT NOT NULL,
                away_score INTEGER NOT NULL,
                home_score INTEGER NOT NULL,
                venue TEXT NOT NULL,
                processed INTEGER NOT NULL,
                created_at INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS player_game_lines (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                game_id INTEGER NOT NULL,
                name TEXT NOT NULL,
                team TEXT NOT NULL,
                at_bats INTEGER NOT NULL,
                hits INTEGER NOT NULL,
                runs INTEGER NOT NULL,
                rbi INTEGER NOT NULL,
                doubles INTEGER NOT NULL,
                triples INTEGER NOT NULL,
                home_runs INTEGER NOT NULL,
                stolen_bases INTEGER NOT NULL,
                batting_avg REAL NOT NULL,
                FOREIGN KEY (game_id) REFERENCES games(id)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS ingested_files (
                source TEXT PRIMARY KEY,
                game_id INTEGER NOT NULL,
                ingested_at INTEGER NOT NULL,
                FOREIGN KEY (game_id) REFERENCES games(id)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_games_date ON games(date DESC, id DESC)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_lines_player ON player_game_lines(name, team)",
            [],
        )?;

        Ok(())
    }
}
