//! Little League Stats Library
//!
//! Turns OCR text from scanned youth-baseball box scores into game and
//! batting records, and folds those records into season leaderboards.
//!
//! ## Features
//!
//! - **Box Score Parsing**: Heuristic, fail-open parsing of noisy OCR text
//! - **Season Aggregation**: Per-player totals with batting average and slugging
//! - **Leaderboards**: Ranked boards with an at-bat qualifier and stable ties
//! - **Storage**: SQLite or in-memory stores behind one repository trait
//! - **Ingestion**: Batch and watch-folder processing through an OCR program
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use little_league_stats::{parse_box_score, stats::get_leaderboard, storage::*, Category};
//!
//! # fn example() -> little_league_stats::Result<()> {
//! let text = "Tigers vs Eagles\n5 - 3\nTigers Batting\nAlex Smith 4 2 1 2";
//! let parsed = parse_box_score(text, NaiveDate::from_ymd_opt(2024, 5, 15).unwrap());
//! assert_eq!(parsed.game.summary(), "Tigers 5 @ Eagles 3");
//!
//! let store = MemoryStore::new();
//! let game_id = store.append_game(&parsed.game)?;
//! store.append_player_lines(&parsed.players, game_id)?;
//!
//! let leaders = get_leaderboard(&store, &Category::Rbi, 10)?;
//! assert_eq!(leaders[0].name, "Alex Smith");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export LL_STATS_DB=~/baseball/stats.db      # database file
//! export LL_STATS_OCR_CMD="tesseract --psm 6" # OCR command line
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod ingest;
pub mod models;
pub mod parser;
pub mod stats;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{Category, GameId, LineId};
pub use error::{Result, StatsError};
pub use models::{GameRecord, LeaderboardEntry, PlayerGameLine, PlayerSeasonTotals};
pub use parser::{parse_box_score, ParsedBoxScore};

pub const DB_PATH_ENV_VAR: &str = "LL_STATS_DB";
pub const OCR_CMD_ENV_VAR: &str = "LL_STATS_OCR_CMD";
pub const DEFAULT_OCR_PROGRAM: &str = "tesseract";
pub const DEFAULT_WATCH_FOLDER: &str = "./uploads";
