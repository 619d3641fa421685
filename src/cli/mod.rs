//! CLI argument definitions and parsing.

pub mod types;

use crate::DEFAULT_WATCH_FOLDER;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::Category;

/// OCR options shared by commands that read images
#[derive(Debug, Args)]
pub struct OcrArgs {
    /// OCR command line (or set `LL_STATS_OCR_CMD`); run as `<cmd> <image> stdout`.
    #[clap(long)]
    pub ocr_cmd: Option<String>,

    /// Read pre-recognized text from `<image>.txt` instead of running OCR.
    #[clap(long)]
    pub sidecar: bool,
}

#[derive(Debug, Parser)]
#[clap(
    name = "little-league-stats",
    about = "Box score OCR ingestion and season leaderboards"
)]
pub struct LittleLeagueStats {
    /// Database file (or set `LL_STATS_DB`).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Log progress at info level (`RUST_LOG` overrides).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse a box score text file and print what was found.
    ///
    /// Nothing is stored unless `--save` is given.
    Parse {
        /// Text file holding OCR output for one box score.
        file: PathBuf,

        /// Store the parsed game and batting lines.
        #[clap(long)]
        save: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Process box score images (or `.txt` OCR output) and store the results.
    ///
    /// Each file is handled independently; a failed file does not stop the batch.
    Ingest {
        /// Image or text files, processed in the order given.
        #[clap(required = true)]
        paths: Vec<PathBuf>,

        #[clap(flatten)]
        ocr: OcrArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Watch a folder and process new box score images as they appear.
    Watch {
        /// Folder to poll.
        #[clap(long, short, default_value = DEFAULT_WATCH_FOLDER)]
        folder: PathBuf,

        /// Seconds between polls.
        #[clap(long, default_value_t = 5)]
        interval: u64,

        /// Process what is there now and exit.
        #[clap(long)]
        once: bool,

        /// Print this leaderboard after every batch.
        #[clap(long)]
        leaders: Option<Category>,

        #[clap(flatten)]
        ocr: OcrArgs,
    },

    /// Show a statistical leaderboard.
    Leaders {
        /// battingAvg, homeRuns, rbi, runs, stolenBases (anything else ranks by average).
        #[clap(long, short, default_value_t = Category::default())]
        category: Category,

        /// Number of players to show.
        #[clap(long, short, default_value_t = 10)]
        limit: usize,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List the most recently played games.
    Games {
        /// Number of games to show.
        #[clap(long, short, default_value_t = 5)]
        limit: usize,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show season totals for every player.
    Totals {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Load the two-game sample season.
    Seed,

    /// Delete every game and batting line.
    Reset {
        /// Confirm deletion.
        #[clap(long)]
        yes: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaders_defaults() {
        let app = LittleLeagueStats::try_parse_from(["little-league-stats", "leaders"]).unwrap();
        match app.command {
            Commands::Leaders { category, limit, json } => {
                assert_eq!(category, Category::BattingAvg);
                assert_eq!(limit, 10);
                assert!(!json);
            }
            other => panic!("Expected Leaders, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_category_is_accepted() {
        let app = LittleLeagueStats::try_parse_from([
            "little-league-stats",
            "leaders",
            "--category",
            "strikeouts",
        ])
        .unwrap();
        match app.command {
            Commands::Leaders { category, .. } => {
                assert_eq!(category, Category::Unrecognized("strikeouts".into()))
            }
            other => panic!("Expected Leaders, got {:?}", other),
        }
    }

    #[test]
    fn test_global_db_flag_after_subcommand() {
        let app =
            LittleLeagueStats::try_parse_from(["little-league-stats", "games", "--db", "/tmp/x.db"])
                .unwrap();
        assert_eq!(app.db, Some(PathBuf::from("/tmp/x.db")));
    }

    #[test]
    fn test_ingest_requires_paths() {
        assert!(LittleLeagueStats::try_parse_from(["little-league-stats", "ingest"]).is_err());
    }

    #[test]
    fn test_watch_defaults() {
        let app = LittleLeagueStats::try_parse_from(["little-league-stats", "watch"]).unwrap();
        match app.command {
            Commands::Watch {
                folder,
                interval,
                once,
                leaders,
                ocr,
            } => {
                assert_eq!(folder, PathBuf::from(DEFAULT_WATCH_FOLDER));
                assert_eq!(interval, 5);
                assert!(!once);
                assert!(leaders.is_none());
                assert!(ocr.ocr_cmd.is_none());
                assert!(!ocr.sidecar);
            }
            other => panic!("Expected Watch, got {:?}", other),
        }
    }
}
