//! Command implementations for the Little League stats CLI

pub mod admin;
pub mod ingest;
pub mod parse;
pub mod reports;
pub mod watch;

#[cfg(test)]
mod tests;

use crate::{
    cli::OcrArgs,
    error::{Result, StatsError},
    ingest::{CommandRecognizer, SidecarTextRecognizer, TextRecognizer},
    storage::StatsDatabase,
    DEFAULT_OCR_PROGRAM, OCR_CMD_ENV_VAR,
};
use std::path::PathBuf;

pub use admin::{handle_reset, handle_seed};
pub use ingest::{handle_ingest, render_outcomes, IngestParams};
pub use parse::{handle_parse, render_parsed, ParseParams};
pub use reports::{
    handle_games, handle_leaders, handle_totals, render_games, render_leaderboard, render_totals,
};
pub use watch::{handle_watch, WatchParams};

/// `--db` if given, else `$LL_STATS_DB`, else the per-user data directory.
pub fn resolve_db_path(db: Option<PathBuf>) -> Result<PathBuf> {
    match db {
        Some(path) => Ok(path),
        None => Ok(StatsDatabase::default_path()?),
    }
}

/// `--ocr-cmd` if given, else `$LL_STATS_OCR_CMD`, else `tesseract`.
pub fn resolve_ocr_command(ocr_cmd: Option<String>) -> String {
    choose_ocr_command(ocr_cmd, std::env::var(OCR_CMD_ENV_VAR).ok())
}

/// Flag over environment over default; blank values count as unset.
pub fn choose_ocr_command(ocr_cmd: Option<String>, env_value: Option<String>) -> String {
    ocr_cmd
        .filter(|c| !c.trim().is_empty())
        .or_else(|| env_value.filter(|c| !c.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_OCR_PROGRAM.to_string())
}

/// Recognizer selected by the shared OCR flags.
pub fn build_recognizer(ocr: &OcrArgs) -> Box<dyn TextRecognizer> {
    if ocr.sidecar {
        Box::new(SidecarTextRecognizer)
    } else {
        let command = resolve_ocr_command(ocr.ocr_cmd.clone());
        log::debug!("Using OCR command: {}", command);
        Box::new(CommandRecognizer::from_command_line(&command))
    }
}

/// Open the database named by `--db` or the environment.
pub fn open_store(db: Option<PathBuf>) -> Result<StatsDatabase> {
    let path = resolve_db_path(db)?;
    Ok(StatsDatabase::open(&path)?)
}

/// Reject a zero `--limit`.
pub fn validate_limit(limit: usize) -> Result<usize> {
    if limit == 0 {
        Err(StatsError::InvalidLimit)
    } else {
        Ok(limit)
    }
}
