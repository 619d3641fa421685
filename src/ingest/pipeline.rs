//! Parse-and-store for one text or a batch of files.

use super::ocr::TextRecognizer;
use super::watcher::{is_supported_image, is_text_file, source_key};
use crate::{
    cli::types::GameId,
    error::{Result, StatsError},
    parser::parse_box_score,
    storage::GameStore,
};
use chrono::NaiveDate;
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A box score that made it into the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedGame {
    pub game_id: GameId,
    /// `Tigers 5 @ Eagles 3`
    pub summary: String,
    pub player_lines: usize,
}

/// Outcome of one file in a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchOutcome {
    pub file_name: String,
    pub success: bool,
    pub message: String,
    pub game_id: Option<GameId>,
}

impl BatchOutcome {
    fn success(file_name: String, game: &ProcessedGame) -> Self {
        Self {
            file_name,
            success: true,
            message: format!("Successfully processed: {}", game.summary),
            game_id: Some(game.game_id),
        }
    }

    fn failure(file_name: String, error: &StatsError) -> Self {
        Self {
            file_name,
            success: false,
            message: format!("Error: {}", error),
            game_id: None,
        }
    }
}

/// Parse box score text and store the game and its batting lines.
pub fn process_text<S>(store: &S, text: &str, fallback_date: NaiveDate) -> Result<ProcessedGame>
where
    S: GameStore + ?Sized,
{
    let parsed = parse_box_score(text, fallback_date);
    let (game_id, _) = store.append_game_with_lines(&parsed.game, &parsed.players)?;

    Ok(ProcessedGame {
        game_id,
        summary: parsed.game.summary(),
        player_lines: parsed.players.len(),
    })
}

/// Text for one source file: `.txt` files are read as-is, images go
/// through the recognizer.
pub fn read_source<R>(recognizer: &R, path: &Path) -> Result<String>
where
    R: TextRecognizer + ?Sized,
{
    if is_text_file(path) {
        Ok(std::fs::read_to_string(path)?)
    } else if is_supported_image(path) {
        recognizer.recognize(path)
    } else {
        Err(StatsError::UnsupportedImage {
            path: path.to_path_buf(),
        })
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Process files one by one, continuing past failures.
///
/// Recognition runs in parallel; parsing and storing happen sequentially in
/// input order. The result has one outcome per path, in the same order.
pub fn process_batch<S, R>(
    store: &S,
    recognizer: &R,
    paths: &[PathBuf],
    fallback_date: NaiveDate,
) -> Vec<BatchOutcome>
where
    S: GameStore + ?Sized,
    R: TextRecognizer + ?Sized,
{
    log::info!("Processing batch of {} files", paths.len());

    let texts: Vec<Result<String>> = paths
        .par_iter()
        .map(|path| read_source(recognizer, path))
        .collect();

    paths
        .iter()
        .zip(texts)
        .map(|(path, text)| {
            let file_name = display_name(path);
            match text.and_then(|t| process_text(store, &t, fallback_date)) {
                Ok(game) => {
                    if let Err(e) = store.mark_ingested(&source_key(path), game.game_id) {
                        log::warn!("Could not record {} as ingested: {}", path.display(), e);
                    }
                    log::info!("Image processed successfully: {}", game.summary);
                    BatchOutcome::success(file_name, &game)
                }
                Err(e) => {
                    log::warn!("Error processing {}: {}", path.display(), e);
                    BatchOutcome::failure(file_name, &e)
                }
            }
        })
        .collect()
}
