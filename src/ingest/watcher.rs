//! Watch folder polling.

use super::ocr::TextRecognizer;
use super::pipeline::{process_batch, BatchOutcome};
use crate::{error::Result, storage::GameStore};
use chrono::{Local, NaiveDate};
use std::collections::HashSet;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "bmp"];

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
}

fn is_dotfile(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with('.'))
}

/// Image types the OCR step accepts, by extension (case-insensitive).
pub fn is_supported_image(path: &Path) -> bool {
    extension_of(path).is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Already-recognized box score text.
pub fn is_text_file(path: &Path) -> bool {
    extension_of(path).is_some_and(|ext| ext == "txt")
}

/// Stable identity for a source file in the ingestion log.
pub fn source_key(path: &Path) -> String {
    std::fs::canonicalize(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .to_string_lossy()
        .into_owned()
}

/// Images directly inside `folder`, sorted by path. Dotfiles, directories
/// and other file types are skipped.
pub fn scan_folder(folder: &Path) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();
    for entry in std::fs::read_dir(folder)? {
        let path = entry?.path();
        if !path.is_file() || is_dotfile(&path) {
            continue;
        }
        if is_supported_image(&path) {
            images.push(path);
        } else {
            log::debug!("Ignoring non-image file: {}", path.display());
        }
    }
    images.sort();
    Ok(images)
}

/// Polls a folder and processes each new image exactly once.
///
/// Successes are remembered in the store, so a restart does not reprocess
/// them. Failures are remembered for the life of the watcher only and are
/// not retried.
#[derive(Debug)]
pub struct FolderWatcher {
    folder: PathBuf,
    interval: Duration,
    failed: HashSet<PathBuf>,
}

impl FolderWatcher {
    pub fn new(folder: impl Into<PathBuf>, interval: Duration) -> Self {
        Self {
            folder: folder.into(),
            interval,
            failed: HashSet::new(),
        }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Images in the folder that have neither been stored nor failed.
    pub fn pending<S>(&self, store: &S) -> Result<Vec<PathBuf>>
    where
        S: GameStore + ?Sized,
    {
        let mut pending = Vec::new();
        for path in scan_folder(&self.folder)? {
            if self.failed.contains(&path) || store.is_ingested(&source_key(&path))? {
                continue;
            }
            pending.push(path);
        }
        Ok(pending)
    }

    /// One scan-and-process pass.
    pub fn poll_once<S, R>(&mut self, store: &S, recognizer: &R, fallback_date: NaiveDate) -> Result<Vec<BatchOutcome>>
    where
        S: GameStore + ?Sized,
        R: TextRecognizer + ?Sized,
    {
        let pending = self.pending(store)?;
        if pending.is_empty() {
            return Ok(Vec::new());
        }

        for path in &pending {
            log::info!("New file detected: {}", path.display());
        }

        let outcomes = process_batch(store, recognizer, &pending, fallback_date);
        for (path, outcome) in pending.into_iter().zip(&outcomes) {
            if !outcome.success {
                self.failed.insert(path);
            }
        }
        Ok(outcomes)
    }

    /// Poll until Ctrl-C, handing each non-empty batch to `on_batch`.
    pub async fn run<S, R, F>(&mut self, store: &S, recognizer: &R, on_batch: F) -> Result<()>
    where
        S: GameStore + ?Sized,
        R: TextRecognizer + ?Sized,
        F: FnMut(&[BatchOutcome]),
    {
        let ctrl_c = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                log::warn!("Could not listen for Ctrl-C: {}", e);
                std::future::pending::<()>().await;
            }
        };
        self.run_until(store, recognizer, on_batch, ctrl_c).await;
        Ok(())
    }

    /// Poll until `shutdown` completes.
    ///
    /// `shutdown` is created once and stays registered across polls, so a
    /// signal that arrives while a batch is being processed stops the loop
    /// right after that batch. A failed poll is logged and the loop carries
    /// on with the next tick.
    pub async fn run_until<S, R, F, D>(&mut self, store: &S, recognizer: &R, mut on_batch: F, shutdown: D)
    where
        S: GameStore + ?Sized,
        R: TextRecognizer + ?Sized,
        F: FnMut(&[BatchOutcome]),
        D: Future,
    {
        log::info!(
            "Starting file watcher on folder: {} (every {:?})",
            self.folder.display(),
            self.interval
        );

        tokio::pin!(shutdown);
        let mut ticker = tokio::time::interval(self.interval);
        loop {
            tokio::select! {
                biased;

                _ = &mut shutdown => {
                    log::info!("File watcher stopped");
                    return;
                }
                _ = ticker.tick() => {
                    match self.poll_once(store, recognizer, Local::now().date_naive()) {
                        Ok(outcomes) if !outcomes.is_empty() => on_batch(&outcomes),
                        Ok(_) => {}
                        Err(e) => log::warn!("Watcher error on {}: {}", self.folder.display(), e),
                    }
                }
            }
        }
    }
}
