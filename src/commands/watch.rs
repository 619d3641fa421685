//! Long-running watch-folder ingestion.

use crate::{
    cli::{types::Category, OcrArgs},
    ingest::FolderWatcher,
    stats::StatsService,
    Result,
};
use chrono::Local;
use std::{path::PathBuf, time::Duration};

use super::{build_recognizer, open_store, render_leaderboard, render_outcomes};

const WATCH_LEADERBOARD_SIZE: usize = 10;

#[derive(Debug)]
pub struct WatchParams {
    pub folder: PathBuf,
    pub interval: Duration,
    pub once: bool,
    pub leaders: Option<Category>,
    pub ocr: OcrArgs,
    pub db: Option<PathBuf>,
}

pub async fn handle_watch(params: WatchParams) -> Result<()> {
    std::fs::create_dir_all(&params.folder)?;

    let service = StatsService::new(open_store(params.db)?);
    let recognizer = build_recognizer(&params.ocr);
    let mut watcher = FolderWatcher::new(params.folder, params.interval);
    let leaders = params.leaders;

    let report = |outcomes: &[crate::ingest::BatchOutcome]| {
        print!("{}", render_outcomes(outcomes));
        if let Some(category) = &leaders {
            match service.leaderboard(category, WATCH_LEADERBOARD_SIZE) {
                Ok(board) => print!("{}", render_leaderboard(category, &board)),
                Err(e) => log::warn!("Could not build {} leaderboard: {}", category, e),
            }
        }
    };

    if params.once {
        let outcomes = watcher.poll_once(&service, recognizer.as_ref(), Local::now().date_naive())?;
        if outcomes.is_empty() {
            println!("No new files in {}", watcher.folder().display());
        } else {
            report(&outcomes);
        }
        return Ok(());
    }

    println!(
        "Watching {} every {}s (Ctrl-C to stop)",
        watcher.folder().display(),
        params.interval.as_secs()
    );
    watcher.run(&service, recognizer.as_ref(), report).await
}
