//! Batch ingestion of box score images.

use crate::{
    cli::OcrArgs,
    ingest::{process_batch, BatchOutcome},
    Result,
};
use chrono::Local;
use std::path::PathBuf;

use super::{build_recognizer, open_store};

#[derive(Debug)]
pub struct IngestParams {
    pub paths: Vec<PathBuf>,
    pub ocr: OcrArgs,
    pub as_json: bool,
    pub db: Option<PathBuf>,
}

pub fn handle_ingest(params: IngestParams) -> Result<()> {
    let store = open_store(params.db)?;
    let recognizer = build_recognizer(&params.ocr);

    let outcomes = process_batch(
        &store,
        recognizer.as_ref(),
        &params.paths,
        Local::now().date_naive(),
    );

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        print!("{}", render_outcomes(&outcomes));
    }
    Ok(())
}

/// One line per file, then a count of successes.
pub fn render_outcomes(outcomes: &[BatchOutcome]) -> String {
    let mut out = String::new();
    for outcome in outcomes {
        let mark = if outcome.success { "✓" } else { "✗" };
        out.push_str(&format!("{} {}: {}\n", mark, outcome.file_name, outcome.message));
    }

    let succeeded = outcomes.iter().filter(|o| o.success).count();
    out.push_str(&format!(
        "Processed {} of {} files\n",
        succeeded,
        outcomes.len()
    ));
    out
}
