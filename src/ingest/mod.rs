//! Getting box score text into the store
//!
//! - `ocr`: the [`TextRecognizer`] seam and its two implementations
//! - `pipeline`: parse-and-store for single texts and batches of files
//! - `watcher`: polling a folder for new box score images
//!
//! Text recognition is the only failure that reaches the caller; parsing
//! itself never fails.

pub mod ocr;
pub mod pipeline;
pub mod watcher;


pub use ocr::{CommandRecognizer, SidecarTextRecognizer, TextRecognizer};
pub use pipeline::{process_batch, process_text, read_source, BatchOutcome, ProcessedGame};
pub use watcher::{is_supported_image, is_text_file, scan_folder, source_key, FolderWatcher};
