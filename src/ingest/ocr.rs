//! Text recognition backends.

use crate::error::{Result, StatsError};
use std::path::Path;
use std::process::Command;

/// Turns an image into text. Implementations must be shareable across the
/// threads a batch is recognized on.
pub trait TextRecognizer: Sync {
    fn recognize(&self, image: &Path) -> Result<String>;
}

/// Runs an external OCR program as `<program> [args..] <image> stdout`,
/// which is how `tesseract` prints recognized text.
#[derive(Debug, Clone)]
pub struct CommandRecognizer {
    program: String,
    args: Vec<String>,
}

impl CommandRecognizer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Build from a command line such as `tesseract --psm 6`.
    pub fn from_command_line(command: &str) -> Self {
        let mut words = command.split_whitespace().map(str::to_string);
        let program = words.next().unwrap_or_else(|| crate::DEFAULT_OCR_PROGRAM.to_string());
        Self {
            program,
            args: words.collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl TextRecognizer for CommandRecognizer {
    fn recognize(&self, image: &Path) -> Result<String> {
        log::info!("Starting OCR processing for {}...", image.display());

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(image)
            .arg("stdout")
            .output()
            .map_err(|e| StatsError::Ocr {
                path: image.to_path_buf(),
                message: format!("could not run {}: {}", self.program, e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(StatsError::Ocr {
                path: image.to_path_buf(),
                message: format!("{} exited with {}: {}", self.program, output.status, stderr.trim()),
            });
        }

        log::info!("OCR completed for {}", image.display());
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Reads text that was recognized ahead of time and saved next to the image
/// with a `.txt` extension (`game1.png` → `game1.txt`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SidecarTextRecognizer;

impl TextRecognizer for SidecarTextRecognizer {
    fn recognize(&self, image: &Path) -> Result<String> {
        let sidecar = image.with_extension("txt");
        if !sidecar.is_file() {
            return Err(StatsError::Ocr {
                path: image.to_path_buf(),
                message: format!("no recognized text at {}", sidecar.display()),
            });
        }
        Ok(std::fs::read_to_string(&sidecar)?)
    }
}
