//! Batch Processing Module
//!
//! Walks a directory tree and hands every matching file to a converter
//! strategy. Per-file failures are contained here so one bad file never
//! halts the batch; only traversal-level errors propagate.

use console::style;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};
use walkdir::WalkDir;

use crate::common_utils::has_extension;
use crate::conversion::{ConversionResult, ImageConverter};
use crate::errors::Result;

/// Walk the tree rooted at `root` and convert every file whose extension
/// (case-insensitive, without the dot) is in `extensions`.
///
/// Directories and non-matching entries are skipped. A failing conversion
/// is reported to stderr, recorded in the returned [`BatchResult`], and the
/// walk continues with the next entry. Errors listing the tree itself
/// (missing root, unreadable directory) abort the walk and are returned to
/// the caller.
pub fn walk_images(
    root: &Path,
    extensions: &[&str],
    converter: &dyn ImageConverter,
) -> Result<BatchResult> {
    let mut batch = BatchResult::new();

    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !has_extension(path, extensions) {
            debug!(path = %path.display(), "Skipping non-matching entry");
            continue;
        }

        match converter.convert(path) {
            Ok(result) => {
                info!(
                    input = %result.input_path,
                    output = %result.output_path,
                    "{}", result.message
                );
                batch.success(&result);
            }
            Err(e) => {
                eprintln!(
                    "{} Failed to convert {}: {}",
                    style("❌").red(),
                    path.display(),
                    e
                );
                error!(path = %path.display(), error = %e, "Conversion failed");
                batch.fail(path.to_path_buf(), e.to_string());
            }
        }
    }

    Ok(batch)
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchResult {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub input_bytes: u64,
    pub output_bytes: u64,
    pub errors: Vec<(PathBuf, String)>,
}

impl BatchResult {
    pub fn new() -> Self {
        Self {
            total: 0,
            succeeded: 0,
            failed: 0,
            input_bytes: 0,
            output_bytes: 0,
            errors: Vec::new(),
        }
    }

    pub fn success(&mut self, result: &ConversionResult) {
        self.total += 1;
        self.succeeded += 1;
        self.input_bytes += result.input_size;
        self.output_bytes += result.output_size;
    }

    pub fn fail(&mut self, path: PathBuf, error: String) {
        self.total += 1;
        self.failed += 1;
        self.errors.push((path, error));
    }

    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            (self.succeeded as f64 / self.total as f64) * 100.0
        }
    }
}

impl Default for BatchResult {
    fn default() -> Self {
        Self::new()
    }
}
