//! Shared Utilities for the img_png converter
//!
//! This crate provides the functionality the tool crate builds on:
//! - Directory walking with per-file failure containment
//! - The ImageConverter capability and conversion result types
//! - Output path derivation
//! - Batch result tracking and summary reporting
//! - Logging setup (stderr + rolling file)
//! - Safety checks (dangerous directory detection)

pub mod batch;
pub mod common_utils;
pub mod conversion;
pub mod errors;
pub mod logging;
pub mod report;
pub mod safety;

pub use batch::{walk_images, BatchResult};
pub use conversion::{output_path_for, ConversionResult, ImageConverter};
pub use errors::{ImgConvError, Result};
pub use report::{format_bytes, format_duration, print_simple_summary, print_summary_report};
pub use safety::check_dangerous_directory;
