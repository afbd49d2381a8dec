//! Conversion Utilities Module
//!
//! Provides the pieces every converter strategy shares:
//! - ImageConverter: the per-file conversion capability
//! - ConversionResult: unified result structure
//! - output_path_for: sibling output path derivation

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::Result;

/// A per-file conversion strategy.
///
/// The walker only needs "something that converts one file given its path";
/// concrete codec pairs implement this so they can be swapped without
/// touching the traversal logic.
pub trait ImageConverter {
    fn convert(&self, path: &Path) -> Result<ConversionResult>;
}

/// Outcome of one successful conversion. Failures travel as errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionResult {
    pub input_path: String,
    pub output_path: String,
    pub input_size: u64,
    pub output_size: u64,
    pub size_reduction: f64,
    pub message: String,
}

impl ConversionResult {
    pub fn success(
        input: &Path,
        output: &Path,
        input_size: u64,
        output_size: u64,
        format_name: &str,
    ) -> Self {
        let reduction_pct = if input_size > 0 {
            (1.0 - output_size as f64 / input_size as f64) * 100.0
        } else {
            0.0
        };

        let message = if reduction_pct >= 0.0 {
            format!(
                "{} conversion successful: size reduced {:.1}%",
                format_name, reduction_pct
            )
        } else {
            format!(
                "{} conversion successful: size increased {:.1}%",
                format_name, -reduction_pct
            )
        };

        Self {
            input_path: input.display().to_string(),
            output_path: output.display().to_string(),
            input_size,
            output_size,
            size_reduction: reduction_pct,
            message,
        }
    }
}

/// Derive the output path next to the input by replacing exactly the final
/// extension. Names without an extension keep their stem; only the last
/// segment of multi-dot names is replaced.
pub fn output_path_for(input: &Path, extension: &str) -> PathBuf {
    input.with_extension(extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_output_path_replaces_extension() {
        let output = output_path_for(Path::new("/path/to/file.jpg"), "png");
        assert_eq!(output, Path::new("/path/to/file.png"));
    }

    #[test]
    fn test_output_path_no_extension() {
        let output = output_path_for(Path::new("/path/to/file"), "png");
        assert_eq!(output, Path::new("/path/to/file.png"));
    }

    #[test]
    fn test_output_path_multi_dot_strips_only_last() {
        let output = output_path_for(Path::new("/path/to/file.tar.gz"), "png");
        assert_eq!(output, Path::new("/path/to/file.tar.png"));
    }

    #[test]
    fn test_output_path_empty_stays_empty() {
        let output = output_path_for(Path::new(""), "png");
        assert_eq!(output, Path::new(""));
    }

    #[test]
    fn test_output_path_relative() {
        let output = output_path_for(Path::new("photo.jpg"), "png");
        assert_eq!(output, Path::new("photo.png"));
    }

    proptest! {
        #[test]
        fn any_single_extension_maps_to_same_stem(
            stem in "[A-Za-z0-9_-]{1,16}",
            ext in "[A-Za-z0-9]{1,5}",
        ) {
            let input = PathBuf::from(format!("/data/{}.{}", stem, ext));
            let output = output_path_for(&input, "png");
            prop_assert_eq!(output, PathBuf::from(format!("/data/{}.png", stem)));
        }
    }

    #[test]
    fn test_success_result_size_reduced() {
        let result = ConversionResult::success(
            Path::new("/a/in.jpg"),
            Path::new("/a/in.png"),
            1000,
            500,
            "PNG",
        );
        assert_eq!(result.input_path, "/a/in.jpg");
        assert_eq!(result.output_path, "/a/in.png");
        assert!((result.size_reduction - 50.0).abs() < 0.01);
        assert!(result.message.contains("size reduced 50.0%"));
    }

    #[test]
    fn test_success_result_size_increased() {
        let result = ConversionResult::success(
            Path::new("/a/in.jpg"),
            Path::new("/a/in.png"),
            500,
            1000,
            "PNG",
        );
        assert!(result.size_reduction < 0.0);
        assert!(result.message.contains("size increased 100.0%"));
    }
}
