//! Conversion API Module
//!
//! The concrete JPEG→PNG strategy: decode the source strictly as JPEG,
//! derive the sibling output path, encode as PNG. Each conversion is a
//! straight-line pipeline with no state shared across files.

use console::style;
use image::{DynamicImage, GenericImageView, ImageFormat};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{ImgConvError, Result};
use shared_utils::conversion::{output_path_for, ConversionResult, ImageConverter};

/// Extensions (without the dot, matched case-insensitively) the walker
/// submits to this converter.
pub const SOURCE_EXTENSIONS: &[&str] = &["jpg"];

/// A source file together with its decoded raster. The raster is owned
/// exclusively for the duration of one conversion and dropped afterwards.
pub struct ImageFile {
    pub path: PathBuf,
    pub image: DynamicImage,
}

impl ImageFile {
    /// Open `path` and decode its contents strictly as JPEG.
    ///
    /// Content sniffing is deliberately not used: a file with a `.jpg` name
    /// but non-JPEG bytes must fail here, not silently decode as another
    /// format.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .map_err(|e| ImgConvError::ImageReadError(format!("{}: {}", path.display(), e)))?;

        let image = image::load(BufReader::new(file), ImageFormat::Jpeg)
            .map_err(|e| ImgConvError::ImageReadError(format!("{}: {}", path.display(), e)))?;

        Ok(Self {
            path: path.to_path_buf(),
            image,
        })
    }

    /// Encode the raster as PNG at `output`, creating or truncating it.
    /// The destination handle is flushed and closed on every exit path.
    pub fn save_png(&self, output: &Path) -> Result<()> {
        self.image
            .save_with_format(output, ImageFormat::Png)
            .map_err(|e| ImgConvError::ConversionError(format!("{}: {}", output.display(), e)))
    }
}

/// JPEG→PNG converter strategy. Stateless; other codec pairs implement
/// [`ImageConverter`] the same way without changes to the walker.
#[derive(Debug, Default)]
pub struct JpegToPngConverter;

impl JpegToPngConverter {
    pub fn new() -> Self {
        Self
    }
}

impl ImageConverter for JpegToPngConverter {
    fn convert(&self, path: &Path) -> Result<ConversionResult> {
        let input_size = fs::metadata(path)
            .map_err(|e| ImgConvError::ImageReadError(format!("{}: {}", path.display(), e)))?
            .len();

        let image_file = ImageFile::open(path)?;
        let (width, height) = image_file.image.dimensions();
        debug!(path = %path.display(), width, height, "Decoded JPEG");

        let output = output_path_for(path, "png");
        image_file.save_png(&output)?;

        let output_size = fs::metadata(&output)
            .map_err(|e| ImgConvError::ConversionError(format!("{}: {}", output.display(), e)))?
            .len();

        println!(
            "{} Converted: {} → {}",
            style("✅").green(),
            path.display(),
            output.display()
        );

        Ok(ConversionResult::success(
            path,
            &output,
            input_size,
            output_size,
            "PNG",
        ))
    }
}
