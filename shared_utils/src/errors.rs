//! Shared Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImgConvError {
    #[error("Failed to read image: {0}")]
    ImageReadError(String),

    #[error("Conversion failed: {0}")]
    ConversionError(String),

    #[error("Directory traversal failed: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ImgConvError>;
