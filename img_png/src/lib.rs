pub mod conversion_api;

pub use conversion_api::{ImageFile, JpegToPngConverter, SOURCE_EXTENSIONS};

pub use shared_utils::errors::{ImgConvError, Result};
