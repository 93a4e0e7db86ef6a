use thiserror::Error;

#[derive(Error, Debug)]
pub enum SynCordsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("TIFF error: {0}")]
    TiffError(#[from] tiff::TiffError),

    #[error("Unsupported raster: {0}")]
    UnsupportedRaster(String),

    #[error("Invalid raster dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Could not finalize output file: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, SynCordsError>;
