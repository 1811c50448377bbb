use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KnockoutError {
    #[error("Failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Unsupported dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid option: {0}")]
    Options(#[from] flood_matte::MatteError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Usage error: {0}")]
    Usage(String),
}
