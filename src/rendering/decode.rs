use crate::error::KnockoutError;
use flood_matte::{Rgba, RgbaGrid};
use image::{DynamicImage, ImageReader};
use std::path::Path;

/// Decode an image file into an RGBA grid.
///
/// The format is sniffed from the file contents rather than trusted from the
/// extension. Images without an alpha channel are promoted to RGBA with every
/// pixel fully opaque.
pub fn load_rgba_grid(path: &Path) -> Result<RgbaGrid, KnockoutError> {
    let decode_err = |source: image::ImageError| KnockoutError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let decoded = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_err(image::ImageError::IoError(e)))?
        .decode()
        .map_err(&decode_err)?;

    tracing::debug!(
        path = %path.display(),
        color = ?decoded.color(),
        width = decoded.width(),
        height = decoded.height(),
        "Decoded input image"
    );

    to_rgba_grid(decoded)
}

/// Decode in-memory image bytes, for reading back encoder output in tests.
#[cfg(test)]
pub(crate) fn decode_rgba_grid(bytes: &[u8]) -> Result<RgbaGrid, KnockoutError> {
    let decoded = image::load_from_memory(bytes).map_err(|source| KnockoutError::Decode {
        path: "<memory>".into(),
        source,
    })?;
    to_rgba_grid(decoded)
}

/// Promote any decoded image to 8-bit RGBA and wrap it as a grid.
fn to_rgba_grid(decoded: DynamicImage) -> Result<RgbaGrid, KnockoutError> {
    let rgba = decoded.into_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(KnockoutError::InvalidDimensions { width, height });
    }
    Ok(RgbaGrid::from_fn(width, height, |c| {
        Rgba::from(rgba.get_pixel(c.x, c.y).0)
    }))
}
