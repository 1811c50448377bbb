use crate::error::KnockoutError;
use flood_matte::RgbaGrid;
use sha2::{Digest, Sha256};
use std::io::Cursor;

/// Encodes RGBA grids as 8-bit RGBA PNGs.
///
/// With `optimize` enabled the PNG is written with fast settings and then
/// recompressed by oxipng. oxipng may pick a smaller colour type (palette,
/// grey + alpha) but the decoded pixels are identical.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngEncoder {
    optimize: bool,
}

impl PngEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable oxipng recompression
    pub fn optimize(mut self, enabled: bool) -> Self {
        self.optimize = enabled;
        self
    }

    /// Encode the grid, preserving alpha.
    pub fn encode(&self, grid: &RgbaGrid) -> Result<Vec<u8>, KnockoutError> {
        if grid.is_empty() {
            return Err(KnockoutError::InvalidDimensions {
                width: grid.width(),
                height: grid.height(),
            });
        }

        let compression = if self.optimize {
            // oxipng will re-compress optimally
            png::Compression::Fast
        } else {
            png::Compression::Default
        };
        let png_bytes = encode_rgba_png(grid, compression)?;

        if !self.optimize {
            return Ok(png_bytes);
        }

        let optimized = oxipng::optimize_from_memory(
            &png_bytes,
            &oxipng::Options {
                strip: oxipng::StripChunks::Safe,
                optimize_alpha: false,
                ..Default::default()
            },
        );
        match optimized {
            Ok(bytes) => {
                tracing::debug!(
                    before = png_bytes.len(),
                    after = bytes.len(),
                    "Recompressed PNG"
                );
                Ok(bytes)
            }
            Err(e) => {
                tracing::warn!(%e, "oxipng failed, keeping unoptimized PNG");
                Ok(png_bytes)
            }
        }
    }
}

/// Encode raw RGBA8 pixel data as a PNG.
fn encode_rgba_png(
    grid: &RgbaGrid,
    compression: png::Compression,
) -> Result<Vec<u8>, KnockoutError> {
    let data = grid.as_raw();
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, grid.width(), grid.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(compression);
        let mut writer = encoder
            .write_header()
            .map_err(|e| KnockoutError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&data)
            .map_err(|e| KnockoutError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Short content fingerprint of encoded output.
///
/// First 16 bytes of SHA-256, as 32 hex characters.
pub fn content_digest(bytes: &[u8]) -> String {
    let result = Sha256::digest(bytes);
    hex::encode(&result[..16])
}
