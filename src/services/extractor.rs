use std::path::{Path, PathBuf};

use flood_matte::{FillOptions, FillReport, FloodMatte, RgbaGrid};

use crate::error::KnockoutError;
use crate::models::AppConfig;
use crate::rendering::{content_digest, load_rgba_grid, PngEncoder};

/// Result of processing one file
#[derive(Debug, Clone)]
pub struct ExtractReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub fill: FillReport,
    /// Size of the written PNG
    pub bytes_written: usize,
    /// Content digest of the written PNG
    pub digest: String,
}

/// Background extractor that orchestrates decode → fill → encode → write
#[derive(Debug, Clone, Copy, Default)]
pub struct BackgroundExtractor {
    matte: FloodMatte,
    encoder: PngEncoder,
}

impl BackgroundExtractor {
    pub fn new(options: FillOptions) -> Self {
        Self {
            matte: FloodMatte::with_options(options),
            encoder: PngEncoder::new(),
        }
    }

    /// Build from configuration
    pub fn from_config(config: &AppConfig) -> Result<Self, KnockoutError> {
        Ok(Self::new(config.fill_options()?).optimize(config.optimize))
    }

    /// Enable oxipng recompression of the output
    pub fn optimize(mut self, enabled: bool) -> Self {
        self.encoder = self.encoder.optimize(enabled);
        self
    }

    pub fn options(&self) -> &FillOptions {
        self.matte.options()
    }

    /// Run the fill on an already-decoded grid
    pub fn process_grid(&self, grid: &mut RgbaGrid) -> FillReport {
        let report = self.matte.apply(grid);
        tracing::debug!(
            width = report.width,
            height = report.height,
            seeds = report.seeds,
            cleared = report.cleared,
            tolerance = %report.tolerance,
            connectivity = %report.connectivity,
            "Flood fill complete"
        );
        report
    }

    /// Read `input`, remove the background and write a PNG to `output`.
    ///
    /// The PNG is fully encoded before anything is written, so an encode
    /// failure leaves `output` untouched.
    pub fn extract(&self, input: &Path, output: &Path) -> Result<ExtractReport, KnockoutError> {
        let mut grid = load_rgba_grid(input)?;
        tracing::info!(
            input = %input.display(),
            width = grid.width(),
            height = grid.height(),
            "Loaded image"
        );

        let fill = self.process_grid(&mut grid);
        let png_bytes = self.encoder.encode(&grid)?;

        std::fs::write(output, &png_bytes).map_err(|source| KnockoutError::Write {
            path: output.to_path_buf(),
            source,
        })?;

        let digest = content_digest(&png_bytes);
        tracing::info!(
            output = %output.display(),
            cleared = fill.cleared,
            preserved = fill.preserved(),
            bytes = png_bytes.len(),
            digest = %digest,
            "Saved transparent image"
        );

        Ok(ExtractReport {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            fill,
            bytes_written: png_bytes.len(),
            digest,
        })
    }
}
