//! FloodMatte builder -- the primary entry point for the crate.
//!
//! [`FloodMatte`] wraps the traversal with fluent configuration and exposes
//! two operations: [`classify`](FloodMatte::classify) to compute the mask
//! without touching the image, and [`apply`](FloodMatte::apply) to classify
//! and rewrite in one call.

use crate::color::Tolerance;
use crate::fill::{flood_from_corners, Connectivity, FillOptions};
use crate::grid::RgbaGrid;
use crate::output::{BackgroundMask, FillReport};

/// Corner-seeded background remover.
///
/// # Design
///
/// - Configuration methods consume and return `self`
/// - [`classify()`](Self::classify) and [`apply()`](Self::apply) take
///   `&self`, so one instance can process any number of grids
///
/// # Example
///
/// ```
/// use flood_matte::{Coord, FloodMatte, Rgba, RgbaGrid, Tolerance};
///
/// // 3x3 black square with a white centre
/// let mut grid = RgbaGrid::new(3, 3, Rgba::BLACK);
/// grid.set(Coord::new(1, 1), Rgba::WHITE);
///
/// let report = FloodMatte::new()
///     .tolerance(Tolerance::new(30))
///     .apply(&mut grid);
///
/// assert_eq!(report.cleared, 8);
/// assert_eq!(grid.get(Coord::new(1, 1)), Some(Rgba::WHITE));
/// assert_eq!(grid.get(Coord::new(0, 0)), Some(Rgba::TRANSPARENT));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FloodMatte {
    options: FillOptions,
}

impl FloodMatte {
    /// Tolerance 30, 4-connected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from prepared options.
    pub fn with_options(options: FillOptions) -> Self {
        Self { options }
    }

    /// Set the near-black threshold.
    #[inline]
    pub fn tolerance(mut self, tolerance: Tolerance) -> Self {
        self.options = self.options.tolerance(tolerance);
        self
    }

    /// Set the neighbourhood used to grow the background.
    #[inline]
    pub fn connectivity(mut self, connectivity: Connectivity) -> Self {
        self.options = self.options.connectivity(connectivity);
        self
    }

    #[inline]
    pub fn options(&self) -> &FillOptions {
        &self.options
    }

    /// Compute the background mask of `grid` without modifying it.
    pub fn classify(&self, grid: &RgbaGrid) -> BackgroundMask {
        flood_from_corners(grid, &self.options)
    }

    /// Classify and rewrite background pixels to `(0, 0, 0, 0)` in place.
    pub fn apply(&self, grid: &mut RgbaGrid) -> FillReport {
        let seeds = grid.corners().len();
        let mask = self.classify(grid);
        let cleared = mask.apply_to(grid);
        FillReport {
            width: grid.width(),
            height: grid.height(),
            seeds,
            cleared,
            tolerance: self.options.tolerance,
            connectivity: self.options.connectivity,
        }
    }
}
