//! Pixel grid and coordinates.

mod coord;
mod rgba_grid;

pub use coord::Coord;
pub use rgba_grid::{GridError, RgbaGrid};
