//! Pixel type and near-black classification.

mod rgba;
mod tolerance;

pub use rgba::Rgba;
pub use tolerance::{Tolerance, ToleranceError, DEFAULT_TOLERANCE};
