//! Output types for the flood fill.
//!
//! - [`BackgroundMask`]: the classified background, usable on its own or
//!   applied to a grid via [`BackgroundMask::apply_to`]
//! - [`FillReport`]: counts from one classify-and-rewrite run

mod mask;
mod report;

pub use mask::BackgroundMask;
pub use report::FillReport;
