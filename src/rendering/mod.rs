//! Image decode and PNG encode at the edges of the fill.

pub mod decode;
pub mod png_encode;

pub use decode::load_rgba_grid;
pub use png_encode::{content_digest, PngEncoder};
