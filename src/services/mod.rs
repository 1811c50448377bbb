pub mod extractor;

pub use extractor::{BackgroundExtractor, ExtractReport};
