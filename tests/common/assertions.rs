//! Assertion helpers for tests.

use image::RgbaImage;
use pretty_assertions::assert_eq;
use std::path::Path;

use super::fixtures::CLEAR;

/// Assert the file at `path` starts with the PNG signature
pub fn assert_png_file(path: &Path) {
    let bytes = std::fs::read(path).expect("Output file should exist");
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Assert a pixel's exact RGBA value
pub fn assert_pixel(image: &RgbaImage, x: u32, y: u32, expected: [u8; 4]) {
    assert_eq!(
        image.get_pixel(x, y).0,
        expected,
        "Pixel ({x}, {y}) mismatch"
    );
}

/// Assert the four corners are fully transparent black
pub fn assert_corners_clear(image: &RgbaImage) {
    let (w, h) = image.dimensions();
    for (x, y) in [(0, 0), (0, h - 1), (w - 1, 0), (w - 1, h - 1)] {
        assert_pixel(image, x, y, CLEAR);
    }
}

/// Render an image as rows of `x` (transparent) and `-` (anything else)
pub fn transparency_map(image: &RgbaImage) -> Vec<String> {
    (0..image.height())
        .map(|y| {
            (0..image.width())
                .map(|x| {
                    if image.get_pixel(x, y).0 == CLEAR {
                        'x'
                    } else {
                        '-'
                    }
                })
                .collect()
        })
        .collect()
}
