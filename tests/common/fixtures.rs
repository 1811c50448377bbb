//! Test fixtures: scratch directories and synthetic images.

use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const BLACK: [u8; 4] = [0, 0, 0, 255];
pub const WHITE: [u8; 4] = [255, 255, 255, 255];
pub const RED: [u8; 4] = [220, 30, 30, 255];
pub const CLEAR: [u8; 4] = [0, 0, 0, 0];

/// Scratch directory that lives as long as the test
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write an RGBA image as PNG and return its path
    pub fn write_png(&self, name: &str, image: &RgbaImage) -> PathBuf {
        let path = self.path(name);
        image
            .save_with_format(&path, ImageFormat::Png)
            .expect("Failed to write PNG fixture");
        path
    }

    /// Write an RGB image (no alpha channel) in the given format
    pub fn write_rgb(&self, name: &str, image: &RgbImage, format: ImageFormat) -> PathBuf {
        let path = self.path(name);
        image
            .save_with_format(&path, format)
            .expect("Failed to write RGB fixture");
        path
    }

    pub fn write_bytes(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, bytes).expect("Failed to write fixture bytes");
        path
    }
}

/// Build an RGBA image from rows of characters.
///
/// `#` black, `.` white, `r` red, `g` dark grey (20,20,20).
pub fn image_from_rows(rows: &[&str]) -> RgbaImage {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |r| r.len()) as u32;
    RgbaImage::from_fn(width, height, |x, y| {
        let c = rows[y as usize].as_bytes()[x as usize];
        Rgba(match c {
            b'#' => BLACK,
            b'r' => RED,
            b'g' => [20, 20, 20, 255],
            _ => WHITE,
        })
    })
}

/// Solid-colour RGBA image
pub fn solid(width: u32, height: u32, px: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(px))
}

/// Black backdrop with a filled red disc in the middle, as an RGB image
pub fn rgb_logo(width: u32, height: u32) -> RgbImage {
    let (cx, cy) = (width as f32 / 2.0, height as f32 / 2.0);
    let r = width.min(height) as f32 / 4.0;
    RgbImage::from_fn(width, height, |x, y| {
        let (dx, dy) = (x as f32 + 0.5 - cx, y as f32 + 0.5 - cy);
        if dx * dx + dy * dy <= r * r {
            Rgb([220, 30, 30])
        } else {
            Rgb([0, 0, 0])
        }
    })
}

/// Decode a PNG written by the tool
pub fn read_rgba(path: &Path) -> RgbaImage {
    image::open(path)
        .expect("Failed to decode output")
        .into_rgba8()
}
