//! Owned RGBA pixel grid.
//!
//! [`RgbaGrid`] is the working buffer the flood fill reads and rewrites. It
//! owns its pixels in row-major order and converts losslessly to and from the
//! flat `[R, G, B, A, ...]` byte layout used by decoders and encoders.

use super::coord::Coord;
use crate::color::Rgba;
use std::fmt;

/// Error building a grid from raw bytes or pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Buffer length does not match `width * height` (times 4 for bytes)
    BufferLength {
        /// Expected length
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::BufferLength { expected, actual } => {
                write!(
                    f,
                    "pixel buffer length mismatch: expected {}, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A width × height grid of [`Rgba`] pixels.
///
/// # Example
///
/// ```
/// use flood_matte::{Coord, Rgba, RgbaGrid};
///
/// let mut grid = RgbaGrid::new(2, 2, Rgba::BLACK);
/// grid.set(Coord::new(1, 0), Rgba::WHITE);
///
/// assert_eq!(grid.get(Coord::new(1, 0)), Some(Rgba::WHITE));
/// assert_eq!(grid.get(Coord::new(2, 0)), None);
/// assert_eq!(grid.as_raw().len(), 2 * 2 * 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaGrid {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl RgbaGrid {
    /// Create a grid filled with a single colour.
    pub fn new(width: u32, height: u32, fill: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        }
    }

    /// Wrap row-major pixels.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba>) -> Result<Self, GridError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(GridError::BufferLength {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a grid by calling `f` for every coordinate in row-major order.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(Coord) -> Rgba,
    {
        let pixels = (0..height)
            .flat_map(|y| (0..width).map(move |x| Coord::new(x, y)))
            .map(&mut f)
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Build from a flat `[R, G, B, A, ...]` buffer.
    pub fn from_raw(width: u32, height: u32, bytes: &[u8]) -> Result<Self, GridError> {
        let expected = width as usize * height as usize * 4;
        if bytes.len() != expected {
            return Err(GridError::BufferLength {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|c| Rgba::new(c[0], c[1], c[2], c[3]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// True when the grid has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Whether `coord` lies inside the grid.
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    /// Row-major index of an in-bounds coordinate.
    #[inline]
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.y as usize * self.width as usize + coord.x as usize)
        } else {
            None
        }
    }

    /// Coordinate of a row-major index.
    #[inline]
    pub fn coord_of(&self, index: usize) -> Coord {
        let w = self.width as usize;
        Coord::new((index % w) as u32, (index / w) as u32)
    }

    #[inline]
    pub fn get(&self, coord: Coord) -> Option<Rgba> {
        self.index_of(coord).map(|i| self.pixels[i])
    }

    /// Overwrite one pixel. Returns `false` if `coord` is out of bounds.
    #[inline]
    pub fn set(&mut self, coord: Coord, pixel: Rgba) -> bool {
        match self.index_of(coord) {
            Some(i) => {
                self.pixels[i] = pixel;
                true
            }
            None => false,
        }
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.pixels
    }

    /// The distinct corner coordinates.
    ///
    /// Order is top-left, bottom-left, top-right, bottom-right. Grids one
    /// pixel wide or tall share corners, so fewer than four are returned;
    /// an empty grid has none.
    pub fn corners(&self) -> Vec<Coord> {
        if self.is_empty() {
            return Vec::new();
        }
        let (xmax, ymax) = (self.width - 1, self.height - 1);
        let mut corners = Vec::with_capacity(4);
        for c in [
            Coord::new(0, 0),
            Coord::new(0, ymax),
            Coord::new(xmax, 0),
            Coord::new(xmax, ymax),
        ] {
            if !corners.contains(&c) {
                corners.push(c);
            }
        }
        corners
    }

    /// Flat `[R, G, B, A, ...]` copy of the grid.
    pub fn as_raw(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_bytes()).collect()
    }

    /// Consume the grid into flat `[R, G, B, A, ...]` bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.as_raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_roundtrip_layout() {
        let bytes = vec![1, 2, 3, 4, 5, 6, 7, 8];
        let grid = RgbaGrid::from_raw(2, 1, &bytes).unwrap();
        assert_eq!(grid.get(Coord::new(0, 0)), Some(Rgba::new(1, 2, 3, 4)));
        assert_eq!(grid.get(Coord::new(1, 0)), Some(Rgba::new(5, 6, 7, 8)));
        assert_eq!(grid.into_raw(), bytes);
    }

    #[test]
    fn test_from_raw_rejects_bad_length() {
        let err = RgbaGrid::from_raw(2, 2, &[0; 15]).unwrap_err();
        assert_eq!(
            err,
            GridError::BufferLength {
                expected: 16,
                actual: 15
            }
        );
        assert_eq!(
            err.to_string(),
            "pixel buffer length mismatch: expected 16, got 15"
        );
    }

    #[test]
    fn test_from_pixels_rejects_bad_length() {
        let err = RgbaGrid::from_pixels(3, 1, vec![Rgba::BLACK; 2]).unwrap_err();
        assert_eq!(
            err,
            GridError::BufferLength {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_from_fn_visits_row_major() {
        let grid = RgbaGrid::from_fn(3, 2, |c| Rgba::opaque(c.x as u8, c.y as u8, 0));
        assert_eq!(grid.len(), 6);
        assert_eq!(grid.get(Coord::new(2, 0)), Some(Rgba::opaque(2, 0, 0)));
        assert_eq!(grid.get(Coord::new(1, 1)), Some(Rgba::opaque(1, 1, 0)));
        assert_eq!(grid.pixels()[3], Rgba::opaque(0, 1, 0));
    }

    #[test]
    fn test_index_is_row_major() {
        let grid = RgbaGrid::new(4, 3, Rgba::BLACK);
        assert_eq!(grid.index_of(Coord::new(1, 2)), Some(9));
        assert_eq!(grid.coord_of(9), Coord::new(1, 2));
        assert_eq!(grid.index_of(Coord::new(4, 0)), None);
        assert_eq!(grid.index_of(Coord::new(0, 3)), None);
    }

    #[test]
    fn test_set_out_of_bounds_is_noop() {
        let mut grid = RgbaGrid::new(1, 1, Rgba::BLACK);
        assert!(!grid.set(Coord::new(1, 0), Rgba::WHITE));
        assert_eq!(grid.pixels(), &[Rgba::BLACK]);
    }

    #[test]
    fn test_corners_regular() {
        let grid = RgbaGrid::new(5, 4, Rgba::BLACK);
        assert_eq!(
            grid.corners(),
            vec![
                Coord::new(0, 0),
                Coord::new(0, 3),
                Coord::new(4, 0),
                Coord::new(4, 3)
            ]
        );
    }

    #[test]
    fn test_corners_collapse_on_thin_grids() {
        assert_eq!(
            RgbaGrid::new(1, 1, Rgba::BLACK).corners(),
            vec![Coord::new(0, 0)]
        );
        assert_eq!(
            RgbaGrid::new(1, 3, Rgba::BLACK).corners(),
            vec![Coord::new(0, 0), Coord::new(0, 2)]
        );
        assert_eq!(
            RgbaGrid::new(3, 1, Rgba::BLACK).corners(),
            vec![Coord::new(0, 0), Coord::new(2, 0)]
        );
    }

    #[test]
    fn test_corners_empty_grid() {
        assert!(RgbaGrid::new(0, 0, Rgba::BLACK).corners().is_empty());
        assert!(RgbaGrid::new(0, 5, Rgba::BLACK).corners().is_empty());
    }
}
