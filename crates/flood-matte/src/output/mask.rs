//! BackgroundMask: the pixels a fill classified as background.
//!
//! The mask is a dense bitmap over the grid so membership tests during the
//! traversal are a single index lookup.

use crate::color::Rgba;
use crate::grid::{Coord, RgbaGrid};

/// Set of grid coordinates classified as background.
///
/// # Example
///
/// ```
/// use flood_matte::{Coord, FloodMatte, Rgba, RgbaGrid};
///
/// let grid = RgbaGrid::new(3, 3, Rgba::WHITE);
/// let mask = FloodMatte::new().classify(&grid);
///
/// // Only the corners: nothing white passes the near-black test.
/// assert_eq!(mask.len(), 4);
/// assert!(mask.contains(Coord::new(2, 2)));
/// assert!(!mask.contains(Coord::new(1, 1)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
    count: usize,
}

impl BackgroundMask {
    /// A mask of the given size with nothing marked.
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; width as usize * height as usize],
            count: 0,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of background pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    fn index_of(&self, coord: Coord) -> Option<usize> {
        if coord.x < self.width && coord.y < self.height {
            Some(coord.y as usize * self.width as usize + coord.x as usize)
        } else {
            None
        }
    }

    /// Whether `coord` is background. Out-of-bounds coordinates never are.
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        self.index_of(coord).is_some_and(|i| self.bits[i])
    }

    #[inline]
    pub(crate) fn contains_index(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// Mark `coord`. Returns `true` if it was newly added.
    #[inline]
    pub fn insert(&mut self, coord: Coord) -> bool {
        match self.index_of(coord) {
            Some(i) => self.insert_index(i),
            None => false,
        }
    }

    #[inline]
    pub(crate) fn insert_index(&mut self, index: usize) -> bool {
        if self.bits[index] {
            return false;
        }
        self.bits[index] = true;
        self.count += 1;
        true
    }

    /// Background coordinates in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        let w = self.width as usize;
        self.bits
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b)
            .map(move |(i, _)| Coord::new((i % w) as u32, (i / w) as u32))
    }

    /// Rewrite every background pixel of `grid` to fully transparent black.
    ///
    /// Pixels outside the mask are left untouched. Returns the number of
    /// pixels rewritten.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that the grid has the same dimensions as the mask.
    pub fn apply_to(&self, grid: &mut RgbaGrid) -> usize {
        debug_assert_eq!(
            (grid.width(), grid.height()),
            (self.width, self.height),
            "mask and grid dimensions differ"
        );
        let mut cleared = 0;
        for (px, &bg) in grid.pixels_mut().iter_mut().zip(&self.bits) {
            if bg {
                *px = Rgba::TRANSPARENT;
                cleared += 1;
            }
        }
        cleared
    }
}
