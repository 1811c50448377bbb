//! Corner-seeded breadth-first traversal.
//!
//! The fill starts from every corner of the grid and spreads to neighbouring
//! pixels that pass the near-black test. Corners themselves are always part
//! of the background, whatever their colour; only the pixels reached *from*
//! them are tested.
//!
//! # Algorithm
//!
//! ```text
//! frontier <- distinct corners       (marked background unconditionally)
//! while frontier not empty:
//!     c <- pop front
//!     for n in neighbours(c):
//!         if n in bounds and not marked and near_black(n):
//!             mark n; push back n
//! ```
//!
//! A pixel is marked the moment it is enqueued, so it can never be enqueued
//! twice. The mark set doubles as the visited set: rejected neighbours are
//! left unmarked and re-tested from other predecessors, which always rejects
//! them again because the test looks only at their own colour.

mod options;

pub use options::{Connectivity, FillOptions, ParseConnectivityError};

use crate::grid::{Coord, RgbaGrid};
use crate::output::BackgroundMask;
use std::collections::VecDeque;

/// Classify the background of `grid` without modifying it.
pub fn flood_from_corners(grid: &RgbaGrid, options: &FillOptions) -> BackgroundMask {
    let mut mask = BackgroundMask::empty(grid.width(), grid.height());
    let mut frontier: VecDeque<Coord> =
        VecDeque::with_capacity((grid.width() as usize + grid.height() as usize) * 2);
    let mut enqueued = 0usize;

    for corner in grid.corners() {
        if mask.insert(corner) {
            frontier.push_back(corner);
            enqueued += 1;
        }
    }

    let pixels = grid.pixels();
    while let Some(coord) = frontier.pop_front() {
        for &(dx, dy) in options.connectivity.offsets() {
            let Some(next) = coord.offset(dx, dy) else {
                continue;
            };
            let Some(idx) = grid.index_of(next) else {
                continue;
            };
            if mask.contains_index(idx) {
                continue;
            }
            if pixels[idx].is_near_black(options.tolerance) {
                mask.insert_index(idx);
                frontier.push_back(next);
                enqueued += 1;
            }
        }
    }

    debug_assert_eq!(enqueued, mask.len(), "a coordinate was enqueued twice");
    mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Rgba, Tolerance};

    fn grid_from_rows(rows: &[&str]) -> RgbaGrid {
        // '#' = black, '.' = white, 'g' = dark grey (20,20,20)
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.len()) as u32;
        let pixels = rows
            .iter()
            .flat_map(|r| r.chars())
            .map(|c| match c {
                '#' => Rgba::BLACK,
                'g' => Rgba::opaque(20, 20, 20),
                _ => Rgba::WHITE,
            })
            .collect();
        RgbaGrid::from_pixels(width, height, pixels).unwrap()
    }

    fn marked(mask: &BackgroundMask, rows: usize, cols: usize) -> Vec<String> {
        (0..rows)
            .map(|y| {
                (0..cols)
                    .map(|x| {
                        if mask.contains(Coord::new(x as u32, y as u32)) {
                            'x'
                        } else {
                            '-'
                        }
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_spreads_through_black_only() {
        let grid = grid_from_rows(&["##..", "#...", "...#", "..##"]);
        let mask = flood_from_corners(&grid, &FillOptions::new());
        assert_eq!(
            marked(&mask, 4, 4),
            vec!["xx-x", "x---", "---x", "x-xx"]
        );
    }

    #[test]
    fn test_tolerance_is_respected() {
        let grid = grid_from_rows(&["ggg", "ggg", "ggg"]);
        let loose = FillOptions::new().tolerance(Tolerance::new(21));
        assert_eq!(flood_from_corners(&grid, &loose).len(), 9);

        let tight = FillOptions::new().tolerance(Tolerance::new(20));
        let tight = flood_from_corners(&grid, &tight);
        assert_eq!(tight.len(), 4, "only the corners at tolerance 20");
    }

    #[test]
    fn test_diagonal_needs_eight_connectivity() {
        // Black diagonal from the top-left corner; everything else white.
        let grid = grid_from_rows(&[".....", ".#...", "..#..", ".....", "....."]);
        let four = flood_from_corners(&grid, &FillOptions::new());
        assert!(!four.contains(Coord::new(1, 1)));

        let eight = flood_from_corners(
            &grid,
            &FillOptions::new().connectivity(Connectivity::Eight),
        );
        assert!(eight.contains(Coord::new(1, 1)));
        assert!(eight.contains(Coord::new(2, 2)));
        assert_eq!(eight.len(), 6);
    }

    #[test]
    fn test_empty_grid_yields_empty_mask() {
        let grid = RgbaGrid::new(0, 0, Rgba::BLACK);
        let mask = flood_from_corners(&grid, &FillOptions::new());
        assert!(mask.is_empty());
    }

    #[test]
    fn test_single_pixel() {
        let grid = RgbaGrid::new(1, 1, Rgba::WHITE);
        let mask = flood_from_corners(&grid, &FillOptions::new());
        assert_eq!(mask.len(), 1);
    }

    #[test]
    fn test_single_row() {
        let grid = grid_from_rows(&["#.#.#"]);
        let mask = flood_from_corners(&grid, &FillOptions::new());
        assert_eq!(marked(&mask, 1, 5), vec!["x---x"]);
    }

    #[test]
    fn test_does_not_modify_grid() {
        let grid = grid_from_rows(&["###", "#.#", "###"]);
        let before = grid.clone();
        let _ = flood_from_corners(&grid, &FillOptions::new());
        assert_eq!(grid, before);
    }
}
