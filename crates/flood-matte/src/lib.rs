//! flood-matte: knock out a near-black backdrop by flood fill
//!
//! Given an RGBA grid, the pixels reachable from the four corners through a
//! path of near-black pixels are classified as background and rewritten to
//! fully transparent black. Everything else is left byte-for-byte unchanged.
//!
//! # Quick Start
//!
//! ```
//! use flood_matte::{Coord, FloodMatte, Rgba, RgbaGrid, Tolerance};
//!
//! let mut grid = RgbaGrid::new(4, 4, Rgba::BLACK);
//! grid.set(Coord::new(1, 1), Rgba::WHITE);
//! grid.set(Coord::new(2, 1), Rgba::WHITE);
//!
//! let report = FloodMatte::new()
//!     .tolerance(Tolerance::new(30))
//!     .apply(&mut grid);
//!
//! assert_eq!(report.cleared, 14);
//! assert_eq!(grid.get(Coord::new(1, 1)), Some(Rgba::WHITE));
//! ```
//!
//! # Background Classification
//!
//! - A pixel is **near-black** when red, green and blue are all strictly
//!   below the tolerance. Alpha plays no part.
//! - The corners are **always** background, even when bright. Only pixels
//!   reached from a corner are put through the near-black test.
//! - Growth is 4-connected by default; [`Connectivity::Eight`] adds
//!   diagonal steps.
//!
//! The result is exactly the closure of the corner set under "step to a
//! near-black neighbour". Each pixel is visited at most once, so time and
//! memory are O(width × height).
//!
//! # Output
//!
//! [`FloodMatte::classify`] returns a [`BackgroundMask`] without touching the
//! grid. [`FloodMatte::apply`] also rewrites the grid and returns a
//! [`FillReport`].

pub mod api;
pub mod color;
pub mod fill;
pub mod grid;
pub mod output;


pub use api::{FloodMatte, MatteError};
pub use color::{Rgba, Tolerance, ToleranceError, DEFAULT_TOLERANCE};
pub use fill::{flood_from_corners, Connectivity, FillOptions, ParseConnectivityError};
pub use grid::{Coord, GridError, RgbaGrid};
pub use output::{BackgroundMask, FillReport};
