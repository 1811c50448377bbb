//! Flood fill options.
//!
//! This module provides [`FillOptions`] and [`Connectivity`] for configuring
//! the corner-seeded traversal.

use crate::color::Tolerance;
use std::fmt;
use std::str::FromStr;

/// Axis-aligned neighbour offsets: down, up, right, left.
const AXIS_OFFSETS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Axis-aligned offsets followed by the four diagonals.
const ALL_OFFSETS: [(i32, i32); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Which neighbours the traversal may step to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Connectivity {
    /// Up, down, left, right.
    #[default]
    Four,
    /// Axis-aligned plus diagonal neighbours.
    Eight,
}

impl Connectivity {
    /// Neighbour offsets `(dx, dy)` in the order they are examined.
    #[inline]
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Connectivity::Four => &AXIS_OFFSETS,
            Connectivity::Eight => &ALL_OFFSETS,
        }
    }

    /// Neighbour count, 4 or 8.
    #[inline]
    pub fn degree(self) -> u8 {
        self.offsets().len() as u8
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degree())
    }
}

/// Error parsing a [`Connectivity`] from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseConnectivityError(pub String);

impl fmt::Display for ParseConnectivityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid connectivity '{}' (expected 4 or 8)", self.0)
    }
}

impl std::error::Error for ParseConnectivityError {}

impl FromStr for Connectivity {
    type Err = ParseConnectivityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "4" | "four" => Ok(Connectivity::Four),
            "8" | "eight" => Ok(Connectivity::Eight),
            other => Err(ParseConnectivityError(other.to_string())),
        }
    }
}

impl TryFrom<u8> for Connectivity {
    type Error = ParseConnectivityError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(Connectivity::Four),
            8 => Ok(Connectivity::Eight),
            other => Err(ParseConnectivityError(other.to_string())),
        }
    }
}

/// Configuration for one flood fill run.
///
/// # Defaults
///
/// - Tolerance: 30
/// - Connectivity: [`Connectivity::Four`]
///
/// # Example
///
/// ```
/// use flood_matte::{Connectivity, FillOptions, Tolerance};
///
/// let options = FillOptions::new()
///     .tolerance(Tolerance::new(12))
///     .connectivity(Connectivity::Eight);
/// assert_eq!(options.tolerance.value(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FillOptions {
    /// Threshold for the near-black predicate.
    pub tolerance: Tolerance,
    /// Neighbourhood used when expanding the frontier.
    pub connectivity: Connectivity,
}

impl FillOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    #[inline]
    pub fn connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }
}
