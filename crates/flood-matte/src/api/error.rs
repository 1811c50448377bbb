//! Unified error type for the flood-matte public API.
//!
//! [`MatteError`] wraps all error types from the crate into a single enum
//! for convenient `?` propagation in application code.

use crate::color::ToleranceError;
use crate::fill::ParseConnectivityError;
use crate::grid::GridError;
use std::fmt;

/// Unified error type for the flood-matte public API.
///
/// # Example
///
/// ```
/// use flood_matte::{MatteError, RgbaGrid, Tolerance};
///
/// fn load(bytes: &[u8], tol: &str) -> Result<(RgbaGrid, Tolerance), MatteError> {
///     let grid = RgbaGrid::from_raw(1, 1, bytes)?;
///     let tolerance = tol.parse::<Tolerance>()?;
///     Ok((grid, tolerance))
/// }
///
/// assert!(load(&[0, 0, 0, 255], "30").is_ok());
/// assert!(load(&[0, 0, 0], "30").is_err());
/// ```
#[derive(Debug)]
pub enum MatteError {
    /// Pixel buffer does not match the declared dimensions
    Grid(GridError),
    /// Tolerance outside 0-255 or unparsable
    Tolerance(ToleranceError),
    /// Connectivity other than 4 or 8
    Connectivity(ParseConnectivityError),
}

impl fmt::Display for MatteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatteError::Grid(err) => write!(f, "grid error: {}", err),
            MatteError::Tolerance(err) => write!(f, "tolerance error: {}", err),
            MatteError::Connectivity(err) => write!(f, "connectivity error: {}", err),
        }
    }
}

impl std::error::Error for MatteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatteError::Grid(err) => Some(err),
            MatteError::Tolerance(err) => Some(err),
            MatteError::Connectivity(err) => Some(err),
        }
    }
}

impl From<GridError> for MatteError {
    fn from(err: GridError) -> Self {
        MatteError::Grid(err)
    }
}

impl From<ToleranceError> for MatteError {
    fn from(err: ToleranceError) -> Self {
        MatteError::Tolerance(err)
    }
}

impl From<ParseConnectivityError> for MatteError {
    fn from(err: ParseConnectivityError) -> Self {
        MatteError::Connectivity(err)
    }
}
