//! Logo Knockout
//!
//! Removes the near-black backdrop around a logo by flood-filling inward
//! from the image corners and writing the result as a transparent PNG.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
