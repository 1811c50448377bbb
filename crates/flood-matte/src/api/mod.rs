//! Public API for the flood-matte crate.
//!
//! This module provides the high-level API: [`FloodMatte`] builder and
//! [`MatteError`] unified error type.

mod builder;
mod error;

pub use builder::FloodMatte;
pub use error::MatteError;
