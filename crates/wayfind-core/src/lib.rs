//! **wayfind-core**: grid types shared by the *wayfind* crates.
//!
//! This crate provides the [`Cell`] coordinate, the [`Grid`] graph with walls
//! and traversal weights, and the [`GridError`] used when callers want
//! search endpoints validated.

pub mod cell;
pub mod error;
pub mod grid;

pub use cell::Cell;
pub use error::{Endpoint, GridError};
pub use grid::{DEFAULT_WEIGHT, Grid};
