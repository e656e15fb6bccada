//! Scenario utilities for wayfind: random generation and text layouts.
//!
//! - [`ScenarioGen`] samples a random grid with walls, weights and two
//!   distinct endpoints.
//! - [`Scenario::parse`] reads a scenario from ASCII art and [`render`]
//!   draws one back, optionally with a path overlaid.

pub mod layout;
pub mod scenario;

pub use layout::{LayoutError, render};
pub use scenario::{GenConfig, GenError, Scenario, ScenarioGen};
