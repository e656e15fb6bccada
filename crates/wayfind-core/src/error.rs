//! Grid validation errors.

use std::fmt;

use crate::cell::Cell;

/// Which end of a search an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Errors reported by [`Grid::validate_endpoints`](crate::Grid::validate_endpoints).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The endpoint lies outside the grid.
    OutOfBounds {
        endpoint: Endpoint,
        cell: Cell,
        rows: i32,
        cols: i32,
    },
    /// The endpoint is a wall.
    Blocked { endpoint: Endpoint, cell: Cell },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                endpoint,
                cell,
                rows,
                cols,
            } => write!(f, "{endpoint} {cell} is outside the {rows}x{cols} grid"),
            Self::Blocked { endpoint, cell } => write!(f, "{endpoint} {cell} is a wall"),
        }
    }
}

impl std::error::Error for GridError {}
