//! Error types for the grid model.

use thiserror::Error;

use crate::coord::Coord;

/// Grid model error type.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Obstacle placement left fewer than two free cells, so distinct
    /// start and goal cells cannot be sampled.
    #[error("insufficient free space: fewer than two free cells after obstacle placement")]
    InsufficientFreeSpace,

    /// A write named a cell outside the grid bounds.
    #[error("invalid coordinate {0}: outside grid bounds")]
    InvalidCoordinate(Coord),
}

pub type Result<T> = std::result::Result<T, GridError>;
