//! **wayfind-core** — Grid model and layout generation (core types).
//!
//! This crate provides the foundational types of the *wayfind* workspace:
//! the [`Coord`] cell position, the [`GridModel`] obstacle grid with random
//! layout generation, and the [`GridError`] failure modes. Deriving a
//! traversable graph and searching it live in the `wayfind-search` crate.

pub mod coord;
pub mod error;
pub mod grid;

pub use coord::Coord;
pub use error::{GridError, Result};
pub use grid::{CellState, DEFAULT_OBSTACLE_PROBABILITY, GridModel};
