//! The obstacle grid: cell states, endpoints, and random layout generation.

use rand::{Rng, RngExt};

use crate::coord::Coord;
use crate::error::{GridError, Result};

/// Passability state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Traversable.
    #[default]
    Free,
    /// Blocked; carries no edges in the derived graph.
    Obstacle,
}

/// Obstacle density used by callers that want the stock layout.
pub const DEFAULT_OBSTACLE_PROBABILITY: f64 = 0.2;

/// A fixed-size 2D grid of free/obstacle cells with optional start and
/// goal endpoints.
///
/// Cells are stored row-major. The model owns layout state only; deriving
/// a traversable graph from it is the adjacency builder's job. A layout
/// produced by [`generate_random`](Self::generate_random) guarantees that
/// start and goal are distinct free cells; the setters deliberately allow
/// weaker placements (see their docs).
#[derive(Debug, Clone)]
pub struct GridModel {
    rows: i32,
    cols: i32,
    cells: Vec<CellState>,
    start: Option<Coord>,
    goal: Option<Coord>,
}

impl GridModel {
    /// Create a grid with every cell free and no endpoints.
    pub fn new(rows: i32, cols: i32) -> Self {
        let len = (rows.max(0) as usize) * (cols.max(0) as usize);
        Self {
            rows,
            cols,
            cells: vec![CellState::Free; len],
            start: None,
            goal: None,
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Whether `c` lies within the grid bounds.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row >= 0 && c.col >= 0 && c.row < self.rows && c.col < self.cols
    }

    #[inline]
    fn index(&self, c: Coord) -> usize {
        (c.row * self.cols + c.col) as usize
    }

    /// The state of a cell, or `None` if out of bounds.
    pub fn at(&self, c: Coord) -> Option<CellState> {
        if !self.contains(c) {
            return None;
        }
        Some(self.cells[self.index(c)])
    }

    /// Whether `c` is an in-bounds free cell. Out-of-bounds is never free.
    pub fn is_free(&self, c: Coord) -> bool {
        self.at(c) == Some(CellState::Free)
    }

    /// Overwrite the state of a single cell.
    pub fn set(&mut self, c: Coord, state: CellState) -> Result<()> {
        if !self.contains(c) {
            return Err(GridError::InvalidCoordinate(c));
        }
        let i = self.index(c);
        self.cells[i] = state;
        Ok(())
    }

    /// The current start endpoint, if set.
    pub fn start(&self) -> Option<Coord> {
        self.start
    }

    /// The current goal endpoint, if set.
    pub fn goal(&self) -> Option<Coord> {
        self.goal
    }

    /// Place the start endpoint.
    ///
    /// Passability is not checked: a search toward an obstacle or
    /// otherwise unreachable endpoint reports no path rather than failing
    /// here. Out-of-bounds placement is a contract violation.
    pub fn set_start(&mut self, c: Coord) -> Result<()> {
        if !self.contains(c) {
            return Err(GridError::InvalidCoordinate(c));
        }
        self.start = Some(c);
        Ok(())
    }

    /// Place the goal endpoint. Same contract as [`set_start`](Self::set_start).
    pub fn set_goal(&mut self, c: Coord) -> Result<()> {
        if !self.contains(c) {
            return Err(GridError::InvalidCoordinate(c));
        }
        self.goal = Some(c);
        Ok(())
    }

    /// Reset every cell to free and discard both endpoints.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Free);
        self.start = None;
        self.goal = None;
    }

    /// Count cells currently in the given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Randomize the layout.
    ///
    /// Clears all state, then marks each cell as an obstacle independently
    /// with probability `obstacle_probability`. A uniformly random free
    /// cell becomes the start, and a uniformly random free cell distinct
    /// from it becomes the goal, each found by rejection sampling.
    ///
    /// Fails with [`GridError::InsufficientFreeSpace`] when obstacle
    /// placement leaves fewer than two free cells, which the sampling
    /// loops require.
    pub fn generate_random<R: Rng>(
        &mut self,
        rng: &mut R,
        obstacle_probability: f64,
    ) -> Result<()> {
        self.clear();

        for cell in self.cells.iter_mut() {
            if rng.random::<f64>() < obstacle_probability {
                *cell = CellState::Obstacle;
            }
        }

        if self.count(CellState::Free) < 2 {
            return Err(GridError::InsufficientFreeSpace);
        }

        let start = self.sample_free(rng, None);
        let goal = self.sample_free(rng, Some(start));
        self.start = Some(start);
        self.goal = Some(goal);

        log::debug!(
            "generated {}x{} layout: {} obstacles, start {start}, goal {goal}",
            self.rows,
            self.cols,
            self.count(CellState::Obstacle),
        );
        Ok(())
    }

    /// Rejection-sample a uniformly random free cell, optionally distinct
    /// from `exclude`. The caller guarantees at least one candidate exists.
    fn sample_free<R: Rng>(&self, rng: &mut R, exclude: Option<Coord>) -> Coord {
        loop {
            let c = Coord::new(
                rng.random_range(0..self.rows),
                rng.random_range(0..self.cols),
            );
            if self.is_free(c) && Some(c) != exclude {
                return c;
            }
        }
    }
}
