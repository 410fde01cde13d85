//! 4-connected adjacency derived from a grid layout.

use std::collections::HashMap;

use wayfind_core::{CellState, Coord, GridModel};

/// Cost of traversing any edge. The grid is uniform-cost.
pub const EDGE_COST: i32 = 1;

/// The traversable graph derived from one grid layout.
///
/// Maps every free cell to its ordered `(neighbor, cost)` list. Obstacle
/// cells have no entry, and querying one yields an empty list; the two
/// cases are equivalent for callers. The relation is a disposable view:
/// rebuild it whenever the grid changes.
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    edges: HashMap<Coord, Vec<(Coord, i32)>>,
}

impl Adjacency {
    /// Materialize the adjacency relation for `grid`.
    ///
    /// For each free cell, in-bounds free neighbours are appended in the
    /// fixed up, down, left, right order. Search expansion order (and
    /// thus exact DFS/BFS output) follows from it.
    pub fn build(grid: &GridModel) -> Self {
        let mut edges = HashMap::new();
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let c = Coord::new(row, col);
                if grid.at(c) != Some(CellState::Free) {
                    continue;
                }
                let neighbors: Vec<(Coord, i32)> = c
                    .neighbors_4()
                    .into_iter()
                    .filter(|&n| grid.is_free(n))
                    .map(|n| (n, EDGE_COST))
                    .collect();
                edges.insert(c, neighbors);
            }
        }
        Self { edges }
    }

    /// The ordered `(neighbor, cost)` list of `c`.
    ///
    /// Empty for obstacle or out-of-bounds coordinates.
    pub fn neighbors(&self, c: Coord) -> &[(Coord, i32)] {
        self.edges.get(&c).map_or(&[], Vec::as_slice)
    }

    /// Whether `c` was a free cell when the relation was built.
    pub fn contains(&self, c: Coord) -> bool {
        self.edges.contains_key(&c)
    }

    /// Number of free cells in the relation.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the relation has no free cells at all.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
