//! Uniform-cost search.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use wayfind_core::Coord;

use crate::adjacency::Adjacency;
use crate::engine::SearchEngine;

/// Frontier entry ordered by accumulated cost, then insertion sequence.
struct Entry {
    cost: i32,
    seq: u64,
    node: Coord,
    path: Vec<Coord>,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the cheapest entry first,
        // and among equal costs the earliest-inserted one.
        other
            .cost
            .cmp(&self.cost)
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl SearchEngine {
    /// Uniform-cost traversal from `start` to `goal`.
    ///
    /// The frontier is a min-priority queue on accumulated path cost, with
    /// an insertion sequence number as stable secondary key so the output
    /// is reproducible across runs. The returned path has minimum total
    /// edge cost. Frontier entries carry their whole path from the start.
    pub fn ucs(&mut self, adj: &Adjacency, start: Coord, goal: Coord) -> Option<Vec<Coord>> {
        self.visited.clear();
        let mut seq: u64 = 0;
        let mut heap: BinaryHeap<Entry> = BinaryHeap::new();
        heap.push(Entry {
            cost: 0,
            seq,
            node: start,
            path: vec![start],
        });

        while let Some(Entry {
            cost, node, path, ..
        }) = heap.pop()
        {
            if self.visited.contains(&node) {
                continue;
            }
            // Goal test at pop time, before expansion.
            if node == goal {
                return Some(path);
            }
            self.visited.insert(node);
            for &(neighbor, edge_cost) in adj.neighbors(node) {
                if !self.visited.contains(&neighbor) {
                    let mut next = path.clone();
                    next.push(neighbor);
                    seq += 1;
                    heap.push(Entry {
                        cost: cost + edge_cost,
                        seq,
                        node: neighbor,
                        path: next,
                    });
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfind_core::{CellState, GridModel};

    #[test]
    fn open_grid_path_has_minimum_cost() {
        // 3x3, no obstacles, corner to corner: total cost 4 (all edges
        // cost 1), i.e. 5 coordinates.
        let adj = Adjacency::build(&GridModel::new(3, 3));
        let mut engine = SearchEngine::new();
        let path = engine
            .ucs(&adj, Coord::new(0, 0), Coord::new(2, 2))
            .unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), Some(&Coord::new(0, 0)));
        assert_eq!(path.last(), Some(&Coord::new(2, 2)));
    }

    #[test]
    fn matches_bfs_length_on_uniform_costs() {
        // With every edge at cost 1, minimal cost and minimal edge count
        // coincide.
        let mut grid = GridModel::new(6, 6);
        for &(row, col) in &[(1, 1), (1, 2), (1, 3), (3, 3), (4, 1), (2, 5)] {
            grid.set(Coord::new(row, col), CellState::Obstacle).unwrap();
        }
        let adj = Adjacency::build(&grid);
        let mut engine = SearchEngine::new();
        let start = Coord::new(0, 0);
        let goal = Coord::new(5, 5);
        let ucs = engine.ucs(&adj, start, goal).unwrap();
        let bfs = engine.bfs(&adj, start, goal).unwrap();
        assert_eq!(ucs.len(), bfs.len());
    }

    #[test]
    fn insertion_order_breaks_ties_stably() {
        let adj = Adjacency::build(&GridModel::new(4, 4));
        let mut engine = SearchEngine::new();
        let start = Coord::new(0, 0);
        let goal = Coord::new(3, 3);
        let first = engine.ucs(&adj, start, goal).unwrap();
        let second = engine.ucs(&adj, start, goal).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unreachable_goal_returns_none() {
        let mut grid = GridModel::new(3, 3);
        for row in 0..3 {
            grid.set(Coord::new(row, 1), CellState::Obstacle).unwrap();
        }
        let adj = Adjacency::build(&grid);
        let mut engine = SearchEngine::new();
        assert!(
            engine
                .ucs(&adj, Coord::new(0, 0), Coord::new(1, 2))
                .is_none()
        );
    }
}
