//! Breadth-first search.

use std::collections::VecDeque;

use wayfind_core::Coord;

use crate::adjacency::Adjacency;
use crate::engine::SearchEngine;

impl SearchEngine {
    /// Breadth-first traversal from `start` to `goal`.
    ///
    /// The frontier is a FIFO queue: the returned path has the minimum
    /// number of edges among all start-goal paths. Ties between
    /// equal-length paths resolve to whichever is discovered first under
    /// the fixed expansion order. Frontier entries carry their whole path
    /// from the start.
    pub fn bfs(&mut self, adj: &Adjacency, start: Coord, goal: Coord) -> Option<Vec<Coord>> {
        self.visited.clear();
        let mut queue: VecDeque<(Coord, Vec<Coord>)> = VecDeque::new();
        queue.push_back((start, vec![start]));

        while let Some((node, path)) = queue.pop_front() {
            if self.visited.contains(&node) {
                continue;
            }
            // Goal test at pop time, before expansion.
            if node == goal {
                return Some(path);
            }
            self.visited.insert(node);
            for &(neighbor, _) in adj.neighbors(node) {
                if !self.visited.contains(&neighbor) {
                    let mut next = path.clone();
                    next.push(neighbor);
                    queue.push_back((neighbor, next));
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
    fn open_grid_path_has_minimum_edges() {
        // 3x3, no obstacles, corner to corner: exactly 4 edges. The fixed
        // up/down/left/right order makes the first discovered minimal path
        // run down the left column, then across the bottom row.
        let adj = Adjacency::build(&GridModel::new(3, 3));
        let mut engine = SearchEngine::new();
        let path = engine
            .bfs(&adj, Coord::new(0, 0), Coord::new(2, 2))
            .unwrap();
        assert_eq!(
            path,
            vec![
                Coord::new(0, 0),
                Coord::new(1, 0),
                Coord::new(2, 0),
                Coord::new(2, 1),
                Coord::new(2, 2),
            ]
        );
    }

    #[test]
    fn detour_is_still_shortest_available() {
        // Wall with one gap forces a detour; BFS must still take the
        // fewest edges through the gap.
        let mut grid = GridModel::new(3, 3);
        grid.set(Coord::new(0, 1), CellState::Obstacle).unwrap();
        grid.set(Coord::new(1, 1), CellState::Obstacle).unwrap();
        let adj = Adjacency::build(&grid);
        let mut engine = SearchEngine::new();
        let path = engine
            .bfs(&adj, Coord::new(0, 0), Coord::new(0, 2))
            .unwrap();
        assert_eq!(path.len(), 7);
        assert!(path.contains(&Coord::new(2, 1)));
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
                .bfs(&adj, Coord::new(0, 0), Coord::new(2, 2))
                .is_none()
        );
    }

    #[test]
    fn adjacent_cells_give_two_node_path() {
        let adj = Adjacency::build(&GridModel::new(2, 2));
        let mut engine = SearchEngine::new();
        let path = engine
            .bfs(&adj, Coord::new(0, 0), Coord::new(0, 1))
            .unwrap();
        assert_eq!(path, vec![Coord::new(0, 0), Coord::new(0, 1)]);
    }
}
