//! Depth-first search.

use wayfind_core::Coord;

use crate::adjacency::Adjacency;
use crate::engine::SearchEngine;

impl SearchEngine {
    /// Depth-first traversal from `start` to `goal`.
    ///
    /// The frontier is a stack, so the most recently pushed neighbour
    /// (the last one in the fixed expansion order) is explored first. The
    /// returned path is reproducible but carries no length guarantee.
    /// Frontier entries carry their whole path from the start.
    pub fn dfs(&mut self, adj: &Adjacency, start: Coord, goal: Coord) -> Option<Vec<Coord>> {
        self.visited.clear();
        let mut stack: Vec<(Coord, Vec<Coord>)> = vec![(start, vec![start])];

        while let Some((node, path)) = stack.pop() {
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
                    stack.push((neighbor, next));
                }
            }
        }

        None
    }
}
