//! Search coordinator and timing wrapper.

use std::collections::HashSet;
use std::time::Instant;

use wayfind_core::Coord;

use crate::adjacency::Adjacency;
use crate::result::PathResult;

/// Which uninformed search to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Depth-first search.
    Dfs,
    /// Breadth-first search.
    Bfs,
    /// Uniform-cost search.
    Ucs,
}

/// Coordinator for uninformed searches over an adjacency relation.
///
/// Owns the visited-set scratch so repeated queries reuse its allocation.
/// One algorithm lives per source file as an `impl` block on this type.
/// Algorithm bodies are pure; wall-clock measurement happens only in
/// [`run`](SearchEngine::run).
#[derive(Debug, Default)]
pub struct SearchEngine {
    pub(crate) visited: HashSet<Coord>,
}

impl SearchEngine {
    /// Create a new engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `algorithm` from `start` to `goal`, timing the traversal.
    ///
    /// When either endpoint is unset the search is not attempted and the
    /// result is not-found with zero elapsed time. Otherwise the traversal
    /// runs to completion and its duration is measured with a monotonic
    /// clock.
    pub fn run(
        &mut self,
        adj: &Adjacency,
        start: Option<Coord>,
        goal: Option<Coord>,
        algorithm: Algorithm,
    ) -> PathResult {
        let (Some(start), Some(goal)) = (start, goal) else {
            return PathResult::not_found();
        };

        let begin = Instant::now();
        let path = match algorithm {
            Algorithm::Dfs => self.dfs(adj, start, goal),
            Algorithm::Bfs => self.bfs(adj, start, goal),
            Algorithm::Ucs => self.ucs(adj, start, goal),
        };
        let elapsed = begin.elapsed();

        log::debug!(
            "{algorithm:?} {start} -> {goal}: {} in {:.6}s",
            if path.is_some() { "path found" } else { "no path" },
            elapsed.as_secs_f64(),
        );

        PathResult::new(path, elapsed)
    }
}
