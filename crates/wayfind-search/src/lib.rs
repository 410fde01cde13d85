//! Uninformed search over grid-derived graphs.
//!
//! This crate derives a 4-connected adjacency relation from a
//! `wayfind-core` grid layout and runs three uninformed search algorithms
//! over it:
//!
//! - **DFS** ([`SearchEngine::dfs`]): stack frontier; reproducible path,
//!   no length guarantee
//! - **BFS** ([`SearchEngine::bfs`]): queue frontier; minimum edge count
//! - **UCS** ([`SearchEngine::ucs`]): cost-ordered frontier; minimum
//!   total cost
//!
//! All three share one termination rule: a node is marked visited when it
//! is popped from the frontier, is never re-expanded afterwards, and the
//! goal test happens at pop time. [`SearchEngine::run`] wraps any of them
//! with wall-clock timing and packages a [`PathResult`] for the caller.

mod adjacency;
mod bfs;
mod dfs;
mod engine;
mod result;
mod ucs;

pub use adjacency::{Adjacency, EDGE_COST};
pub use engine::{Algorithm, SearchEngine};
pub use result::PathResult;
