//! Search outcome value.

use std::time::Duration;

use wayfind_core::Coord;

/// The outcome of one search invocation.
///
/// Carries the found path (start and goal inclusive) or nothing, and the
/// wall-clock time the traversal took. Immutable once returned; each call
/// to [`SearchEngine::run`](crate::SearchEngine::run) produces a fresh
/// value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    path: Option<Vec<Coord>>,
    elapsed: Duration,
}

impl PathResult {
    pub(crate) fn new(path: Option<Vec<Coord>>, elapsed: Duration) -> Self {
        Self { path, elapsed }
    }

    /// A not-found result with zero elapsed time, for searches that were
    /// never attempted.
    pub(crate) fn not_found() -> Self {
        Self {
            path: None,
            elapsed: Duration::ZERO,
        }
    }

    /// Whether a path was found.
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// The path coordinates, start and goal inclusive, if one was found.
    pub fn path(&self) -> Option<&[Coord]> {
        self.path.as_deref()
    }

    /// Consume the result, yielding the owned path.
    pub fn into_path(self) -> Option<Vec<Coord>> {
        self.path
    }

    /// Traversal wall-clock time.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Traversal wall-clock time in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_has_zero_elapsed() {
        let r = PathResult::not_found();
        assert!(!r.found());
        assert_eq!(r.path(), None);
        assert_eq!(r.elapsed(), Duration::ZERO);
    }

    #[test]
    fn found_exposes_path_views() {
        let path = vec![Coord::new(0, 0), Coord::new(0, 1)];
        let r = PathResult::new(Some(path.clone()), Duration::from_micros(3));
        assert!(r.found());
        assert_eq!(r.path(), Some(path.as_slice()));
        assert!(r.elapsed_secs() > 0.0);
        assert_eq!(r.into_path(), Some(path));
    }
}
