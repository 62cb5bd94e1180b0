//! search::options — execution configuration for the best-search orchestrator.
//!
//! Purpose
//! -------
//! Bundle the tie tolerance and the worker count used by
//! [`best_p_for_params`](crate::search::orchestrator::best_p_for_params) so
//! call sites pass one validated object instead of loose arguments.
//!
//! Invariants & assumptions
//! ------------------------
//! - `workers ≥ 1`. `workers == 1` runs sequentially on the calling thread;
//!   larger values build a dedicated thread pool of that size per search.
//! - The tolerance has already been validated by [`TieTolerance::new`].
use crate::search::{
    errors::{SearchError, SearchResult},
    tolerance::TieTolerance,
};

/// SearchOptions — tolerance and concurrency degree for a search.
///
/// Fields
/// ------
/// - `tolerance`: [`TieTolerance`]
///   Comparison policy for ties in the evaluator and the merge step.
/// - `workers`: `usize`
///   Number of worker threads; `1` means sequential evaluation.
///
/// Notes
/// -----
/// - `SearchOptions::default()` is sequential with the default tolerance
///   (`1e-12`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    pub tolerance: TieTolerance,
    pub workers: usize,
}

impl SearchOptions {
    /// Build validated search options.
    ///
    /// # Errors
    /// Returns [`SearchError::InvalidWorkers`] when `workers == 0`.
    pub fn new(tolerance: TieTolerance, workers: usize) -> SearchResult<SearchOptions> {
        if workers == 0 {
            return Err(SearchError::InvalidWorkers { workers });
        }
        Ok(SearchOptions { tolerance, workers })
    }

    pub fn is_parallel(&self) -> bool {
        self.workers > 1
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions { tolerance: TieTolerance::default(), workers: 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Defaults are sequential; zero workers are rejected.
    //
    // Expect
    // ------
    // - `default().workers == 1`, `new(_, 0)` fails, `new(_, 4)` is parallel.
    fn new_validates_worker_count() {
        assert_eq!(SearchOptions::default().workers, 1);
        assert!(!SearchOptions::default().is_parallel());
        assert_eq!(
            SearchOptions::new(TieTolerance::default(), 0),
            Err(SearchError::InvalidWorkers { workers: 0 })
        );
        assert!(SearchOptions::new(TieTolerance::default(), 4).unwrap().is_parallel());
    }
}
