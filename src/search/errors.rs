//! search::errors — input-validation and execution errors for the search engine.
//!
//! Purpose
//! -------
//! Define [`SearchError`] and [`SearchResult`], the error surface shared by
//! problem construction, tie-tolerance setup, allocation evaluation, and the
//! parallel orchestrator.
//!
//! Key behaviors
//! -------------
//! - Report malformed inputs (zero groups, budget above total, bad
//!   tolerances, mismatched allocation tuples) before any enumeration runs.
//! - Wrap thread-pool construction failures from `rayon`.
//! - Map into `ValueError` at the Python boundary when `python-bindings`
//!   is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - Infeasibility (no size tuple exists for an allocation) is *not* an
//!   error; it is reported as an empty best set with value `0.0`.
//!
//! Testing notes
//! -------------
//! - Unit tests check that `Display` messages embed their payloads.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type SearchResult<T> = Result<T, SearchError>;

/// Error conditions raised by the search engine.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    // ---- Problem parameters ----
    /// The number of groups `k` must be at least one.
    InvalidGroupCount {
        groups: usize,
    },

    /// The marked budget `m` cannot exceed the total `T`.
    BudgetExceedsTotal {
        marked: usize,
        total: usize,
    },

    // ---- Options ----
    /// Tie tolerance must be finite and nonnegative.
    InvalidTolerance {
        tol: f64,
        reason: &'static str,
    },

    /// Worker count must be at least one.
    InvalidWorkers {
        workers: usize,
    },

    // ---- Allocation tuples ----
    /// Allocation length does not match the number of groups.
    AllocationLengthMismatch {
        expected: usize,
        found: usize,
    },

    /// Allocation entries do not sum to the marked budget.
    AllocationSumMismatch {
        expected: usize,
        found: usize,
    },

    /// A configuration violates `0 <= b_i <= x_i`, `x_i >= 1`.
    InvalidConfiguration {
        index: usize,
        reason: &'static str,
    },

    // ---- Execution ----
    /// Failed to build the worker thread pool.
    ThreadPool(String),

}

impl std::error::Error for SearchError {}

impl From<rayon::ThreadPoolBuildError> for SearchError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        SearchError::ThreadPool(err.to_string())
    }
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Problem parameters ----
            SearchError::InvalidGroupCount { groups } => {
                write!(f, "Search Error: Invalid group count k = {groups}. Must be at least 1.")
            }
            SearchError::BudgetExceedsTotal { marked, total } => {
                write!(f, "Search Error: Marked budget m = {marked} exceeds total T = {total}.")
            }

            // ---- Options ----
            SearchError::InvalidTolerance { tol, reason } => {
                write!(f, "Search Error: Invalid tie tolerance {tol}: {reason}")
            }
            SearchError::InvalidWorkers { workers } => {
                write!(f, "Search Error: Invalid worker count {workers}. Must be at least 1.")
            }

            // ---- Allocation tuples ----
            SearchError::AllocationLengthMismatch { expected, found } => write!(
                f,
                "Search Error: Allocation has {found} entries, expected {expected} (one per group)."
            ),
            SearchError::AllocationSumMismatch { expected, found } => {
                write!(f, "Search Error: Allocation sums to {found}, expected m = {expected}.")
            }
            SearchError::InvalidConfiguration { index, reason } => {
                write!(f, "Search Error: Invalid configuration at group {index}: {reason}")
            }

            // ---- Execution ----
            SearchError::ThreadPool(msg) => {
                write!(f, "Search Error: Failed to build worker pool: {msg}")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<SearchError> for PyErr {
    fn from(err: SearchError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `Display` payload embedding for representative variants.
    // - The thread-pool failure message.
    //
    // They intentionally DO NOT cover:
    // - The PyO3 conversion, which needs a Python interpreter.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that parameter errors name the offending values.
    //
    // Given
    // -----
    // - `BudgetExceedsTotal { marked: 31, total: 30 }` and
    //   `InvalidGroupCount { groups: 0 }`.
    //
    // Expect
    // ------
    // - Messages contain "31", "30" and "k = 0" respectively.
    fn display_embeds_parameter_payloads() {
        let msg = SearchError::BudgetExceedsTotal { marked: 31, total: 30 }.to_string();
        assert!(msg.contains("31") && msg.contains("30"), "got: {msg}");

        let msg = SearchError::InvalidGroupCount { groups: 0 }.to_string();
        assert!(msg.contains("k = 0"), "got: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Thread-pool failures keep the underlying message.
    //
    // Expect
    // ------
    // - The rendered message contains the wrapped text.
    fn thread_pool_errors_keep_their_message() {
        let msg = SearchError::ThreadPool("pool exhausted".to_string()).to_string();
        assert!(msg.contains("pool exhausted"), "got: {msg}");
    }
}
