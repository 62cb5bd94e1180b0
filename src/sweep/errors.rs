//! Error types for the parametric sweep driver.
//!
//! `SweepError` covers grid and option parsing failures and wraps
//! [`SearchError`] for failures raised while solving a cell. Infeasible
//! cells are not errors; they are recorded as `NaN` in the heat matrix.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

use crate::search::errors::SearchError;

pub type SweepResult<T> = Result<T, SweepError>;

#[derive(Debug, Clone, PartialEq)]
pub enum SweepError {
    // ---- Grid parsing ----
    /// A ratio specification could not be parsed.
    InvalidRatioSpec {
        spec: String,
        reason: &'static str,
    },

    /// Ratios must be finite and lie in `[0, 1]`.
    RatioOutOfRange {
        value: f64,
    },

    /// The ratio grid has no points.
    EmptyGrid,

    /// A group-count list could not be parsed.
    InvalidGroupList {
        spec: String,
        reason: &'static str,
    },

    /// No group counts were supplied.
    NoGroupCounts,

    // ---- Options ----
    /// The total `T` must be at least 1.
    InvalidTotal {
        total: usize,
    },

    /// Progress must be reported every `n ≥ 1` cells.
    InvalidProgressInterval {
        every: usize,
    },

    // ---- Search passthrough ----
    Search(SearchError),
}

impl std::error::Error for SweepError {}

impl From<SearchError> for SweepError {
    fn from(err: SearchError) -> Self {
        SweepError::Search(err)
    }
}

impl std::fmt::Display for SweepError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Grid parsing ----
            SweepError::InvalidRatioSpec { spec, reason } => {
                write!(f, "Sweep Error: Invalid ratio specification '{spec}': {reason}")
            }
            SweepError::RatioOutOfRange { value } => {
                write!(f, "Sweep Error: Ratio {value} must be finite and lie in [0, 1].")
            }
            SweepError::EmptyGrid => write!(f, "Sweep Error: Ratio grid has no points."),
            SweepError::InvalidGroupList { spec, reason } => {
                write!(f, "Sweep Error: Invalid group-count list '{spec}': {reason}")
            }
            SweepError::NoGroupCounts => write!(f, "Sweep Error: No group counts supplied."),

            // ---- Options ----
            SweepError::InvalidTotal { total } => {
                write!(f, "Sweep Error: Invalid total T = {total}. Must be at least 1.")
            }
            SweepError::InvalidProgressInterval { every } => {
                write!(f, "Sweep Error: Invalid progress interval {every}. Must be at least 1.")
            }

            // ---- Search passthrough ----
            SweepError::Search(err) => write!(f, "Sweep Error: {err}"),
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<SweepError> for PyErr {
    fn from(err: SweepError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Parsing errors quote the offending input.
    //
    // Expect
    // ------
    // - The message contains the input text and the reason.
    fn display_quotes_spec_and_reason() {
        let err = SweepError::InvalidRatioSpec { spec: "0.2:x:3".into(), reason: "bad stop" };
        let msg = err.to_string();
        assert!(msg.contains("0.2:x:3") && msg.contains("bad stop"), "got: {msg}");
    }
}
