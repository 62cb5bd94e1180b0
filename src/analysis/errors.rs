//! Unified error handling for continuous-relaxation analyses.
//!
//! This module defines `AnalysisError`, the error type used by the
//! water-filling solver, the projected-Hessian diagnostic, the bounds table
//! and the landscape scan. Problem shapes arrive already validated as
//! `ProblemParams`, so only analysis-specific failures appear here. An alias
//! `AnalysisResult<T>` standardizes the return type.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Error type for analysis routines.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    // ---- Water-filling ----
    /// No capacities were supplied.
    EmptyCapacities,

    /// Capacities must be finite and strictly positive.
    InvalidCapacity {
        index: usize,
        value: f64,
    },

    /// Budget must be finite and nonnegative.
    InvalidBudget {
        value: f64,
    },

    /// Budget exceeds the combined capacity; no allocation can satisfy `Σb = m`.
    BudgetExceedsCapacity {
        budget: f64,
        capacity: f64,
    },

    // ---- Hessian / bounds ----
    /// The symmetric stationary point needs `m ≥ 1` and `T ≥ 1`.
    DegenerateStationaryPoint {
        marked: usize,
        total: usize,
    },
}

impl std::error::Error for AnalysisError {}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Water-filling ----
            AnalysisError::EmptyCapacities => {
                write!(f, "Analysis Error: At least one capacity is required.")
            }
            AnalysisError::InvalidCapacity { index, value } => write!(
                f,
                "Analysis Error: Capacity {value} at index {index} must be finite and positive."
            ),
            AnalysisError::InvalidBudget { value } => {
                write!(f, "Analysis Error: Budget {value} must be finite and nonnegative.")
            }
            AnalysisError::BudgetExceedsCapacity { budget, capacity } => write!(
                f,
                "Analysis Error: Budget {budget} exceeds total capacity {capacity}; water-filling is infeasible."
            ),

            // ---- Hessian / bounds ----
            AnalysisError::DegenerateStationaryPoint { marked, total } => write!(
                f,
                "Analysis Error: Stationary point undefined for m = {marked}, T = {total}; both must be at least 1."
            ),
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<AnalysisError> for PyErr {
    fn from(err: AnalysisError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
