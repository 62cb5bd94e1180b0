//! search::tolerance — the single comparison policy for tie detection.
//!
//! Purpose
//! -------
//! Centralize the floating-point comparison used everywhere a running
//! maximum of `P` is tracked, so that "strictly better" and "tied" mean the
//! same thing in the evaluator, the orchestrator merge, the brute-force
//! validator, and the landscape scan.
//!
//! Key behaviors
//! -------------
//! - [`TieTolerance`] wraps a validated absolute epsilon `ε` (finite, `≥ 0`).
//! - [`TieTolerance::compare`] classifies a candidate against the incumbent:
//!   - [`TieOutcome::Improves`] iff `candidate > incumbent + ε`,
//!   - [`TieOutcome::Ties`] iff `|candidate - incumbent| ≤ ε`,
//!   - [`TieOutcome::Worse`] otherwise.
//!
//! Invariants & assumptions
//! ------------------------
//! - `P` values live in `[0, 1]`, so an absolute epsilon is adequate; no
//!   relative scaling is applied.
//! - The default is [`TieTolerance::DEFAULT_EPS`] (`1e-12`). The presets
//!   [`TieTolerance::ENUMERATION`] (`1e-15`) and [`TieTolerance::COARSE`]
//!   (`1e-6`) exist for callers that want the tighter exact-enumeration
//!   comparison or the loose validation comparison.
//!
//! Conventions
//! -----------
//! - Every search entry point takes a `TieTolerance` explicitly; there are
//!   no hard-coded epsilons elsewhere in the crate.
use crate::search::errors::{SearchError, SearchResult};

/// Classification of a candidate value against the current maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieOutcome {
    /// Strictly better by more than the tolerance; replaces the best set.
    Improves,
    /// Within the tolerance of the incumbent; joins the best set.
    Ties,
    /// Worse by more than the tolerance; discarded.
    Worse,
}

/// Absolute tolerance for tie detection on `P`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TieTolerance {
    eps: f64,
}

impl TieTolerance {
    /// Default absolute epsilon.
    pub const DEFAULT_EPS: f64 = 1e-12;

    /// Tight tolerance for exact-enumeration paths.
    pub const ENUMERATION: TieTolerance = TieTolerance { eps: 1e-15 };

    /// Loose tolerance for reporting near-optimal configurations.
    pub const COARSE: TieTolerance = TieTolerance { eps: 1e-6 };

    /// Build a tolerance from an absolute epsilon.
    ///
    /// # Errors
    /// Returns [`SearchError::InvalidTolerance`] if `eps` is non-finite or
    /// negative.
    pub fn new(eps: f64) -> SearchResult<TieTolerance> {
        if !eps.is_finite() {
            return Err(SearchError::InvalidTolerance {
                tol: eps,
                reason: "Tolerance must be finite.",
            });
        }
        if eps < 0.0 {
            return Err(SearchError::InvalidTolerance {
                tol: eps,
                reason: "Tolerance must be nonnegative.",
            });
        }
        Ok(TieTolerance { eps })
    }

    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Classify `candidate` against `incumbent`.
    #[inline]
    pub fn compare(&self, candidate: f64, incumbent: f64) -> TieOutcome {
        if candidate > incumbent + self.eps {
            TieOutcome::Improves
        } else if (candidate - incumbent).abs() <= self.eps {
            TieOutcome::Ties
        } else {
            TieOutcome::Worse
        }
    }
}

impl Default for TieTolerance {
    fn default() -> Self {
        TieTolerance { eps: Self::DEFAULT_EPS }
    }
}
