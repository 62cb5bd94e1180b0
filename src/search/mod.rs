//! search — exhaustive best-configuration search for `P = Π b_i / x_i`.
//!
//! Purpose
//! -------
//! Given `k` groups, `m` marked items and `T` total items, find the
//! allocations `b` (positive, `Σb = m`) and sizes `x` (`x_i > b_i`,
//! `Σx = T`) that maximize the product of ratios, reporting every tied
//! optimum.
//!
//! Key behaviors
//! -------------
//! - Validate problem shapes with [`ProblemParams`] and execution settings
//!   with [`SearchOptions`] before any enumeration runs.
//! - Evaluate one allocation with [`evaluate_allocation`] (enumerating the
//!   slack compositions for `x`).
//! - Orchestrate the global search with [`best_p_for_params`], sequentially
//!   or across a `rayon` pool, merging local results with the tie rule.
//! - Cross-check small shapes with [`brute_force_best`].
//! - Track ties in [`BestSet`] using a single [`TieTolerance`] policy.
//!
//! Invariants & assumptions
//! ------------------------
//! - Infeasible shapes produce an empty [`BestSet`] with maximum `0.0`;
//!   only malformed inputs produce [`SearchError`].
//! - Every reported configuration satisfies `0 < b_i < x_i`, `Σb = m`,
//!   `Σx = T`, and its `P` matches a recomputation within the tolerance.
//! - Search results do not depend on generator order or worker count.
//!
//! Conventions
//! -----------
//! - This module performs no I/O and no logging. Progress reporting belongs
//!   to callers such as [`crate::sweep`].
//! - Sizes above [`RECOMMENDED_MAX_TOTAL`] / [`RECOMMENDED_MAX_GROUPS`] are
//!   accepted but may take minutes to hours; the limits are operational
//!   guidance, not enforced invariants.
//!
//! Testing notes
//! -------------
//! - Unit tests per submodule cover tie semantics, infeasibility, input
//!   validation and known optima.
//! - `tests/integration_search_pipeline.rs` cross-checks the orchestrator
//!   against the brute-force path and sequential against parallel runs.

pub mod best_set;
pub mod brute_force;
pub mod configuration;
pub mod errors;
pub mod evaluator;
pub mod options;
pub mod orchestrator;
pub mod params;
pub mod tolerance;

/// Largest total `T` recommended for interactive use.
pub const RECOMMENDED_MAX_TOTAL: usize = 40;

/// Largest group count `k` recommended for interactive use.
pub const RECOMMENDED_MAX_GROUPS: usize = 6;

// ---- Re-exports (primary surface) -----------------------------------------

pub use self::best_set::BestSet;
pub use self::brute_force::brute_force_best;
pub use self::configuration::{Configuration, success_probability};
pub use self::errors::{SearchError, SearchResult};
pub use self::evaluator::evaluate_allocation;
pub use self::options::SearchOptions;
pub use self::orchestrator::{best_p_for_params, search_workload};
pub use self::params::ProblemParams;
pub use self::tolerance::{TieOutcome, TieTolerance};

/// Whether `params` lies inside the recommended interactive limits.
pub fn within_recommended_limits(params: &ProblemParams) -> bool {
    params.total() <= RECOMMENDED_MAX_TOTAL && params.groups() <= RECOMMENDED_MAX_GROUPS
}
