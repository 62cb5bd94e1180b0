//! analysis — continuous relaxations and diagnostics around the discrete search.
//!
//! Purpose
//! -------
//! Provide the analyses that are read alongside the discrete optimum: the
//! water-filling solution of the continuous relaxation, the projected
//! Hessian at the symmetric stationary point, the continuous-vs-discrete
//! bounds table, and the full landscape of `P` over relaxed configurations.
//!
//! Key behaviors
//! -------------
//! - [`water_filling`] solves `max Σ log b_i` s.t. `b_i ≤ x_i`, `Σ b_i = m`.
//! - [`projected_hessian`] reports the sorted eigenvalues of `Qᵀ H Q` and a
//!   [`Curvature`] classification.
//! - [`compare_bounds`] pairs `(m/T)^k` and the bound factor with the
//!   brute-force discrete optimum.
//! - [`enumerate_landscape`] + [`LandscapeSummary`] describe the
//!   distribution of `P`, its relation to ratio spread, and interior vs
//!   boundary counts.
//!
//! Invariants & assumptions
//! ------------------------
//! - None of these routines feed back into the discrete search; they are
//!   read-only diagnostics.
//! - Failures are reported via [`AnalysisError`]; problem-shape errors from
//!   [`crate::search`] are wrapped rather than duplicated.
//!
//! Conventions
//! -----------
//! - Vectors and matrices use `ndarray`; the eigendecomposition bridges to
//!   `nalgebra`. No I/O and no logging.
//!
//! Testing notes
//! -------------
//! - Each submodule carries unit tests against closed-form or hand-counted
//!   values; `tests/integration_search_pipeline.rs` compares the relaxation
//!   with the discrete optimum end to end.

pub mod bounds;
pub mod errors;
pub mod hessian;
pub mod landscape;
pub mod water_filling;

// ---- Re-exports (primary surface) -----------------------------------------

pub use self::bounds::{
    BoundComparison, TABLE_HEADER, bound_factor, compare_bounds, continuous_relaxation_value,
};
pub use self::errors::{AnalysisError, AnalysisResult};
pub use self::hessian::{Curvature, ProjectedHessian, projected_hessian};
pub use self::landscape::{
    LandscapeRecord, LandscapeSummary, balance_correlation, enumerate_landscape, landscape_best,
    top_configurations,
};
pub use self::water_filling::{WaterFill, water_filling};
