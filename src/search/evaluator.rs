//! search::evaluator — best size tuples for one fixed allocation.
//!
//! Purpose
//! -------
//! For a fixed allocation `b` and problem `(k, m, T)`, enumerate every size
//! tuple `x` with `x_i ≥ b_i + 1` and `Σx = T`, and return the locally best
//! `P = Π b_i / x_i` together with every `x` achieving it.
//!
//! Key behaviors
//! -------------
//! - Minimal sizes are `x_min_i = b_i + 1`; the slack `R = T - Σx_min` is
//!   distributed over the groups as a nonnegative composition of `R`
//!   into `k` parts.
//! - `R < 0` means no strict size tuple exists; the result is an empty
//!   [`BestSet`] with maximum `0.0`, not an error.
//! - Ties accumulate through [`BestSet::consider`]; configurations are only
//!   allocated for improving or tying candidates.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every returned configuration satisfies `b_i < x_i`, `Σx = T`, and its
//!   stored `P` is the index-order product of its ratios.
//! - [`evaluate_allocation`] validates `b` against `(k, m)`; the orchestrator
//!   calls the unchecked variant on tuples it generated itself.
use crate::{
    combinatorics::compositions_nonneg,
    search::{
        best_set::BestSet,
        configuration::Configuration,
        errors::{SearchError, SearchResult},
        params::ProblemParams,
        tolerance::TieTolerance,
    },
};

/// Best strict size tuples for the allocation `b`.
///
/// Parameters
/// ----------
/// - `allocation`: `&[usize]`
///   Marked counts per group. Must have length `k` and sum to `m`. Zero
///   entries are allowed; they force `P = 0` for every size tuple.
/// - `params`: `&ProblemParams`
///   Validated `(k, m, T)`.
/// - `tolerance`: [`TieTolerance`]
///   Tie policy for the local maximum.
///
/// Returns
/// -------
/// `SearchResult<BestSet>`
///   The local maximum and all `(b, x)` achieving it; empty with maximum
///   `0.0` when `T < m + k`.
///
/// Errors
/// ------
/// - [`SearchError::AllocationLengthMismatch`] if `allocation.len() != k`.
/// - [`SearchError::AllocationSumMismatch`] if `Σb != m`.
pub fn evaluate_allocation(
    allocation: &[usize], params: &ProblemParams, tolerance: TieTolerance,
) -> SearchResult<BestSet> {
    if allocation.len() != params.groups() {
        return Err(SearchError::AllocationLengthMismatch {
            expected: params.groups(),
            found: allocation.len(),
        });
    }
    let sum: usize = allocation.iter().sum();
    if sum != params.marked() {
        return Err(SearchError::AllocationSumMismatch { expected: params.marked(), found: sum });
    }
    Ok(evaluate_allocation_unchecked(allocation, params, tolerance))
}

pub(crate) fn evaluate_allocation_unchecked(
    allocation: &[usize], params: &ProblemParams, tolerance: TieTolerance,
) -> BestSet {
    let mut local = BestSet::new(tolerance);
    let Some(slack) = params.strict_slack() else {
        return local;
    };
    let k = params.groups();
    let mut sizes = vec![0usize; k];
    for extra in compositions_nonneg(slack, k) {
        let mut p = 1.0;
        for i in 0..k {
            sizes[i] = allocation[i] + 1 + extra[i];
            p *= allocation[i] as f64 / sizes[i] as f64;
        }
        local.consider(p, || Configuration::from_parts(allocation.to_vec(), sizes.clone()));
    }
    local
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Local optimum and tie set for small hand-checked allocations.
    // - Infeasible slack (R < 0) and the zero-slack single-tuple case.
    // - Input validation of the allocation tuple.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // A symmetric allocation ties across mirrored size tuples.
    //
    // Given
    // -----
    // - b = (1, 1), (k, m, T) = (2, 2, 10): x ranges over (2, 8) … (8, 2).
    //
    // Expect
    // ------
    // - Max P = (1/2)(1/8) = 0.0625 achieved by x = (2, 8) and (8, 2).
    fn symmetric_allocation_collects_mirrored_ties() {
        let params = ProblemParams::new(2, 2, 10).unwrap();
        let set = evaluate_allocation(&[1, 1], &params, TieTolerance::default()).unwrap();

        assert_relative_eq!(set.best_p(), 0.0625, epsilon = 1e-15);
        let sizes: Vec<&[usize]> = set.configs().iter().map(|c| c.sizes()).collect();
        assert_eq!(sizes, vec![&[2, 8][..], &[8, 2][..]]);
    }

    #[test]
    // Purpose
    // -------
    // Zero slack leaves exactly one size tuple.
    //
    // Given
    // -----
    // - b = (1, 1, 1), (k, m, T) = (3, 3, 6).
    //
    // Expect
    // ------
    // - Single configuration x = (2, 2, 2) with P = 1/8.
    fn zero_slack_yields_single_configuration() {
        let params = ProblemParams::new(3, 3, 6).unwrap();
        let set = evaluate_allocation(&[1, 1, 1], &params, TieTolerance::default()).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.configs()[0].sizes(), &[2, 2, 2]);
        assert_relative_eq!(set.best_p(), 0.125, epsilon = 1e-15);
    }

    #[test]
    // Purpose
    // -------
    // Negative slack is infeasible, not an error.
    //
    // Given
    // -----
    // - b = (1, 1), (k, m, T) = (2, 2, 3): needs Σx ≥ 4 > 3.
    //
    // Expect
    // ------
    // - Ok with best 0.0 and an empty set.
    fn negative_slack_reports_empty_best_set() {
        let params = ProblemParams::new(2, 2, 3).unwrap();
        let set = evaluate_allocation(&[1, 1], &params, TieTolerance::default()).unwrap();
        assert_eq!(set.best_p(), 0.0);
        assert!(set.is_empty());
    }

    #[test]
    // Purpose
    // -------
    // Every returned configuration respects the strict size constraints.
    //
    // Given
    // -----
    // - b = (2, 3, 4), (k, m, T) = (3, 9, 30).
    //
    // Expect
    // ------
    // - Each config has b_i < x_i, Σx = 30, and a P that matches a
    //   recomputation.
    fn returned_configurations_are_strictly_feasible() {
        let params = ProblemParams::new(3, 9, 30).unwrap();
        let tol = TieTolerance::default();
        let set = evaluate_allocation(&[2, 3, 4], &params, tol).unwrap();
        assert!(!set.is_empty());
        for c in set.configs() {
            assert!(c.allocation().iter().zip(c.sizes()).all(|(b, x)| b < x));
            assert!(c.is_consistent_with(&params, tol));
            assert_relative_eq!(c.p(), set.best_p(), epsilon = tol.eps());
        }
    }

    #[test]
    // Purpose
    // -------
    // Reject allocations that do not match (k, m).
    //
    // Expect
    // ------
    // - Wrong length and wrong sum map to their dedicated variants.
    fn evaluate_allocation_validates_tuple() {
        let params = ProblemParams::new(2, 4, 10).unwrap();
        let tol = TieTolerance::default();
        assert_eq!(
            evaluate_allocation(&[1, 1, 2], &params, tol),
            Err(SearchError::AllocationLengthMismatch { expected: 2, found: 3 })
        );
        assert_eq!(
            evaluate_allocation(&[1, 2], &params, tol),
            Err(SearchError::AllocationSumMismatch { expected: 4, found: 3 })
        );
    }
}
