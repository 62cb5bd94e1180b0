//! search::orchestrator — global best search over all positive allocations.
//!
//! Purpose
//! -------
//! Find the maximum of `P = Π b_i / x_i` over every strict configuration of
//! `(k, m, T)` by evaluating each positive partition `b` of `m` into `k`
//! parts with the per-allocation evaluator and merging the local results.
//!
//! Key behaviors
//! -------------
//! - Sequential mode (`workers == 1`) streams partitions lazily from the
//!   generator and folds each local result into the global [`BestSet`].
//! - Parallel mode (`workers > 1`) builds a dedicated `rayon` pool with
//!   `workers` threads, evaluates partitions with `par_iter`, collects the
//!   local results in partition order, and folds them on the calling
//!   thread.
//! - Both modes merge in the same order with the same rule, so they return
//!   identical maxima and identical best-set sequences.
//!
//! Invariants & assumptions
//! ------------------------
//! - Workers share no mutable state; each evaluation owns its local
//!   accumulator and returns it by value.
//! - There is no cancellation: a search runs to completion once started.
//! - Cost grows with `C(m-1, k-1) · C(T-m-1, k-1)`; see
//!   [`RECOMMENDED_MAX_TOTAL`](crate::search::RECOMMENDED_MAX_TOTAL) and
//!   [`RECOMMENDED_MAX_GROUPS`](crate::search::RECOMMENDED_MAX_GROUPS).
//!
//! Testing notes
//! -------------
//! - Unit tests compare against known optima and check sequential/parallel
//!   agreement. The brute-force cross-check lives in `tests/`.
use rayon::prelude::*;

use crate::{
    combinatorics::{count_compositions, count_positive_partitions, partitions_positive},
    search::{
        best_set::BestSet,
        errors::SearchResult,
        evaluator::evaluate_allocation_unchecked,
        options::SearchOptions,
        params::ProblemParams,
    },
};

/// Global best `P` and every strict configuration achieving it.
///
/// Parameters
/// ----------
/// - `params`: `&ProblemParams`
///   Validated `(k, m, T)`.
/// - `opts`: `&SearchOptions`
///   Tie tolerance and worker count.
///
/// Returns
/// -------
/// `SearchResult<BestSet>`
///   The global maximum and its configurations. Empty with maximum `0.0`
///   when no strict configuration exists (`m < k` or `m + k > T`).
///
/// Errors
/// ------
/// - [`SearchError::ThreadPool`](crate::search::SearchError::ThreadPool)
///   if the worker pool cannot be built.
///
/// Examples
/// --------
/// ```rust
/// # use ratio_search::search::{ProblemParams, SearchOptions, best_p_for_params};
/// let params = ProblemParams::new(2, 5, 10).unwrap();
/// let best = best_p_for_params(&params, &SearchOptions::default()).unwrap();
/// // b = (2, 3), x = (3, 7) and its mirror: (2/3)(3/7) = 2/7.
/// assert!((best.best_p() - 2.0 / 7.0).abs() < 1e-12);
/// assert_eq!(best.len(), 2);
/// ```
pub fn best_p_for_params(params: &ProblemParams, opts: &SearchOptions) -> SearchResult<BestSet> {
    let tolerance = opts.tolerance;
    let mut global = BestSet::new(tolerance);

    if !opts.is_parallel() {
        for allocation in partitions_positive(params.marked(), params.groups()) {
            global.merge(evaluate_allocation_unchecked(&allocation, params, tolerance));
        }
        return Ok(global);
    }

    let allocations: Vec<Vec<usize>> =
        partitions_positive(params.marked(), params.groups()).collect();
    let pool = rayon::ThreadPoolBuilder::new().num_threads(opts.workers).build()?;
    let locals: Vec<BestSet> = pool.install(|| {
        allocations
            .par_iter()
            .map(|allocation| evaluate_allocation_unchecked(allocation, params, tolerance))
            .collect()
    });
    for local in locals {
        global.merge(local);
    }
    Ok(global)
}

/// Number of `(b, x)` pairs the strict search will evaluate for `params`.
///
/// Equals `C(m-1, k-1) · C(R+k-1, k-1)` with `R = T - m - k`, saturating
/// at `usize::MAX`; `0` when the problem is infeasible.
pub fn search_workload(params: &ProblemParams) -> usize {
    let Some(slack) = params.strict_slack() else {
        return 0;
    };
    count_positive_partitions(params.marked(), params.groups())
        .saturating_mul(count_compositions(slack, params.groups()))
}
