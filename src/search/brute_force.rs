//! search::brute_force — independent cross-check of the strict optimum.
//!
//! Enumerates every positive partition `b` of `m` and every positive
//! partition `x` of `T` (both into `k` parts) and keeps pairs with
//! `0 < b_i < x_i`. This is quadratic in the partition counts and only
//! meant for validating [`best_p_for_params`](crate::search::best_p_for_params)
//! on small shapes; it shares no code with the evaluator beyond the
//! generators and the [`BestSet`] tie rule.
use crate::{
    combinatorics::partitions_positive,
    search::{
        best_set::BestSet,
        configuration::{Configuration, success_probability},
        params::ProblemParams,
        tolerance::TieTolerance,
    },
};

/// Exhaustive strict optimum over all `(b, x)` partition pairs.
pub fn brute_force_best(params: &ProblemParams, tolerance: TieTolerance) -> BestSet {
    let k = params.groups();
    let sizes: Vec<Vec<usize>> = partitions_positive(params.total(), k).collect();
    let mut best = BestSet::new(tolerance);
    for b in partitions_positive(params.marked(), k) {
        for x in &sizes {
            if b.iter().zip(x).any(|(bi, xi)| bi >= xi) {
                continue;
            }
            let p = success_probability(&b, x);
            best.consider(p, || Configuration::from_parts(b.clone(), x.clone()));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    // Purpose
    // -------
    // Brute force finds the documented optimum for (3, 15, 30).
    //
    // Given
    // -----
    // - The default tolerance.
    //
    // Expect
    // ------
    // - P* = (3/4)(3/4)(9/22) = 81/352 with three permutations.
    fn brute_force_finds_known_optimum() {
        let params = ProblemParams::new(3, 15, 30).unwrap();
        let best = brute_force_best(&params, TieTolerance::default());
        assert_relative_eq!(best.best_p(), 81.0 / 352.0, epsilon = 1e-12);
        assert_eq!(best.len(), 3);
    }

    #[test]
    // Purpose
    // -------
    // No strict pair exists when m = T.
    //
    // Expect
    // ------
    // - Empty set at zero.
    fn brute_force_reports_empty_when_budget_fills_total() {
        let params = ProblemParams::new(2, 6, 6).unwrap();
        let best = brute_force_best(&params, TieTolerance::default());
        assert!(best.is_empty());
        assert_eq!(best.best_p(), 0.0);
    }
}
