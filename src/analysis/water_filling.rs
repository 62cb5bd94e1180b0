//! analysis::water_filling — closed-form continuous relaxation.
//!
//! Purpose
//! -------
//! Solve `max Σ log b_i` subject to `0 ≤ b_i ≤ x_i` and `Σ b_i = m` with the
//! classic water-filling iteration. This is the continuous counterpart of
//! the discrete allocation search: every unsaturated group receives the same
//! level `λ`, and saturated groups are capped at their capacity.
//!
//! Key behaviors
//! -------------
//! - Maintain the active (unsaturated) index set `S`. Each pass computes
//!   `λ = remaining / |S|`. If every active capacity is `≥ λ`, assign `λ`
//!   and stop; otherwise saturate all active indices with capacity `< λ`,
//!   subtract their capacities from the budget, and repeat.
//! - Terminates in at most `n` passes, since each non-final pass saturates
//!   at least one index.
//! - The result is reported in the caller's index order.
//!
//! Invariants & assumptions
//! ------------------------
//! - Capacities are finite and strictly positive; the budget is finite and
//!   nonnegative.
//! - `m > Σ x_i` is rejected with
//!   [`AnalysisError::BudgetExceedsCapacity`] rather than clamped.
//! - At the fixed point `b_i = min(x_i, λ)` and `Σ b_i = m` up to rounding.
//!
//! Notes
//! -----
//! - By concavity of `log` and the KKT conditions, the fixed point is the
//!   unique maximizer when `m > 0`.
//! - If rounding drains the active set before the stopping test passes
//!   (only possible when `m` equals the total capacity), every index is
//!   saturated and `level` is the last level computed.
use ndarray::Array1;

use crate::analysis::errors::{AnalysisError, AnalysisResult};

/// WaterFill — solution of the water-filling relaxation.
///
/// Fields
/// ------
/// - `allocation`: `Array1<f64>`
///   Optimal `b*`, in the same order as the input capacities.
/// - `level`: `f64`
///   Final water level `λ` shared by every unsaturated group.
/// - `saturated`: `Vec<bool>`
///   `true` where `b*_i = x_i` was forced by a capacity below the level.
/// - `iterations`: `usize`
///   Number of level computations performed.
#[derive(Debug, Clone, PartialEq)]
pub struct WaterFill {
    pub allocation: Array1<f64>,
    pub level: f64,
    pub saturated: Vec<bool>,
    pub iterations: usize,
}

impl WaterFill {
    /// Objective value `Σ log b*_i` (`-∞` when some `b*_i = 0`).
    pub fn log_objective(&self) -> f64 {
        self.allocation.iter().map(|b| b.ln()).sum()
    }

    pub fn total(&self) -> f64 {
        self.allocation.sum()
    }
}

/// water_filling — maximize `Σ log b_i` under capacity and budget constraints.
///
/// Parameters
/// ----------
/// - `capacities`: `&[f64]`
///   Per-group capacities `x_i`; finite and `> 0`.
/// - `budget`: `f64`
///   Total allocation `m`; finite, `≥ 0`, and `≤ Σ x_i`.
///
/// Returns
/// -------
/// `AnalysisResult<WaterFill>`
///   The optimal allocation, water level, saturation flags and pass count.
///
/// Errors
/// ------
/// - [`AnalysisError::EmptyCapacities`] for an empty slice.
/// - [`AnalysisError::InvalidCapacity`] for a non-finite or non-positive capacity.
/// - [`AnalysisError::InvalidBudget`] for a non-finite or negative budget.
/// - [`AnalysisError::BudgetExceedsCapacity`] when `budget > Σ x_i`.
///
/// Examples
/// --------
/// ```rust
/// # use ratio_search::analysis::water_filling::water_filling;
/// let fill = water_filling(&[3.0, 5.0, 8.0, 10.0], 18.0).unwrap();
/// assert_eq!(fill.allocation.to_vec(), vec![3.0, 5.0, 5.0, 5.0]);
/// assert_eq!(fill.level, 5.0);
/// ```
pub fn water_filling(capacities: &[f64], budget: f64) -> AnalysisResult<WaterFill> {
    validate_inputs(capacities, budget)?;

    let n = capacities.len();
    let mut allocation = Array1::<f64>::zeros(n);
    let mut saturated = vec![false; n];
    let mut active: Vec<usize> = (0..n).collect();
    let mut remaining = budget;
    let mut level = 0.0;
    let mut iterations = 0;

    while !active.is_empty() {
        iterations += 1;
        level = remaining / active.len() as f64;
        if active.iter().all(|&i| capacities[i] >= level) {
            for &i in &active {
                allocation[i] = level;
            }
            break;
        }
        active.retain(|&i| {
            if capacities[i] < level {
                allocation[i] = capacities[i];
                saturated[i] = true;
                remaining -= capacities[i];
                false
            } else {
                true
            }
        });
    }

    Ok(WaterFill { allocation, level, saturated, iterations })
}

// ---- Helper methods ----

fn validate_inputs(capacities: &[f64], budget: f64) -> AnalysisResult<()> {
    if capacities.is_empty() {
        return Err(AnalysisError::EmptyCapacities);
    }
    for (index, &value) in capacities.iter().enumerate() {
        if !value.is_finite() || value <= 0.0 {
            return Err(AnalysisError::InvalidCapacity { index, value });
        }
    }
    if !budget.is_finite() || budget < 0.0 {
        return Err(AnalysisError::InvalidBudget { value: budget });
    }
    let capacity: f64 = capacities.iter().sum();
    if budget > capacity {
        return Err(AnalysisError::BudgetExceedsCapacity { budget, capacity });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The reference instance x = [3, 5, 8, 10], m = 18.
    // - Input-order preservation for unsorted capacities.
    // - Fixed-point idempotence.
    // - Budget edge cases (zero budget, budget = total capacity).
    // - Every validation branch.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Check the reference instance against the water-filling invariants.
    //
    // Given
    // -----
    // - x = [3, 5, 8, 10], m = 18.
    //
    // Expect
    // ------
    // - Σb = 18, b_i ≤ x_i, unsaturated b_i equal λ = 5, index 0 saturated,
    //   two passes (λ = 4.5 saturates x = 3, then λ = 5).
    fn reference_instance_satisfies_water_filling_invariants() {
        let x = [3.0, 5.0, 8.0, 10.0];
        let fill = water_filling(&x, 18.0).unwrap();

        assert_relative_eq!(fill.total(), 18.0, epsilon = 1e-12);
        for (b, cap) in fill.allocation.iter().zip(x) {
            assert!(*b <= cap + 1e-12);
        }
        for (i, b) in fill.allocation.iter().enumerate() {
            if !fill.saturated[i] {
                assert_relative_eq!(*b, fill.level, epsilon = 1e-12);
            }
        }
        assert_relative_eq!(fill.level, 5.0, epsilon = 1e-12);
        assert_eq!(fill.saturated, vec![true, false, false, false]);
        assert_eq!(fill.iterations, 2);
    }

    #[test]
    // Purpose
    // -------
    // Results come back in input order, not sorted order.
    //
    // Given
    // -----
    // - x = [10, 3, 8, 5], m = 18.
    //
    // Expect
    // ------
    // - b = [5, 3, 5, 5].
    fn allocation_preserves_input_order() {
        let fill = water_filling(&[10.0, 3.0, 8.0, 5.0], 18.0).unwrap();
        assert_eq!(fill.allocation.to_vec(), vec![5.0, 3.0, 5.0, 5.0]);
    }

    #[test]
    // Purpose
    // -------
    // Feeding the solution back as capacities is a fixed point.
    //
    // Given
    // -----
    // - b* from x = [1.5, 2, 7, 9.5], m = 12; then water_filling(b*, Σb*).
    //
    // Expect
    // ------
    // - The second solve returns b* unchanged.
    fn solution_is_a_fixed_point() {
        let first = water_filling(&[1.5, 2.0, 7.0, 9.5], 12.0).unwrap();
        let caps = first.allocation.to_vec();
        let second = water_filling(&caps, first.total()).unwrap();
        for (a, b) in first.allocation.iter().zip(second.allocation.iter()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-12);
        }
    }

    #[test]
    // Purpose
    // -------
    // Budget extremes behave sensibly.
    //
    // Given
    // -----
    // - m = 0 and m = Σx for x = [1, 3].
    //
    // Expect
    // ------
    // - m = 0 → all zeros, level 0, log objective -∞.
    // - m = 4 → b = x.
    fn handles_zero_and_full_budget() {
        let empty = water_filling(&[1.0, 3.0], 0.0).unwrap();
        assert_eq!(empty.allocation.to_vec(), vec![0.0, 0.0]);
        assert_eq!(empty.level, 0.0);
        assert_eq!(empty.log_objective(), f64::NEG_INFINITY);

        let full = water_filling(&[1.0, 3.0], 4.0).unwrap();
        assert_eq!(full.allocation.to_vec(), vec![1.0, 3.0]);
    }

    #[test]
    // Purpose
    // -------
    // Each malformed input maps to its error variant.
    //
    // Expect
    // ------
    // - Empty, non-positive capacity, negative budget, and over-budget cases
    //   are rejected.
    fn rejects_malformed_inputs() {
        assert_eq!(water_filling(&[], 1.0), Err(AnalysisError::EmptyCapacities));
        assert_eq!(
            water_filling(&[2.0, 0.0], 1.0),
            Err(AnalysisError::InvalidCapacity { index: 1, value: 0.0 })
        );
        assert_eq!(
            water_filling(&[2.0], -1.0),
            Err(AnalysisError::InvalidBudget { value: -1.0 })
        );
        assert_eq!(
            water_filling(&[3.0, 5.0, 8.0, 10.0], 30.0),
            Err(AnalysisError::BudgetExceedsCapacity { budget: 30.0, capacity: 26.0 })
        );
    }
}
