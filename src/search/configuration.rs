//! search::configuration — the `(b, x, P)` value object.
//!
//! Purpose
//! -------
//! Represent one candidate configuration: an allocation tuple `b` of marked
//! items per group, a size tuple `x` of total items per group, and the
//! success value `P = Π b_i / x_i`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `b.len() == x.len()`, `x_i ≥ 1`, and `0 ≤ b_i ≤ x_i` for every `i`.
//!   [`Configuration::new`] enforces this; search code builds
//!   configurations only from tuples that satisfy it by construction.
//! - `P` is computed once with [`success_probability`], multiplying the
//!   ratios in index order, and never mutated afterwards.
use crate::search::{
    errors::{SearchError, SearchResult},
    params::ProblemParams,
    tolerance::TieTolerance,
};

/// Product of per-group ratios `Π b_i / x_i`, multiplied in index order.
///
/// Callers must guarantee `b.len() == x.len()` and `x_i > 0`.
#[inline]
pub fn success_probability(b: &[usize], x: &[usize]) -> f64 {
    b.iter().zip(x).fold(1.0, |acc, (&bi, &xi)| acc * (bi as f64 / xi as f64))
}

/// A feasible configuration `(b, x, P)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    allocation: Vec<usize>,
    sizes: Vec<usize>,
    p: f64,
}

impl Configuration {
    /// Validate `(b, x)` and compute `P`.
    ///
    /// # Errors
    /// - [`SearchError::AllocationLengthMismatch`] if the tuples differ in length.
    /// - [`SearchError::InvalidConfiguration`] if some `x_i == 0` or `b_i > x_i`.
    pub fn new(allocation: Vec<usize>, sizes: Vec<usize>) -> SearchResult<Configuration> {
        if allocation.len() != sizes.len() {
            return Err(SearchError::AllocationLengthMismatch {
                expected: sizes.len(),
                found: allocation.len(),
            });
        }
        for (index, (&bi, &xi)) in allocation.iter().zip(&sizes).enumerate() {
            if xi == 0 {
                return Err(SearchError::InvalidConfiguration {
                    index,
                    reason: "Group size must be positive.",
                });
            }
            if bi > xi {
                return Err(SearchError::InvalidConfiguration {
                    index,
                    reason: "Marked count cannot exceed group size.",
                });
            }
        }
        Ok(Configuration::from_parts(allocation, sizes))
    }

    pub(crate) fn from_parts(allocation: Vec<usize>, sizes: Vec<usize>) -> Configuration {
        let p = success_probability(&allocation, &sizes);
        Configuration { allocation, sizes, p }
    }

    pub fn allocation(&self) -> &[usize] {
        &self.allocation
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn p(&self) -> f64 {
        self.p
    }

    /// Per-group ratios `b_i / x_i`.
    pub fn ratios(&self) -> Vec<f64> {
        self.allocation.iter().zip(&self.sizes).map(|(&b, &x)| b as f64 / x as f64).collect()
    }

    /// Whether this configuration is a valid answer for `params`: tuple
    /// lengths equal `k`, `Σb = m`, `Σx = T`, `b_i ≤ x_i`, and the stored `P`
    /// matches a recomputation within `tol`.
    pub fn is_consistent_with(&self, params: &ProblemParams, tol: TieTolerance) -> bool {
        let k = params.groups();
        self.allocation.len() == k
            && self.sizes.len() == k
            && self.allocation.iter().sum::<usize>() == params.marked()
            && self.sizes.iter().sum::<usize>() == params.total()
            && self.allocation.iter().zip(&self.sizes).all(|(&b, &x)| x >= 1 && b <= x)
            && (success_probability(&self.allocation, &self.sizes) - self.p).abs() <= tol.eps()
    }

    pub fn into_parts(self) -> (Vec<usize>, Vec<usize>, f64) {
        (self.allocation, self.sizes, self.p)
    }
}
