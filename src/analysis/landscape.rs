//! analysis::landscape — the full distribution of `P` over relaxed configurations.
//!
//! Purpose
//! -------
//! Enumerate every configuration with `x_i ≥ 1`, `Σx = T`, `0 ≤ b_i ≤ x_i`
//! and `Σb = m` (boundary configurations with `b_i = 0` or `b_i = x_i`
//! included), and summarize how `P` relates to group balance and to the
//! boundary of the feasible set.
//!
//! Key behaviors
//! -------------
//! - [`enumerate_landscape`] yields one [`LandscapeRecord`] per configuration
//!   with its ratios' mean and population standard deviation and three
//!   boundary flags.
//! - [`LandscapeSummary::from_records`] reports count, min, max, mean and
//!   median of `P`, and interior vs boundary counts.
//! - [`balance_correlation`] is the sample correlation between ratio spread
//!   and `P`; it is negative on every shape we have examined, reflecting
//!   that balanced ratios maximize a product with a fixed budget.
//! - [`top_configurations`] and [`landscape_best`] extract the head of the
//!   distribution.
//!
//! Invariants & assumptions
//! ------------------------
//! - Enumeration cost is `C(T-1, k-1) · C(m+k-1, k-1)` before filtering;
//!   keep `k = 3` shapes at `T ≤ 30` for interactive use.
//! - Statistics come from `statrs`; empty inputs produce `None` rather than
//!   NaN-filled summaries.
use statrs::statistics::{Data, Median, Statistics};

use crate::{
    combinatorics::{compositions_nonneg, partitions_positive},
    search::{
        best_set::BestSet, configuration::Configuration, params::ProblemParams,
        tolerance::TieTolerance,
    },
};

/// One relaxed configuration and its balance / boundary descriptors.
#[derive(Debug, Clone, PartialEq)]
pub struct LandscapeRecord {
    pub config: Configuration,
    /// Mean of the ratios `b_i / x_i`.
    pub ratio_mean: f64,
    /// Population standard deviation of the ratios.
    pub ratio_std: f64,
    /// `0 < b_i < x_i` for every group.
    pub interior: bool,
    /// Some group has `b_i = x_i`.
    pub any_saturated: bool,
    /// Some group has `b_i = 0`.
    pub any_empty: bool,
}

impl LandscapeRecord {
    fn from_config(config: Configuration) -> LandscapeRecord {
        let ratios = config.ratios();
        let ratio_mean = ratios.iter().mean();
        let ratio_std = ratios.iter().population_std_dev();
        let pairs = || config.allocation().iter().zip(config.sizes());
        let interior = pairs().all(|(&b, &x)| 0 < b && b < x);
        let any_saturated = pairs().any(|(&b, &x)| b == x);
        let any_empty = pairs().any(|(&b, _)| b == 0);
        LandscapeRecord { config, ratio_mean, ratio_std, interior, any_saturated, any_empty }
    }

    pub fn p(&self) -> f64 {
        self.config.p()
    }
}

/// Every relaxed configuration of `params`, sizes outermost.
pub fn enumerate_landscape(params: &ProblemParams) -> Vec<LandscapeRecord> {
    let k = params.groups();
    let mut records = Vec::new();
    for x in partitions_positive(params.total(), k) {
        for b in compositions_nonneg(params.marked(), k) {
            if b.iter().zip(&x).all(|(bi, xi)| bi <= xi) {
                let config = Configuration::from_parts(b, x.clone());
                records.push(LandscapeRecord::from_config(config));
            }
        }
    }
    records
}

/// Distribution summary of `P` over a landscape.
#[derive(Debug, Clone, PartialEq)]
pub struct LandscapeSummary {
    pub total_configurations: usize,
    pub p_min: f64,
    pub p_max: f64,
    pub p_mean: f64,
    pub p_median: f64,
    pub interior_count: usize,
    pub boundary_count: usize,
}

impl LandscapeSummary {
    /// Summarize `records`, or `None` when there are none.
    pub fn from_records(records: &[LandscapeRecord]) -> Option<LandscapeSummary> {
        if records.is_empty() {
            return None;
        }
        let ps: Vec<f64> = records.iter().map(LandscapeRecord::p).collect();
        let interior_count = records.iter().filter(|r| r.interior).count();
        Some(LandscapeSummary {
            total_configurations: records.len(),
            p_min: Statistics::min(ps.iter()),
            p_max: Statistics::max(ps.iter()),
            p_mean: ps.iter().mean(),
            p_median: Data::new(ps).median(),
            interior_count,
            boundary_count: records.len() - interior_count,
        })
    }
}

/// Sample correlation between `ratio_std` and `P`, or `None` with fewer
/// than two records or a constant column.
pub fn balance_correlation(records: &[LandscapeRecord]) -> Option<f64> {
    if records.len() < 2 {
        return None;
    }
    let spreads: Vec<f64> = records.iter().map(|r| r.ratio_std).collect();
    let ps: Vec<f64> = records.iter().map(LandscapeRecord::p).collect();
    let denom = spreads.iter().std_dev() * ps.iter().std_dev();
    if denom == 0.0 || !denom.is_finite() {
        return None;
    }
    Some(spreads.iter().covariance(ps.iter()) / denom)
}

/// The `n` highest-`P` records; ties keep enumeration order.
pub fn top_configurations(records: &[LandscapeRecord], n: usize) -> Vec<&LandscapeRecord> {
    let mut sorted: Vec<&LandscapeRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.p().total_cmp(&a.p()));
    sorted.truncate(n);
    sorted
}

/// Best set over a landscape under `tolerance`.
pub fn landscape_best(records: &[LandscapeRecord], tolerance: TieTolerance) -> BestSet {
    let mut best = BestSet::new(tolerance);
    for record in records {
        best.consider(record.p(), || record.config.clone());
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The full hand-enumerable landscape of (2, 2, 4).
    // - Summary statistics, boundary counts and correlation sign on (3, 6, 9).
    // - Top-n ordering and tolerance-based best sets.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Enumerate a landscape small enough to list by hand.
    //
    // Given
    // -----
    // - (k, m, T) = (2, 2, 4): x ∈ {(1,3), (2,2), (3,1)}.
    //
    // Expect
    // ------
    // - 7 configurations, P ∈ {0 ×4, 1/4, 1/3 ×2}, one interior
    //   configuration (b = (1,1), x = (2,2)), median 0, mean 11/84.
    fn small_landscape_matches_hand_enumeration() {
        let params = ProblemParams::new(2, 2, 4).unwrap();
        let records = enumerate_landscape(&params);
        let summary = LandscapeSummary::from_records(&records).unwrap();

        assert_eq!(summary.total_configurations, 7);
        assert_eq!(summary.interior_count, 1);
        assert_eq!(summary.boundary_count, 6);
        assert_eq!(summary.p_min, 0.0);
        assert_relative_eq!(summary.p_max, 1.0 / 3.0, epsilon = 1e-15);
        assert_relative_eq!(summary.p_mean, 11.0 / 84.0, epsilon = 1e-12);
        assert_eq!(summary.p_median, 0.0);

        let interior: Vec<&LandscapeRecord> = records.iter().filter(|r| r.interior).collect();
        assert_eq!(interior[0].config.sizes(), &[2, 2]);
        assert_eq!(interior[0].ratio_std, 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Boundary flags are set per record.
    //
    // Given
    // -----
    // - The (2, 2, 4) landscape.
    //
    // Expect
    // ------
    // - Every non-interior record has a saturated or empty group.
    fn boundary_records_carry_flags() {
        let records = enumerate_landscape(&ProblemParams::new(2, 2, 4).unwrap());
        for r in &records {
            assert_eq!(r.interior, !(r.any_saturated || r.any_empty), "{:?}", r.config);
        }
    }

    #[test]
    // Purpose
    // -------
    // Aggregate statistics on a mid-sized shape.
    //
    // Given
    // -----
    // - (k, m, T) = (3, 6, 9).
    //
    // Expect
    // ------
    // - 199 configurations, 10 interior, max P = 4/7, median 1/6,
    //   negative balance correlation (≈ −0.819).
    fn mid_sized_landscape_statistics() {
        let records = enumerate_landscape(&ProblemParams::new(3, 6, 9).unwrap());
        let summary = LandscapeSummary::from_records(&records).unwrap();

        assert_eq!(summary.total_configurations, 199);
        assert_eq!(summary.interior_count, 10);
        assert_relative_eq!(summary.p_max, 4.0 / 7.0, epsilon = 1e-12);
        assert_relative_eq!(summary.p_median, 1.0 / 6.0, epsilon = 1e-12);

        let corr = balance_correlation(&records).unwrap();
        assert_relative_eq!(corr, -0.819_189_304_975_5, epsilon = 1e-9);
    }

    #[test]
    // Purpose
    // -------
    // Top-n and best-set extraction agree on the head of the distribution.
    //
    // Given
    // -----
    // - The (3, 6, 9) landscape and a coarse tolerance.
    //
    // Expect
    // ------
    // - Three tied maxima (permutations of b = (1,1,4), x = (1,1,7));
    //   the first three top records are exactly those.
    fn top_configurations_and_best_set_agree() {
        let records = enumerate_landscape(&ProblemParams::new(3, 6, 9).unwrap());
        let best = landscape_best(&records, TieTolerance::COARSE);
        assert_eq!(best.len(), 3);

        let top = top_configurations(&records, 3);
        assert_eq!(top.len(), 3);
        for (record, config) in top.iter().zip(best.configs()) {
            assert_eq!(&record.config, config);
        }
    }

    #[test]
    // Purpose
    // -------
    // Empty inputs yield no summary.
    fn empty_records_have_no_summary() {
        assert!(LandscapeSummary::from_records(&[]).is_none());
        assert!(balance_correlation(&[]).is_none());
    }
}
