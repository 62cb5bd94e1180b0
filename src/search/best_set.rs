//! search::best_set — running maximum of `P` with tolerance-based ties.
//!
//! Purpose
//! -------
//! Provide the accumulator object shared by every search path: it holds the
//! current maximum `P` and every configuration achieving it (within the
//! tie tolerance), and applies [`TieTolerance::compare`] as its single
//! update rule.
//!
//! Key behaviors
//! -------------
//! - [`BestSet::consider`] offers a candidate value with a lazily built
//!   configuration; the configuration is only materialized when it improves
//!   or ties, which keeps inner enumeration loops allocation-free.
//! - [`BestSet::merge`] folds another accumulator in with the same rule:
//!   strict improvement replaces, a tie extends, anything else is dropped.
//!
//! Invariants & assumptions
//! ------------------------
//! - A fresh set has maximum `0.0` and no members. An infeasible search
//!   therefore reports `(0.0, [])`.
//! - The recorded maximum never decreases.
//! - Every member was within `ε` of the maximum when it was admitted. The
//!   maximum itself may later creep upward through ties by at most `ε` per
//!   step; with `ε ≤ 1e-12` and `P ≤ 1` this drift is far below any
//!   meaningful difference between distinct rational `P` values.
use crate::search::{
    configuration::Configuration,
    tolerance::{TieOutcome, TieTolerance},
};

/// Current maximum `P` and the configurations achieving it.
#[derive(Debug, Clone, PartialEq)]
pub struct BestSet {
    best: f64,
    configs: Vec<Configuration>,
    tolerance: TieTolerance,
}

impl BestSet {
    /// An empty accumulator with maximum `0.0`.
    pub fn new(tolerance: TieTolerance) -> BestSet {
        BestSet { best: 0.0, configs: Vec::new(), tolerance }
    }

    /// Offer a candidate value `p`; `make` builds its configuration if it is kept.
    #[inline]
    pub fn consider<F>(&mut self, p: f64, make: F) -> TieOutcome
    where
        F: FnOnce() -> Configuration,
    {
        let outcome = self.tolerance.compare(p, self.best);
        match outcome {
            TieOutcome::Improves => {
                self.best = p;
                self.configs.clear();
                self.configs.push(make());
            }
            TieOutcome::Ties => self.configs.push(make()),
            TieOutcome::Worse => {}
        }
        outcome
    }

    /// Offer an already built configuration.
    pub fn offer(&mut self, config: Configuration) -> TieOutcome {
        let p = config.p();
        self.consider(p, move || config)
    }

    /// Fold `other` into `self` with the same tie rule used for single candidates.
    pub fn merge(&mut self, other: BestSet) -> TieOutcome {
        let outcome = self.tolerance.compare(other.best, self.best);
        match outcome {
            TieOutcome::Improves => {
                self.best = other.best;
                self.configs = other.configs;
            }
            TieOutcome::Ties => self.configs.extend(other.configs),
            TieOutcome::Worse => {}
        }
        outcome
    }

    pub fn best_p(&self) -> f64 {
        self.best
    }

    pub fn configs(&self) -> &[Configuration] {
        &self.configs
    }

    pub fn into_configs(self) -> Vec<Configuration> {
        self.configs
    }

    pub fn tolerance(&self) -> TieTolerance {
        self.tolerance
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}
