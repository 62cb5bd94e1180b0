//! search::params — validated `(k, m, T)` problem parameters.
//!
//! Purpose
//! -------
//! Fail fast on malformed problem shapes before any enumeration begins. The
//! generators themselves return empty sequences for nonsensical inputs,
//! which would otherwise mask bugs as "no feasible configuration".
//!
//! Invariants & assumptions
//! ------------------------
//! - `k ≥ 1` groups and `m ≤ T`.
//! - `m == 0`, `m < k`, or `m + k > T` are legal: they are infeasible for
//!   the strict search and produce an empty best set, not an error.
use crate::search::errors::{SearchError, SearchResult};

/// Problem parameters: `k` groups, `m` marked items, `T` total items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProblemParams {
    groups: usize,
    marked: usize,
    total: usize,
}

impl ProblemParams {
    /// Validate and build `(k, m, T)`.
    ///
    /// # Errors
    /// - [`SearchError::InvalidGroupCount`] if `groups == 0`.
    /// - [`SearchError::BudgetExceedsTotal`] if `marked > total`.
    pub fn new(groups: usize, marked: usize, total: usize) -> SearchResult<ProblemParams> {
        if groups == 0 {
            return Err(SearchError::InvalidGroupCount { groups });
        }
        if marked > total {
            return Err(SearchError::BudgetExceedsTotal { marked, total });
        }
        Ok(ProblemParams { groups, marked, total })
    }

    /// Number of groups `k`.
    pub fn groups(&self) -> usize {
        self.groups
    }

    /// Marked budget `m`.
    pub fn marked(&self) -> usize {
        self.marked
    }

    /// Total item count `T`.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Slack `R = T - Σ(b_i + 1) = T - m - k` left after giving every group
    /// one more item than it has marked, or `None` when negative.
    pub fn strict_slack(&self) -> Option<usize> {
        self.total.checked_sub(self.marked + self.groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Validation rejects k = 0 and m > T but accepts boundary shapes.
    //
    // Expect
    // ------
    // - (0, 5, 10) and (3, 11, 10) fail; (3, 0, 10) and (3, 10, 10) succeed.
    fn new_validates_group_count_and_budget() {
        assert_eq!(ProblemParams::new(0, 5, 10), Err(SearchError::InvalidGroupCount { groups: 0 }));
        assert_eq!(
            ProblemParams::new(3, 11, 10),
            Err(SearchError::BudgetExceedsTotal { marked: 11, total: 10 })
        );
        assert!(ProblemParams::new(3, 0, 10).is_ok());
        assert!(ProblemParams::new(3, 10, 10).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // `strict_slack` is T - m - k, or None when negative.
    //
    // Expect
    // ------
    // - (3, 9, 30) → 18; (3, 3, 6) → 0; (2, 1, 2) → None.
    fn strict_slack_matches_definition() {
        assert_eq!(ProblemParams::new(3, 9, 30).unwrap().strict_slack(), Some(18));
        assert_eq!(ProblemParams::new(3, 3, 6).unwrap().strict_slack(), Some(0));
        assert_eq!(ProblemParams::new(2, 1, 2).unwrap().strict_slack(), None);
    }
}
