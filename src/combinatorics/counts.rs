//! Closed-form tuple counts used for workload estimates and test oracles.

/// Binomial coefficient `C(n, r)`, saturating at `usize::MAX`.
///
/// Uses the multiplicative form `C(n, r) = Π_{i=1..r} (n - r + i) / i` with
/// `r = min(r, n - r)`; every intermediate quotient is exact. Returns `0`
/// when `r > n`.
pub fn binomial(n: usize, r: usize) -> usize {
    if r > n {
        return 0;
    }
    let r = r.min(n - r);
    let mut acc: u128 = 1;
    for i in 1..=r as u128 {
        acc = acc * (n as u128 - r as u128 + i) / i;
        if acc > usize::MAX as u128 {
            return usize::MAX;
        }
    }
    acc as usize
}

/// Number of ordered `k`-tuples of positive integers summing to `n`:
/// `C(n-1, k-1)`, or `0` when `k == 0` or `n < k`.
pub fn count_positive_partitions(n: usize, k: usize) -> usize {
    if k == 0 || n < k {
        return 0;
    }
    binomial(n - 1, k - 1)
}

/// Number of ordered `k`-tuples of nonnegative integers summing to `n`:
/// `C(n+k-1, k-1)`, or `0` when `k == 0`.
pub fn count_compositions(n: usize, k: usize) -> usize {
    if k == 0 {
        return 0;
    }
    binomial(n + k - 1, k - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Spot-check `binomial` against Pascal values and its edge rules.
    //
    // Expect
    // ------
    // - C(5,2)=10, C(29,2)=406, C(n,0)=1, C(n,n)=1, C(3,4)=0.
    fn binomial_matches_known_values() {
        assert_eq!(binomial(5, 2), 10);
        assert_eq!(binomial(29, 2), 406);
        assert_eq!(binomial(40, 20), 137_846_528_820);
        assert_eq!(binomial(9, 0), 1);
        assert_eq!(binomial(9, 9), 1);
        assert_eq!(binomial(3, 4), 0);
    }

    #[test]
    // Purpose
    // -------
    // Check the derived counts and their degenerate branches.
    //
    // Expect
    // ------
    // - Positive partitions of 9 into 3 parts: C(8,2)=28; of 2 into 3: 0.
    // - Compositions of 21 into 3 parts: C(23,2)=253; of 0 into 4: 1.
    fn derived_counts_follow_closed_forms() {
        assert_eq!(count_positive_partitions(9, 3), 28);
        assert_eq!(count_positive_partitions(2, 3), 0);
        assert_eq!(count_positive_partitions(4, 0), 0);
        assert_eq!(count_compositions(21, 3), 253);
        assert_eq!(count_compositions(0, 4), 1);
        assert_eq!(count_compositions(3, 0), 0);
    }
}
