//! combinatorics::partitions — lazy generators for fixed-sum integer tuples.
//!
//! Both generators walk the tuples in lexicographic order with an in-place
//! successor step instead of nested recursion, so memory stays `O(k)`
//! regardless of how many tuples exist. The successor for a nonnegative
//! composition `c` is: find the rightmost index `i <= k-2` with a nonzero
//! suffix `c[i+1..]`, increment `c[i]`, and move the remaining suffix mass
//! minus one into the last slot. This reproduces the order of "fix the first
//! element over its range, recurse on the tail".
//!
//! Positive partitions of `n` into `k` parts are in bijection with
//! nonnegative compositions of `n - k` (add one to every part), which is how
//! [`PositivePartitions`] is built.
use std::iter::FusedIterator;

/// NonnegCompositions — every ordered `k`-tuple of nonnegative integers
/// summing to `n`.
///
/// Construct via [`compositions_nonneg`] or [`NonnegCompositions::new`].
/// Yields `C(n+k-1, k-1)` tuples for `k >= 1`, and nothing for `k == 0`.
#[derive(Debug, Clone)]
pub struct NonnegCompositions {
    current: Vec<usize>,
    done: bool,
}

impl NonnegCompositions {
    /// Start a fresh enumeration of the compositions of `n` into `k` parts.
    pub fn new(n: usize, k: usize) -> NonnegCompositions {
        if k == 0 {
            return NonnegCompositions { current: Vec::new(), done: true };
        }
        let mut current = vec![0; k];
        current[k - 1] = n;
        NonnegCompositions { current, done: false }
    }

    fn advance(&mut self) {
        let k = self.current.len();
        let mut suffix = 0;
        for i in (0..k.saturating_sub(1)).rev() {
            suffix += self.current[i + 1];
            if suffix > 0 {
                self.current[i] += 1;
                for slot in &mut self.current[i + 1..k - 1] {
                    *slot = 0;
                }
                self.current[k - 1] = suffix - 1;
                return;
            }
        }
        self.done = true;
    }
}

impl Iterator for NonnegCompositions {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        let out = self.current.clone();
        self.advance();
        Some(out)
    }
}

impl FusedIterator for NonnegCompositions {}

/// PositivePartitions — every ordered `k`-tuple of strictly positive
/// integers summing to `n`.
///
/// Empty when `n < k` or `k == 0`; a single tuple `(n,)` when `k == 1` and
/// `n >= 1`. Yields `C(n-1, k-1)` tuples otherwise.
#[derive(Debug, Clone)]
pub struct PositivePartitions {
    inner: NonnegCompositions,
}

impl PositivePartitions {
    /// Start a fresh enumeration of the positive partitions of `n` into `k` parts.
    pub fn new(n: usize, k: usize) -> PositivePartitions {
        let inner = match n.checked_sub(k) {
            Some(rest) if k > 0 => NonnegCompositions::new(rest, k),
            _ => NonnegCompositions { current: Vec::new(), done: true },
        };
        PositivePartitions { inner }
    }
}

impl Iterator for PositivePartitions {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        self.inner.next().map(|mut tuple| {
            tuple.iter_mut().for_each(|part| *part += 1);
            tuple
        })
    }
}

impl FusedIterator for PositivePartitions {}

/// Ordered `k`-tuples of positive integers summing to `n`.
pub fn partitions_positive(n: usize, k: usize) -> PositivePartitions {
    PositivePartitions::new(n, k)
}

/// Ordered `k`-tuples of nonnegative integers summing to `n`.
pub fn compositions_nonneg(n: usize, k: usize) -> NonnegCompositions {
    NonnegCompositions::new(n, k)
}
