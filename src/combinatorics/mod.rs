//! combinatorics — lazy enumeration of bounded integer tuples.
//!
//! Purpose
//! -------
//! Provide the leaf generators used by every search path in this crate:
//! ordered k-tuples of positive integers with a fixed sum (partitions in the
//! crate's terminology) and ordered k-tuples of nonnegative integers with a
//! fixed sum (compositions), together with their closed-form counts.
//!
//! Key behaviors
//! -------------
//! - [`partitions_positive`] / [`PositivePartitions`] yield every ordered
//!   k-tuple of strictly positive integers summing to `n`, exactly once.
//! - [`compositions_nonneg`] / [`NonnegCompositions`] yield every ordered
//!   k-tuple of nonnegative integers summing to `n`, exactly once.
//! - [`count_positive_partitions`] and [`count_compositions`] return the
//!   binomial counts `C(n-1, k-1)` and `C(n+k-1, k-1)` without enumerating.
//!
//! Invariants & assumptions
//! ------------------------
//! - Generators are lazy and finite. Each call returns a fresh iterator; an
//!   iterator is not resumable once exhausted.
//! - Enumeration order is lexicographic on the tuple (first element varies
//!   slowest). Downstream code must not rely on it for correctness.
//! - `k == 0` yields an empty sequence; callers validate `k >= 1` upstream.
//!
//! Conventions
//! -----------
//! - All counts are `usize`; negative sums are unrepresentable.
//! - Tuples are yielded as owned `Vec<usize>` of length `k`.
//!
//! Testing notes
//! -------------
//! - Unit tests check counts against the binomial closed forms, sum and
//!   positivity invariants, uniqueness, and the `k == 1` / `n < k` edges.

pub mod counts;
pub mod partitions;

pub use self::counts::{binomial, count_compositions, count_positive_partitions};
pub use self::partitions::{
    NonnegCompositions, PositivePartitions, compositions_nonneg, partitions_positive,
};
