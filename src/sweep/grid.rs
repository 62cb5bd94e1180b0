//! sweep::grid — ratio grids and group-count lists for the sweep.
//!
//! A [`RatioGrid`] is either an inclusive `start:stop:steps` range with
//! `linspace` semantics or an explicit comma-separated list. Group counts
//! are a comma-separated list of positive integers.
use std::str::FromStr;

use crate::sweep::errors::{SweepError, SweepResult};

/// Ordered, validated ratio values `m/T` in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct RatioGrid {
    values: Vec<f64>,
}

impl RatioGrid {
    /// `steps` evenly spaced values from `start` to `stop`, both inclusive.
    ///
    /// `steps == 1` yields `[start]`. The last value is exactly `stop`.
    ///
    /// # Errors
    /// - [`SweepError::EmptyGrid`] when `steps == 0`.
    /// - [`SweepError::RatioOutOfRange`] when an endpoint is non-finite or
    ///   outside `[0, 1]`.
    pub fn linspace(start: f64, stop: f64, steps: usize) -> SweepResult<RatioGrid> {
        let values = match steps {
            0 => return Err(SweepError::EmptyGrid),
            1 => vec![start],
            _ => {
                let step = (stop - start) / (steps - 1) as f64;
                let mut values: Vec<f64> = (0..steps).map(|i| start + i as f64 * step).collect();
                values[steps - 1] = stop;
                values
            }
        };
        RatioGrid::from_values(values)
    }

    /// Explicit ratio values, kept in the given order.
    ///
    /// # Errors
    /// - [`SweepError::EmptyGrid`] for an empty list.
    /// - [`SweepError::RatioOutOfRange`] for the first invalid value.
    pub fn from_values(values: Vec<f64>) -> SweepResult<RatioGrid> {
        if values.is_empty() {
            return Err(SweepError::EmptyGrid);
        }
        if let Some(&value) = values.iter().find(|v| !v.is_finite() || **v < 0.0 || **v > 1.0) {
            return Err(SweepError::RatioOutOfRange { value });
        }
        Ok(RatioGrid { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromStr for RatioGrid {
    type Err = SweepError;

    /// Parse `start:stop:steps` or `r1,r2,...`.
    fn from_str(spec: &str) -> SweepResult<RatioGrid> {
        let invalid = |reason| SweepError::InvalidRatioSpec { spec: spec.to_string(), reason };
        if spec.contains(':') {
            let parts: Vec<&str> = spec.split(':').map(str::trim).collect();
            let [start, stop, steps] = parts[..] else {
                return Err(invalid("Range must have the form start:stop:steps."));
            };
            let start: f64 = start.parse().map_err(|_| invalid("Range start is not a number."))?;
            let stop: f64 = stop.parse().map_err(|_| invalid("Range stop is not a number."))?;
            let steps: usize =
                steps.parse().map_err(|_| invalid("Range steps is not a nonnegative integer."))?;
            return RatioGrid::linspace(start, stop, steps);
        }
        let values = spec
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<f64>().map_err(|_| invalid("List entry is not a number.")))
            .collect::<SweepResult<Vec<f64>>>()?;
        RatioGrid::from_values(values)
    }
}

/// Parse a comma-separated list of group counts such as `"2,3,4"`.
///
/// # Errors
/// - [`SweepError::NoGroupCounts`] for an empty list.
/// - [`SweepError::InvalidGroupList`] for non-integer or zero entries.
pub fn parse_group_counts(spec: &str) -> SweepResult<Vec<usize>> {
    let invalid = |reason| SweepError::InvalidGroupList { spec: spec.to_string(), reason };
    let ks = spec
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| match s.parse::<usize>() {
            Ok(0) => Err(invalid("Group counts must be at least 1.")),
            Ok(k) => Ok(k),
            Err(_) => Err(invalid("Entry is not a positive integer.")),
        })
        .collect::<SweepResult<Vec<usize>>>()?;
    if ks.is_empty() {
        return Err(SweepError::NoGroupCounts);
    }
    Ok(ks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    // Purpose
    // -------
    // The default range parses into 13 inclusive points.
    //
    // Given
    // -----
    // - "0.2:0.8:13".
    //
    // Expect
    // ------
    // - 13 values, first 0.2, last exactly 0.8, step 0.05.
    fn range_spec_parses_with_linspace_semantics() {
        let grid: RatioGrid = "0.2:0.8:13".parse().unwrap();
        assert_eq!(grid.len(), 13);
        assert_eq!(grid.values()[0], 0.2);
        assert_eq!(grid.values()[12], 0.8);
        assert_relative_eq!(grid.values()[1] - grid.values()[0], 0.05, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Explicit lists keep order; a single step keeps the start.
    //
    // Expect
    // ------
    // - "0.5, 0.1" → [0.5, 0.1]; linspace(0.3, 0.9, 1) → [0.3].
    fn list_spec_and_single_step() {
        let grid: RatioGrid = "0.5, 0.1".parse().unwrap();
        assert_eq!(grid.values(), &[0.5, 0.1]);
        assert_eq!(RatioGrid::linspace(0.3, 0.9, 1).unwrap().values(), &[0.3]);
    }

    #[test]
    // Purpose
    // -------
    // Malformed or out-of-range grids are rejected.
    //
    // Expect
    // ------
    // - Wrong arity, bad numbers, zero steps, and values outside [0, 1]
    //   map to their variants.
    fn invalid_ratio_specs_are_rejected() {
        assert!(matches!("0.2:0.8".parse::<RatioGrid>(), Err(SweepError::InvalidRatioSpec { .. })));
        assert!(matches!("0.2:x:3".parse::<RatioGrid>(), Err(SweepError::InvalidRatioSpec { .. })));
        assert!(matches!("a,b".parse::<RatioGrid>(), Err(SweepError::InvalidRatioSpec { .. })));
        assert_eq!("0.2:0.8:0".parse::<RatioGrid>(), Err(SweepError::EmptyGrid));
        assert_eq!("".parse::<RatioGrid>(), Err(SweepError::EmptyGrid));
        assert_eq!("0.5,1.5".parse::<RatioGrid>(), Err(SweepError::RatioOutOfRange { value: 1.5 }));
    }

    #[test]
    // Purpose
    // -------
    // Group-count lists parse and validate.
    //
    // Expect
    // ------
    // - "2,3,4" → [2, 3, 4]; "2,0" and "2,x" fail; "" → NoGroupCounts.
    fn group_counts_parse_and_validate() {
        assert_eq!(parse_group_counts("2,3,4").unwrap(), vec![2, 3, 4]);
        assert_eq!(parse_group_counts(" 5 ").unwrap(), vec![5]);
        assert!(matches!(parse_group_counts("2,0"), Err(SweepError::InvalidGroupList { .. })));
        assert!(matches!(parse_group_counts("2,x"), Err(SweepError::InvalidGroupList { .. })));
        assert_eq!(parse_group_counts(""), Err(SweepError::NoGroupCounts));
    }
}
