//! analysis::bounds — continuous relaxation vs discrete optimum.
//!
//! Purpose
//! -------
//! Put the continuous value `(m/T)^k`, the curvature bound factor
//! `exp((k/2)(1/m + 1/T))`, and the discrete brute-force optimum side by
//! side for a given `(k, m, T)`, producing one record per problem for the
//! comparison table consumed downstream.
//!
//! Conventions
//! -----------
//! - Records are plain strings in [`TABLE_HEADER`] column order; writing
//!   them to a file is the caller's concern.
//! - Tuples render as `(a, b, c)`; a missing representative renders as
//!   three empty fields.
use crate::{
    analysis::errors::{AnalysisError, AnalysisResult},
    search::{
        brute_force::brute_force_best, configuration::Configuration, params::ProblemParams,
        tolerance::TieTolerance,
    },
};

/// Column names of [`BoundComparison::record`].
pub const TABLE_HEADER: [&str; 9] =
    ["k", "m", "T", "P_cont", "P_disc_best", "bound_factor", "best_b", "best_x", "best_P"];

/// Value of the relaxation at the symmetric point: `(m/T)^k`.
pub fn continuous_relaxation_value(params: &ProblemParams) -> AnalysisResult<f64> {
    ensure_nondegenerate(params)?;
    Ok((params.marked() as f64 / params.total() as f64).powi(params.groups() as i32))
}

/// Curvature bound factor `exp((k/2)(1/m + 1/T))`.
pub fn bound_factor(params: &ProblemParams) -> AnalysisResult<f64> {
    ensure_nondegenerate(params)?;
    let k = params.groups() as f64;
    let m = params.marked() as f64;
    let t = params.total() as f64;
    Ok(((k / 2.0) * (1.0 / m + 1.0 / t)).exp())
}

/// One row of the continuous-vs-discrete comparison table.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundComparison {
    pub params: ProblemParams,
    pub p_continuous: f64,
    pub p_discrete_best: f64,
    pub bound_factor: f64,
    /// First optimal configuration in enumeration order, if any exists.
    pub representative: Option<Configuration>,
}

impl BoundComparison {
    /// Fields in [`TABLE_HEADER`] order.
    pub fn record(&self) -> Vec<String> {
        let mut row = vec![
            self.params.groups().to_string(),
            self.params.marked().to_string(),
            self.params.total().to_string(),
            self.p_continuous.to_string(),
            self.p_discrete_best.to_string(),
            self.bound_factor.to_string(),
        ];
        match &self.representative {
            Some(config) => {
                row.push(format_tuple(config.allocation()));
                row.push(format_tuple(config.sizes()));
                row.push(config.p().to_string());
            }
            None => row.extend(std::iter::repeat_n(String::new(), 3)),
        }
        row
    }

    /// Whether the discrete optimum reaches the symmetric continuous value.
    pub fn discrete_dominates(&self) -> bool {
        self.p_discrete_best >= self.p_continuous
    }
}

/// compare_bounds — build one comparison row with a brute-force discrete optimum.
///
/// The discrete side uses [`brute_force_best`] with the supplied tolerance,
/// so this is only practical for small shapes.
///
/// # Errors
/// - [`AnalysisError::DegenerateStationaryPoint`] when `m == 0` or `T == 0`.
pub fn compare_bounds(
    params: &ProblemParams, tolerance: TieTolerance,
) -> AnalysisResult<BoundComparison> {
    let p_continuous = continuous_relaxation_value(params)?;
    let factor = bound_factor(params)?;
    let best = brute_force_best(params, tolerance);
    let p_discrete_best = best.best_p();
    let representative = best.into_configs().into_iter().next();
    Ok(BoundComparison {
        params: *params,
        p_continuous,
        p_discrete_best,
        bound_factor: factor,
        representative,
    })
}

// ---- Helper methods ----

fn ensure_nondegenerate(params: &ProblemParams) -> AnalysisResult<()> {
    if params.marked() == 0 || params.total() == 0 {
        return Err(AnalysisError::DegenerateStationaryPoint {
            marked: params.marked(),
            total: params.total(),
        });
    }
    Ok(())
}

fn format_tuple(values: &[usize]) -> String {
    let inner: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("({})", inner.join(", "))
}
