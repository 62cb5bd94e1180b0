//! analysis::hessian — projected Hessian at the symmetric stationary point.
//!
//! Purpose
//! -------
//! Characterize the local curvature of the continuous relaxation
//! `f(b, x) = Σ log b_i − Σ log x_i` at the symmetric point
//! `b_i = m/k`, `x_i = T/k`, restricted to the tangent space of the
//! constraints `Σ b_i = m` and `Σ x_i = T`.
//!
//! Key behaviors
//! -------------
//! - Build the `2k × 2k` Hessian, block-diagonal with `−1/b*²` on the `b`
//!   block and `+1/x*²` on the `x` block.
//! - Build the tangent basis `Q` (`2k × 2(k−1)`) from consecutive-difference
//!   directions `e_i − e_{i+1}` in each block, and form `Qᵀ H Q`.
//! - Copy the projected matrix into a `nalgebra::DMatrix`, run a symmetric
//!   eigendecomposition, and return the eigenvalues sorted ascending.
//! - Classify the point via [`ProjectedHessian::curvature`].
//!
//! Invariants & assumptions
//! ------------------------
//! - `Qᵀ H Q` is symmetric because `H` is, so `symmetric_eigen` yields real
//!   eigenvalues directly.
//! - `k = 1` has an empty tangent space: the projected matrix is `0 × 0`
//!   and there are no eigenvalues.
//! - The basis is not orthonormal; eigenvalues describe `Qᵀ H Q` in that
//!   basis. Their signs (and hence the classification) are basis-invariant.
//!
//! Notes
//! -----
//! - This is a diagnostic for comparing against the discrete optimum; the
//!   search engine never calls it.
use nalgebra::DMatrix;
use ndarray::{Array1, Array2, s};

use crate::{
    analysis::errors::{AnalysisError, AnalysisResult},
    search::params::ProblemParams,
};

/// Eigenvalues with magnitude at most this are treated as zero by
/// [`ProjectedHessian::curvature`].
pub const EIGEN_EPS: f64 = 1e-12;

/// Local curvature class of the constrained stationary point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curvature {
    /// All eigenvalues negative: strict local maximum.
    NegativeDefinite,
    /// All eigenvalues positive: strict local minimum.
    PositiveDefinite,
    /// Eigenvalues of both signs: saddle point.
    Indefinite,
    /// Some eigenvalue is numerically zero, or the tangent space is empty.
    Degenerate,
}

/// Projected Hessian `Qᵀ H Q` and its sorted eigenvalues.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedHessian {
    pub matrix: Array2<f64>,
    pub eigenvalues: Array1<f64>,
}

impl ProjectedHessian {
    pub fn curvature(&self) -> Curvature {
        if self.eigenvalues.is_empty() || self.eigenvalues.iter().any(|l| l.abs() <= EIGEN_EPS) {
            return Curvature::Degenerate;
        }
        let negative = self.eigenvalues.iter().all(|&l| l < 0.0);
        let positive = self.eigenvalues.iter().all(|&l| l > 0.0);
        match (negative, positive) {
            (true, _) => Curvature::NegativeDefinite,
            (_, true) => Curvature::PositiveDefinite,
            _ => Curvature::Indefinite,
        }
    }
}

/// projected_hessian — curvature of the relaxation at `b = m/k`, `x = T/k`.
///
/// Parameters
/// ----------
/// - `params`: `&ProblemParams`
///   Validated `(k, m, T)`; `m` and `T` must be at least 1.
///
/// Returns
/// -------
/// `AnalysisResult<ProjectedHessian>`
///   The `2(k−1) × 2(k−1)` projected matrix and its eigenvalues sorted
///   ascending.
///
/// Errors
/// ------
/// - [`AnalysisError::DegenerateStationaryPoint`] when `m == 0` or `T == 0`.
///
/// Examples
/// --------
/// ```rust
/// # use ratio_search::analysis::hessian::{Curvature, projected_hessian};
/// # use ratio_search::search::ProblemParams;
/// let params = ProblemParams::new(3, 9, 30).unwrap();
/// let ph = projected_hessian(&params).unwrap();
/// assert_eq!(ph.eigenvalues.len(), 4);
/// assert_eq!(ph.curvature(), Curvature::Indefinite);
/// ```
pub fn projected_hessian(params: &ProblemParams) -> AnalysisResult<ProjectedHessian> {
    let (k, m, t) = (params.groups(), params.marked(), params.total());
    if m == 0 || t == 0 {
        return Err(AnalysisError::DegenerateStationaryPoint { marked: m, total: t });
    }
    if k == 1 {
        return Ok(ProjectedHessian {
            matrix: Array2::zeros((0, 0)),
            eigenvalues: Array1::zeros(0),
        });
    }

    let b_star = m as f64 / k as f64;
    let x_star = t as f64 / k as f64;
    let hessian = stationary_hessian(k, b_star, x_star);
    let basis = tangent_basis(k);
    let projected = basis.t().dot(&hessian).dot(&basis);

    let mut projected_nalg = DMatrix::<f64>::zeros(projected.nrows(), projected.ncols());
    fill_dmatrix(&projected, &mut projected_nalg);
    let mut eigenvalues: Vec<f64> =
        projected_nalg.symmetric_eigen().eigenvalues.iter().copied().collect();
    eigenvalues.sort_by(f64::total_cmp);

    Ok(ProjectedHessian { matrix: projected, eigenvalues: Array1::from_vec(eigenvalues) })
}

// ---- Helper methods ----

/// Block-diagonal Hessian of `Σ log b_i − Σ log x_i` at `(b*, x*)`.
fn stationary_hessian(k: usize, b_star: f64, x_star: f64) -> Array2<f64> {
    let mut h = Array2::<f64>::zeros((2 * k, 2 * k));
    h.slice_mut(s![..k, ..k]).diag_mut().fill(-1.0 / (b_star * b_star));
    h.slice_mut(s![k.., k..]).diag_mut().fill(1.0 / (x_star * x_star));
    h
}

/// Consecutive-difference basis of `{Σb = const} × {Σx = const}`.
fn tangent_basis(k: usize) -> Array2<f64> {
    let mut q = Array2::<f64>::zeros((2 * k, 2 * (k - 1)));
    for i in 0..k - 1 {
        q[[i, i]] = 1.0;
        q[[i + 1, i]] = -1.0;
        q[[k + i, k - 1 + i]] = 1.0;
        q[[k + i + 1, k - 1 + i]] = -1.0;
    }
    q
}

/// Copy a square `ndarray` matrix into a preallocated `DMatrix` of the same shape.
fn fill_dmatrix(source: &Array2<f64>, target: &mut DMatrix<f64>) {
    let n = source.ncols();
    for j in 0..n {
        for i in 0..source.nrows() {
            target[(i, j)] = source[[i, j]];
        }
    }
}
