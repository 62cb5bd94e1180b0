//! ratio_search — exact search for the best split of a marked budget across groups.
//!
//! Purpose
//! -------
//! Solve the discrete problem: given `k` groups, `m` marked items and a total
//! of `T` items, choose group sizes `x` (a positive partition of `T`) and
//! marked counts `b` (a positive partition of `m`, `b_i < x_i`) maximizing
//! `P = Π b_i / x_i`, and report every configuration that ties the
//! optimum. Surrounding analyses compare the discrete optimum with its
//! continuous relaxation. With the `python-bindings` feature this module is
//! also the PyO3 bridge exposing the search and analyses as the
//! `_ratio_search` extension module.
//!
//! Key behaviors
//! -------------
//! - [`combinatorics`]: lazy positive-partition and composition generators.
//! - [`search`]: the per-allocation evaluator, the global orchestrator with
//!   optional thread-pool fan-out, tolerance-based tie tracking and a
//!   brute-force cross-check.
//! - [`sweep`]: the `k × (m/T)` heat-matrix driver with slog progress output.
//! - [`analysis`]: water-filling, projected Hessian, bounds table and
//!   landscape statistics.
//!
//! Invariants & assumptions
//! ------------------------
//! - All heavy work is in the inner modules; the items below perform only
//!   FFI glue and error mapping.
//! - Every public search entry point is deterministic: sequential and
//!   parallel runs return the same best value and the same ordered set of
//!   optimal configurations.
//!
//! Conventions
//! -----------
//! - Python-exposed items live under `_ratio_search.search` and
//!   `_ratio_search.analysis`.
//! - Core errors (`SearchError`, `AnalysisError`, `SweepError`) convert to
//!   `ValueError` at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Rust callers use the inner modules directly; the `heatmap_sweep`
//!   binary drives [`sweep::run_sweep`] from the command line.
//!
//! Testing notes
//! -------------
//! - Unit tests live beside each module; `tests/integration_search_pipeline.rs`
//!   exercises the search, sweep and analysis layers together.

pub mod analysis;
pub mod combinatorics;
pub mod search;
pub mod sweep;
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    analysis::{
        hessian::projected_hessian,
        water_filling::{WaterFill, water_filling},
    },
    search::{best_set::BestSet, orchestrator, params::ProblemParams},
    utils::{build_search_options, extract_capacities},
};

/// SearchOutcome — Python-facing view of an optimal set.
///
/// Fields
/// ------
/// - `inner`: [`BestSet`]
///   Best value and the ordered optimal configurations.
///
/// Notes
/// -----
/// - Configurations are returned as `(b, x)` tuples of Python lists in the
///   order the search discovered them.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "ratio_search.search")]
pub struct SearchOutcome {
    inner: BestSet,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl SearchOutcome {
    /// Best success probability (0.0 when no configuration exists).
    #[getter]
    pub fn best_p(&self) -> f64 {
        self.inner.best_p()
    }

    #[getter]
    pub fn n_best(&self) -> usize {
        self.inner.len()
    }

    #[getter]
    pub fn tolerance(&self) -> f64 {
        self.inner.tolerance().eps()
    }

    /// Optimal configurations as `(b, x)` pairs.
    #[getter]
    pub fn configs(&self) -> Vec<(Vec<usize>, Vec<usize>)> {
        self.inner
            .configs()
            .iter()
            .map(|c| (c.allocation().to_vec(), c.sizes().to_vec()))
            .collect()
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __repr__(&self) -> String {
        format!("SearchOutcome(best_p={}, n_best={})", self.inner.best_p(), self.inner.len())
    }
}

/// WaterFillingResult — Python-facing water-filling solution.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "ratio_search.analysis")]
pub struct WaterFillingResult {
    inner: WaterFill,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl WaterFillingResult {
    /// Optimal `b_i`, in the order the capacities were given.
    #[getter]
    pub fn allocation<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.allocation.clone().into_pyarray(py)
    }

    /// Water level `λ`.
    #[getter]
    pub fn level(&self) -> f64 {
        self.inner.level
    }

    #[getter]
    pub fn saturated(&self) -> Vec<bool> {
        self.inner.saturated.clone()
    }

    #[getter]
    pub fn iterations(&self) -> usize {
        self.inner.iterations
    }

    /// `Σ log b_i` at the solution.
    pub fn log_objective(&self) -> f64 {
        self.inner.log_objective()
    }
}

/// best_p_for_params — exact discrete search from Python.
///
/// Parameters
/// ----------
/// - `k`, `m`, `total`: `usize`
///   Problem shape; `k ≥ 1` and `m ≤ total`.
/// - `tol`: `Option<f64>`
///   Tie tolerance, `None` for the default `1e-12`.
/// - `workers`: `usize`
///   Thread-pool size; `1` runs sequentially.
///
/// Errors
/// ------
/// - `ValueError` for invalid shapes, tolerances or worker counts.
///
/// Notes
/// -----
/// - The GIL is released for the duration of the search.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "best_p_for_params")]
#[pyo3(signature = (k, m, total, tol = None, workers = 1))]
fn py_best_p_for_params(
    py: Python<'_>, k: usize, m: usize, total: usize, tol: Option<f64>, workers: usize,
) -> PyResult<SearchOutcome> {
    let params = ProblemParams::new(k, m, total)?;
    let opts = build_search_options(tol, workers)?;
    let inner = py.allow_threads(|| orchestrator::best_p_for_params(&params, &opts))?;
    Ok(SearchOutcome { inner })
}

/// water_filling — continuous relaxation for fixed capacities.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "water_filling")]
fn py_water_filling(capacities: &Bound<'_, PyAny>, budget: f64) -> PyResult<WaterFillingResult> {
    let capacities = extract_capacities(capacities)?;
    let inner = water_filling(&capacities, budget)?;
    Ok(WaterFillingResult { inner })
}

/// projected_hessian_eigenvalues — ascending eigenvalues of `QᵀHQ` at the
/// symmetric stationary point of `(k, m, total)`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
fn projected_hessian_eigenvalues<'py>(
    py: Python<'py>, k: usize, m: usize, total: usize,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let params = ProblemParams::new(k, m, total)?;
    let hessian = projected_hessian(&params)?;
    Ok(hessian.eigenvalues.into_pyarray(py))
}

/// _ratio_search — PyO3 module initializer.
///
/// Creates the `search` and `analysis` submodules, attaches them to the
/// parent module and registers them in `sys.modules` so dotted imports
/// (`import ratio_search.search`) resolve.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _ratio_search<'py>(py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let search_mod = PyModule::new(py, "search")?;
    let analysis_mod = PyModule::new(py, "analysis")?;
    search_submodule(m, &search_mod)?;
    analysis_submodule(m, &analysis_mod)?;

    let modules = py.import("sys")?.getattr("modules")?;
    modules.set_item("ratio_search.search", search_mod)?;
    modules.set_item("ratio_search.analysis", analysis_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn search_submodule<'py>(parent: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_class::<SearchOutcome>()?;
    m.add_function(wrap_pyfunction!(py_best_p_for_params, m)?)?;
    parent.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn analysis_submodule<'py>(
    parent: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<WaterFillingResult>()?;
    m.add_function(wrap_pyfunction!(py_water_filling, m)?)?;
    m.add_function(wrap_pyfunction!(projected_hessian_eigenvalues, m)?)?;
    parent.add_submodule(m)?;
    Ok(())
}
