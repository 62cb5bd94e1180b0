//! utils — conversion helpers for the Python bindings.
//!
//! Everything here turns loosely typed Python arguments into the validated
//! option and vector types used by the core modules. Only the shape check is
//! compiled without the `python-bindings` feature, so it can be unit tested.
#[cfg(feature = "python-bindings")]
use numpy::{PyReadonlyArray1, PyUntypedArray, PyUntypedArrayMethods};

#[cfg(feature = "python-bindings")]
use pyo3::{
    exceptions::{PyTypeError, PyValueError},
    prelude::*,
    types::PyAny,
};

#[cfg(feature = "python-bindings")]
use crate::search::{options::SearchOptions, tolerance::TieTolerance};

/// Capacities are one value per group, so only 1-D arrays are accepted.
#[cfg(any(test, feature = "python-bindings"))]
pub(crate) fn check_capacity_ndim(ndim: usize) -> Result<(), String> {
    if ndim == 1 {
        Ok(())
    } else {
        Err(format!("capacities must be a 1-D array (one entry per group), got {ndim} dimensions"))
    }
}

/// Copy group capacities out of a `float64` numpy array or a Python
/// sequence of numbers.
///
/// Errors
/// ------
/// - `ValueError` for numpy arrays that are not one-dimensional.
/// - `TypeError` for non-`float64` arrays and non-numeric sequences.
///
/// Notes
/// -----
/// - Strided views are copied element-wise; value checks (positivity,
///   finiteness, emptiness) are left to
///   [`water_filling`](crate::analysis::water_filling::water_filling).
#[cfg(feature = "python-bindings")]
pub fn extract_capacities<'py>(raw: &Bound<'py, PyAny>) -> PyResult<Vec<f64>> {
    if let Ok(array) = raw.downcast::<PyUntypedArray>() {
        check_capacity_ndim(array.ndim()).map_err(PyValueError::new_err)?;
        let view: PyReadonlyArray1<'py, f64> = raw
            .extract()
            .map_err(|_| PyTypeError::new_err("capacities array must have dtype float64"))?;
        return Ok(view.as_array().to_vec());
    }
    raw.extract::<Vec<f64>>().map_err(|_| {
        PyTypeError::new_err("capacities must be a 1-D float64 array or a sequence of numbers")
    })
}

/// Build [`SearchOptions`] from optional Python keyword arguments.
///
/// `tol = None` selects [`TieTolerance::default`].
#[cfg(feature = "python-bindings")]
pub fn build_search_options(tol: Option<f64>, workers: usize) -> PyResult<SearchOptions> {
    let tolerance = match tol {
        Some(eps) => TieTolerance::new(eps)?,
        None => TieTolerance::default(),
    };
    Ok(SearchOptions::new(tolerance, workers)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Capacity arrays must be one-dimensional.
    //
    // Given
    // -----
    // - ndim = 1, then ndim = 2 (e.g. a column vector) and ndim = 0.
    //
    // Expect
    // ------
    // - 1 passes; the others fail with a message naming the dimension count.
    fn capacity_arrays_must_be_one_dimensional() {
        assert!(check_capacity_ndim(1).is_ok());

        let msg = check_capacity_ndim(2).unwrap_err();
        assert!(msg.contains("1-D") && msg.contains("got 2"), "got: {msg}");
        assert!(check_capacity_ndim(0).unwrap_err().contains("got 0"));
    }
}
