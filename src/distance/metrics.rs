// SPDX-License-Identifier: MIT
// PyO3 wrappers for the similarity metrics.
// Each function handles: processor, score_cutoff, None/NaN inputs.

use pyo3::prelude::*;

use crate::algorithms as alg;
use crate::types::{extract_single, get_processed_args, is_none};

#[macro_export]
macro_rules! dispatch_metric {
    ($func:path, $s1:expr, $s2:expr $(, $args:expr)*) => {
        match ($s1, $s2) {
            ($crate::types::Seq::Ascii(a), $crate::types::Seq::Ascii(b)) => $func(*a, *b $(, $args)*),
            ($crate::types::Seq::Ascii(a), $crate::types::Seq::U32(b)) => $func(&a.iter().map(|&x| x as u32).collect::<Vec<_>>(), b $(, $args)*),
            ($crate::types::Seq::U32(a), $crate::types::Seq::Ascii(b)) => $func(a, &b.iter().map(|&x| x as u32).collect::<Vec<_>>() $(, $args)*),
            ($crate::types::Seq::U32(a), $crate::types::Seq::U32(b)) => $func(a, b $(, $args)*),
        }
    };
}

fn check_sim_f64_cutoff(sim: f64, cutoff: Option<f64>) -> f64 {
    if let Some(c) = cutoff {
        if sim < c { 0.0 } else { sim }
    } else {
        sim
    }
}

// ===========================================================================
// JARO
// ===========================================================================

#[pyfunction]
#[pyo3(signature = (s1, s2, *, processor=None, score_cutoff=None))]
pub fn jaro_distance(
    py: Python<'_>,
    s1: &Bound<'_, PyAny>,
    s2: &Bound<'_, PyAny>,
    processor: Option<PyObject>,
    score_cutoff: Option<f64>,
) -> PyResult<f64> {
    if is_none(s1) || is_none(s2) {
        return Ok(1.0f64);
    }
    let (a_obj, b_obj) = get_processed_args(py, s1, s2, &processor)?;
    let a = extract_single(&a_obj)?;
    let b = extract_single(&b_obj)?;
    let sim = dispatch_metric!(alg::jaro, &a, &b);
    let dist = 1.0 - sim;
    Ok(check_sim_f64_cutoff(dist, score_cutoff.map(|c| 1.0 - c)))
}

#[pyfunction]
#[pyo3(signature = (s1, s2, *, processor=None, score_cutoff=None))]
pub fn jaro_similarity(
    py: Python<'_>,
    s1: &Bound<'_, PyAny>,
    s2: &Bound<'_, PyAny>,
    processor: Option<PyObject>,
    score_cutoff: Option<f64>,
) -> PyResult<f64> {
    if is_none(s1) || is_none(s2) {
        return Ok(0.0f64);
    }
    let (a_obj, b_obj) = get_processed_args(py, s1, s2, &processor)?;
    let a = extract_single(&a_obj)?;
    let b = extract_single(&b_obj)?;
    let sim = dispatch_metric!(alg::jaro, &a, &b);
    Ok(check_sim_f64_cutoff(sim, score_cutoff))
}

#[pyfunction]
#[pyo3(signature = (s1, s2, *, processor=None, score_cutoff=None))]
pub fn jaro_normalized_distance(
    py: Python<'_>,
    s1: &Bound<'_, PyAny>,
    s2: &Bound<'_, PyAny>,
    processor: Option<PyObject>,
    score_cutoff: Option<f64>,
) -> PyResult<f64> {
    // Jaro is already normalized.
    jaro_distance(py, s1, s2, processor, score_cutoff)
}

#[pyfunction]
#[pyo3(signature = (s1, s2, *, processor=None, score_cutoff=None))]
pub fn jaro_normalized_similarity(
    py: Python<'_>,
    s1: &Bound<'_, PyAny>,
    s2: &Bound<'_, PyAny>,
    processor: Option<PyObject>,
    score_cutoff: Option<f64>,
) -> PyResult<f64> {
    jaro_similarity(py, s1, s2, processor, score_cutoff)
}

// ===========================================================================
// JARO-WINKLER
// ===========================================================================

#[pyfunction]
#[pyo3(signature = (s1, s2, *, processor=None, score_cutoff=None))]
pub fn jaro_winkler_distance(
    py: Python<'_>,
    s1: &Bound<'_, PyAny>,
    s2: &Bound<'_, PyAny>,
    processor: Option<PyObject>,
    score_cutoff: Option<f64>,
) -> PyResult<f64> {
    if is_none(s1) || is_none(s2) {
        return Ok(1.0f64);
    }
    let (a_obj, b_obj) = get_processed_args(py, s1, s2, &processor)?;
    let a = extract_single(&a_obj)?;
    let b = extract_single(&b_obj)?;
    let sim = dispatch_metric!(alg::jaro_winkler, &a, &b);
    let dist = 1.0 - sim;
    Ok(check_sim_f64_cutoff(dist, score_cutoff.map(|c| 1.0 - c)))
}

#[pyfunction]
#[pyo3(signature = (s1, s2, *, processor=None, score_cutoff=None))]
pub fn jaro_winkler_similarity(
    py: Python<'_>,
    s1: &Bound<'_, PyAny>,
    s2: &Bound<'_, PyAny>,
    processor: Option<PyObject>,
    score_cutoff: Option<f64>,
) -> PyResult<f64> {
    if is_none(s1) || is_none(s2) {
        return Ok(0.0f64);
    }
    let (a_obj, b_obj) = get_processed_args(py, s1, s2, &processor)?;
    let a = extract_single(&a_obj)?;
    let b = extract_single(&b_obj)?;
    let sim = dispatch_metric!(alg::jaro_winkler, &a, &b);
    Ok(check_sim_f64_cutoff(sim, score_cutoff))
}

#[pyfunction]
#[pyo3(signature = (s1, s2, *, processor=None, score_cutoff=None))]
pub fn jaro_winkler_normalized_distance(
    py: Python<'_>,
    s1: &Bound<'_, PyAny>,
    s2: &Bound<'_, PyAny>,
    processor: Option<PyObject>,
    score_cutoff: Option<f64>,
) -> PyResult<f64> {
    jaro_winkler_distance(py, s1, s2, processor, score_cutoff)
}

#[pyfunction]
#[pyo3(signature = (s1, s2, *, processor=None, score_cutoff=None))]
pub fn jaro_winkler_normalized_similarity(
    py: Python<'_>,
    s1: &Bound<'_, PyAny>,
    s2: &Bound<'_, PyAny>,
    processor: Option<PyObject>,
    score_cutoff: Option<f64>,
) -> PyResult<f64> {
    jaro_winkler_similarity(py, s1, s2, processor, score_cutoff)
}
