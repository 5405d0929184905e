// SPDX-License-Identifier: MIT
// Jaro-Winkler Rust extension module
use pyo3::prelude::*;

pub mod algorithms;
mod distance;
mod types;

use distance::metrics;

#[pymodule]
fn _jarowinkler(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Jaro
    m.add_function(wrap_pyfunction!(metrics::jaro_distance, m)?)?;
    m.add_function(wrap_pyfunction!(metrics::jaro_similarity, m)?)?;
    m.add_function(wrap_pyfunction!(metrics::jaro_normalized_distance, m)?)?;
    m.add_function(wrap_pyfunction!(metrics::jaro_normalized_similarity, m)?)?;
    // Jaro-Winkler
    m.add_function(wrap_pyfunction!(metrics::jaro_winkler_distance, m)?)?;
    m.add_function(wrap_pyfunction!(metrics::jaro_winkler_similarity, m)?)?;
    m.add_function(wrap_pyfunction!(metrics::jaro_winkler_normalized_distance, m)?)?;
    m.add_function(wrap_pyfunction!(metrics::jaro_winkler_normalized_similarity, m)?)?;
    Ok(())
}
