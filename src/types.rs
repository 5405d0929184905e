// SPDX-License-Identifier: MIT
// Extraction of Python arguments into the internal sequence representation.

use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyString};

/// A borrowed-or-owned view of one comparison operand. ASCII text and bytes
/// stay borrowed; non-ASCII text is widened to code points.
#[derive(Clone, Debug)]
pub enum Seq<'a> {
    Ascii(&'a [u8]),
    U32(Vec<u32>),
}

pub fn extract_single<'a>(obj: &'a Bound<'a, PyAny>) -> PyResult<Seq<'a>> {
    if let Ok(s) = obj.downcast::<PyString>() {
        let text = s.to_str()?;
        if text.is_ascii() {
            return Ok(Seq::Ascii(text.as_bytes()));
        }
        return Ok(Seq::U32(text.chars().map(|c| c as u32).collect()));
    }

    if let Ok(b) = obj.downcast::<PyBytes>() {
        return Ok(Seq::Ascii(b.as_bytes()));
    }

    Err(pyo3::exceptions::PyTypeError::new_err("expected str or bytes"))
}

pub fn get_processed_args<'py>(
    py: Python<'py>,
    s1: &Bound<'py, PyAny>,
    s2: &Bound<'py, PyAny>,
    processor: &Option<PyObject>,
) -> PyResult<(Bound<'py, PyAny>, Bound<'py, PyAny>)> {
    if let Some(proc) = processor {
        let p1 = proc.call1(py, (s1,))?.into_bound(py);
        let p2 = proc.call1(py, (s2,))?.into_bound(py);
        Ok((p1, p2))
    } else {
        Ok((s1.clone(), s2.clone()))
    }
}

/// Treats None, float NaN, and pandas' `<NA>` as missing input.
pub fn is_none(obj: &Bound<'_, PyAny>) -> bool {
    if obj.is_none() {
        return true;
    }
    if let Ok(f) = obj.extract::<f64>() {
        return f.is_nan();
    }
    if let Ok(r) = obj.str() {
        return r.to_str().map(|s| s == "<NA>").unwrap_or(false);
    }
    false
}
