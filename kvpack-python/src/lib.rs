use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyDict, PyInt, PyString};

use kvpack_codec::{Error, ErrorKind, Value};

fn error_to_py(e: Error) -> PyErr {
    let kind = match e.kind {
        ErrorKind::InvalidInput => "invalid_input",
        ErrorKind::MalformedDocument => "malformed_document",
    };
    PyValueError::new_err(format!("{}:{}", kind, e.position))
}

/// Owned form of a Python key or value: `str`, `int`, or anything else.
enum Scalar {
    Str(String),
    Int(i64),
    Other,
}

impl Scalar {
    fn extract(obj: &Bound<'_, PyAny>) -> PyResult<Self> {
        // bool is an int subclass in Python but is not accepted.
        if obj.is_instance_of::<PyBool>() {
            return Ok(Scalar::Other);
        }
        if let Ok(s) = obj.downcast::<PyString>() {
            return Ok(Scalar::Str(s.to_str()?.to_owned()));
        }
        if obj.is_instance_of::<PyInt>() {
            return Ok(match obj.extract::<i64>() {
                Ok(n) => Scalar::Int(n),
                // Out of i64 range: keep the exact decimal digits.
                Err(_) => Scalar::Str(obj.str()?.to_str()?.to_owned()),
            });
        }
        Ok(Scalar::Other)
    }

    fn as_value(&self) -> Value<'_> {
        match self {
            Scalar::Str(s) => Value::Str(s),
            Scalar::Int(n) => Value::Int(*n),
            Scalar::Other => Value::Null,
        }
    }
}

#[pyfunction]
fn encode(mapping: &Bound<'_, PyDict>) -> PyResult<String> {
    let mut entries = Vec::with_capacity(mapping.len());
    for (key, value) in mapping.iter() {
        entries.push((Scalar::extract(&key)?, Scalar::extract(&value)?));
    }
    kvpack_codec::encode(entries.iter().map(|(k, v)| (k.as_value(), v.as_value())))
        .map_err(error_to_py)
}

#[pyfunction]
fn decode(py: Python<'_>, document: &str) -> PyResult<Py<PyDict>> {
    let map = kvpack_codec::decode(document).map_err(error_to_py)?;
    let dict = PyDict::new(py);
    for (key, value) in &map {
        dict.set_item(key, value)?;
    }
    Ok(dict.into())
}

#[pyfunction]
fn escape(value: &str) -> String {
    kvpack_codec::escape(value)
}

#[pyfunction]
fn unescape(value: &str) -> String {
    kvpack_codec::unescape(value)
}

#[pymodule]
fn _kvpack_native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(encode, m)?)?;
    m.add_function(wrap_pyfunction!(decode, m)?)?;
    m.add_function(wrap_pyfunction!(escape, m)?)?;
    m.add_function(wrap_pyfunction!(unescape, m)?)?;
    Ok(())
}
