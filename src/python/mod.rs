//! Python bindings for the effect model.
//!
//! The card-data tooling around this crate is written in Python; these
//! bindings let it validate and normalise effect records without
//! reimplementing the model.
//!
//! # Quick Start
//!
//! ```python
//! import invokator
//!
//! # Normalise one record (defaults filled in, keys sorted)
//! invokator.decode_effect('{"type": "energy", "amount": 1}')
//!
//! # Validate a list, collecting failures instead of raising
//! effects, failures = invokator.decode_effects(raw_json, strict=True)
//! for index, message in failures:
//!     print(index, message)
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use serde_json::Value;

use crate::batch::{decode_batch, encode_batch};
use crate::config::DecodeOptions;
use crate::effects::{decode_with, encode};
use crate::vocab::{EffectType, WireEnum};

fn options(strict: bool) -> DecodeOptions {
    if strict {
        DecodeOptions::new().strict()
    } else {
        DecodeOptions::new()
    }
}

fn parse(json: &str) -> PyResult<Value> {
    serde_json::from_str(json).map_err(|e| PyValueError::new_err(format!("invalid JSON: {}", e)))
}

/// Decode one effect record and return it re-encoded as JSON.
///
/// Raises ValueError if the record is not a valid effect.
#[pyfunction]
#[pyo3(signature = (record, strict = false))]
fn decode_effect(record: &str, strict: bool) -> PyResult<String> {
    let value = parse(record)?;
    let effect =
        decode_with(&value, &options(strict)).map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(encode(&effect).to_string())
}

/// Decode a JSON array of effect records.
///
/// Returns the decoded effects as a JSON array together with a list of
/// `(index, message)` pairs for records that failed.
#[pyfunction]
#[pyo3(signature = (records, strict = false))]
fn decode_effects(records: &str, strict: bool) -> PyResult<(String, Vec<(usize, String)>)> {
    let value = parse(records)?;
    let records = value
        .as_array()
        .ok_or_else(|| PyValueError::new_err("expected a JSON array of effect records"))?;

    let report = decode_batch(records, &options(strict).collect_errors())
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

    let failures = report
        .failures
        .iter()
        .map(|failure| (failure.index, failure.error.to_string()))
        .collect();
    Ok((encode_batch(&report.effects).to_string(), failures))
}

/// All effect type discriminators.
#[pyfunction]
fn effect_types() -> Vec<&'static str> {
    EffectType::wire_values()
}

/// invokator: typed rule effects for the Genius Invokation card game.
#[pymodule]
fn invokator(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(decode_effect, m)?)?;
    m.add_function(wrap_pyfunction!(decode_effects, m)?)?;
    m.add_function(wrap_pyfunction!(effect_types, m)?)?;
    Ok(())
}
