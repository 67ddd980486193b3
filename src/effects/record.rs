//! Typed field access over untyped records.
//!
//! A `FieldReader` wraps one JSON object and hands out typed fields.
//! `null` counts as absent everywhere. Failures are reported as
//! context-free `InvalidField` errors; callers attach the enclosing
//! record path or effect type.

use serde::Deserializer;
use serde_json::{Map, Value};

use crate::config::DecodeOptions;
use crate::error::{FieldIssue, ModelError};
use crate::vocab::WireEnum;

use super::dice::{DiceCost, DiceList};
use super::trigger::Trigger;

/// JSON shape name, for error messages.
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn wrong_type(field: &str, expected: &'static str, found: &Value) -> ModelError {
    ModelError::field(
        field,
        FieldIssue::WrongType {
            expected,
            found: kind_of(found),
        },
    )
}

/// Deserialize through a record decoder so serde and direct decoding
/// share one code path.
pub(crate) fn deserialize_record<'de, D, T>(
    deserializer: D,
    decode: impl FnOnce(&Value) -> Result<T, ModelError>,
) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
{
    let value = <Value as serde::Deserialize>::deserialize(deserializer)?;
    decode(&value).map_err(serde::de::Error::custom)
}

pub(crate) struct FieldReader<'a> {
    fields: &'a Map<String, Value>,
    options: &'a DecodeOptions,
}

impl<'a> FieldReader<'a> {
    pub(crate) fn new(record: &'a Value, options: &'a DecodeOptions) -> Result<Self, ModelError> {
        let fields = record.as_object().ok_or(ModelError::NotARecord {
            found: kind_of(record),
        })?;
        Ok(Self { fields, options })
    }

    pub(crate) fn options(&self) -> &'a DecodeOptions {
        self.options
    }

    fn get(&self, field: &str) -> Option<&'a Value> {
        self.fields.get(field).filter(|value| !value.is_null())
    }

    fn require(&self, field: &str) -> Result<&'a Value, ModelError> {
        self.get(field)
            .ok_or_else(|| ModelError::field(field, FieldIssue::Missing))
    }

    /// The raw `type` string, if any.
    pub(crate) fn discriminator(&self) -> Result<&'a str, ModelError> {
        self.get("type")
            .and_then(Value::as_str)
            .ok_or(ModelError::MissingDiscriminator)
    }

    pub(crate) fn string(&self, field: &str) -> Result<String, ModelError> {
        let value = self.require(field)?;
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| wrong_type(field, "string", value))
    }

    fn read_int(field: &str, value: &Value) -> Result<i64, ModelError> {
        value.as_i64().ok_or_else(|| wrong_type(field, "integer", value))
    }

    pub(crate) fn int(&self, field: &str) -> Result<i64, ModelError> {
        Self::read_int(field, self.require(field)?)
    }

    pub(crate) fn int_or(&self, field: &str, default: i64) -> Result<i64, ModelError> {
        self.get(field)
            .map_or(Ok(default), |value| Self::read_int(field, value))
    }

    pub(crate) fn bool_or(&self, field: &str, default: bool) -> Result<bool, ModelError> {
        match self.get(field) {
            None => Ok(default),
            Some(value) => value.as_bool().ok_or_else(|| wrong_type(field, "boolean", value)),
        }
    }

    fn read_wire<E: WireEnum>(field: &str, value: &Value) -> Result<E, ModelError> {
        let wire = value.as_str().ok_or_else(|| wrong_type(field, "string", value))?;
        E::decode(wire).map_err(|err| err.at_field(field))
    }

    pub(crate) fn wire<E: WireEnum>(&self, field: &str) -> Result<E, ModelError> {
        Self::read_wire(field, self.require(field)?)
    }

    pub(crate) fn wire_or<E: WireEnum>(&self, field: &str, default: E) -> Result<E, ModelError> {
        Ok(self.opt_wire(field)?.unwrap_or(default))
    }

    pub(crate) fn opt_wire<E: WireEnum>(&self, field: &str) -> Result<Option<E>, ModelError> {
        self.get(field)
            .map(|value| Self::read_wire(field, value))
            .transpose()
    }

    /// A required list of dice costs.
    pub(crate) fn dice(&self, field: &str) -> Result<DiceList, ModelError> {
        let value = self.require(field)?;
        let entries = value
            .as_array()
            .ok_or_else(|| wrong_type(field, "array", value))?;

        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                DiceCost::from_record_with(entry, self.options)
                    .map_err(|err| err.nested(&format!("{field}[{index}]")))
            })
            .collect()
    }

    /// The shared `trigger` field, defaulting to an empty trigger.
    pub(crate) fn trigger(&self) -> Result<Trigger, ModelError> {
        match self.get("trigger") {
            None => Ok(Trigger::default()),
            Some(value) => {
                Trigger::from_record_with(value, self.options).map_err(|err| err.nested("trigger"))
            }
        }
    }

    /// Reject undeclared fields when the options ask for it.
    pub(crate) fn finish(&self, declared: &[&str]) -> Result<(), ModelError> {
        if !self.options.rejects_unknown_fields() {
            return Ok(());
        }
        match self.fields.keys().find(|key| !declared.contains(&key.as_str())) {
            Some(key) => Err(ModelError::field(key.as_str(), FieldIssue::Unrecognized)),
            None => Ok(()),
        }
    }
}
