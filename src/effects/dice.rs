//! Elemental dice costs.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use smallvec::SmallVec;

use crate::config::DecodeOptions;
use crate::error::ModelError;
use crate::vocab::Element;

use super::record::{deserialize_record, FieldReader};

/// Dice costs carried by discount and add-dice effects.
pub type DiceList = SmallVec<[DiceCost; 4]>;

/// A number of dice, optionally of a specific element.
///
/// No element means any element will do.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct DiceCost {
    pub amount: i64,
    pub element: Option<Element>,
}

impl DiceCost {
    /// Wire fields of a dice record.
    pub const FIELDS: &'static [&'static str] = &["amount", "element"];

    /// Create a cost of `amount` dice of `element`.
    #[must_use]
    pub const fn new(amount: i64, element: Element) -> Self {
        Self {
            amount,
            element: Some(element),
        }
    }

    /// Create a cost of `amount` dice of any element.
    #[must_use]
    pub const fn any(amount: i64) -> Self {
        Self {
            amount,
            element: None,
        }
    }

    /// Whether any element satisfies this cost.
    #[must_use]
    pub const fn is_wildcard(&self) -> bool {
        self.element.is_none()
    }

    /// Decode a dice record with default options.
    pub fn from_record(record: &Value) -> Result<Self, ModelError> {
        Self::from_record_with(record, &DecodeOptions::default())
    }

    /// Decode a dice record.
    pub fn from_record_with(record: &Value, options: &DecodeOptions) -> Result<Self, ModelError> {
        let reader = FieldReader::new(record, options)?;
        let cost = Self {
            amount: reader.int_or("amount", 0)?,
            element: reader.opt_wire("element")?,
        };
        reader.finish(Self::FIELDS)?;
        Ok(cost)
    }
}

impl<'de> Deserialize<'de> for DiceCost {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_record(deserializer, Self::from_record)
    }
}
