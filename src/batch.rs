//! Decoding sequences of effect records.
//!
//! Card data usually arrives as lists of effect records. The
//! [`ErrorPolicy`] in [`DecodeOptions`] decides whether one malformed
//! record aborts the batch or is reported next to the decoded effects.

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{DecodeOptions, ErrorPolicy};
use crate::effects::{decode_with, encode, Effect};
use crate::error::{BatchError, ModelError};

/// A record that failed to decode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordFailure {
    /// Position of the record in the input.
    pub index: usize,
    /// Why it failed.
    pub error: ModelError,
}

/// Outcome of a batch decode.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Decoded effects, in input order.
    pub effects: Vec<Effect>,
    /// Records that failed, in input order. Always empty under
    /// [`ErrorPolicy::Abort`].
    pub failures: Vec<RecordFailure>,
}

impl BatchReport {
    /// True when every record decoded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of records seen.
    #[must_use]
    pub fn total(&self) -> usize {
        self.effects.len() + self.failures.len()
    }
}

/// Decode a sequence of effect records.
///
/// ## Example
///
/// ```
/// use invokator::{decode_batch, DecodeOptions};
/// use serde_json::json;
///
/// let records = [json!({"type": "draw", "amount": 2}), json!({"type": "nope"})];
///
/// let err = decode_batch(&records, &DecodeOptions::default()).unwrap_err();
/// assert_eq!(err.index, 1);
///
/// let report = decode_batch(&records, &DecodeOptions::new().collect_errors()).unwrap();
/// assert_eq!(report.effects.len(), 1);
/// assert_eq!(report.failures[0].index, 1);
/// ```
pub fn decode_batch(records: &[Value], options: &DecodeOptions) -> Result<BatchReport, BatchError> {
    let mut report = BatchReport::default();

    for (index, record) in records.iter().enumerate() {
        match decode_with(record, options) {
            Ok(effect) => report.effects.push(effect),
            Err(error) => match options.on_error {
                ErrorPolicy::Abort => return Err(BatchError { index, source: error }),
                ErrorPolicy::Collect => {
                    warn!(index, error = %error, "skipping malformed effect record");
                    report.failures.push(RecordFailure { index, error });
                }
            },
        }
    }

    debug!(
        decoded = report.effects.len(),
        failed = report.failures.len(),
        "decoded effect batch"
    );
    Ok(report)
}

/// Encode a sequence of effects as an array of records.
#[must_use]
pub fn encode_batch(effects: &[Effect]) -> Value {
    Value::Array(effects.iter().map(encode).collect())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::vocab::Element;

    fn records() -> Vec<Value> {
        vec![
            json!({"type": "attack", "damage": 1, "element": "Geo"}),
            json!({"type": "attack", "element": "Geo"}),
            json!("not a record"),
            json!({"type": "clear"}),
        ]
    }

    #[test]
    fn test_abort_reports_first_failure() {
        let err = decode_batch(&records(), &DecodeOptions::default()).unwrap_err();
        assert_eq!(err.index, 1);
        assert_eq!(err.source.field_name(), Some("damage"));
    }

    #[test]
    fn test_collect_keeps_going() {
        let report = decode_batch(&records(), &DecodeOptions::new().collect_errors()).unwrap();

        assert_eq!(report.effects, vec![Effect::attack(1, Element::Geo), Effect::clear()]);
        let indices: Vec<_> = report.failures.iter().map(|f| f.index).collect();
        assert_eq!(indices, vec![1, 2]);
        assert_eq!(report.failures[1].error, ModelError::NotARecord { found: "string" });
        assert_eq!(report.total(), 4);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_empty_batch() {
        let report = decode_batch(&[], &DecodeOptions::default()).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.total(), 0);
    }

    #[test]
    fn test_encode_batch_round_trips() {
        let effects = vec![Effect::draw(1), Effect::summon("oz")];
        let encoded = encode_batch(&effects);
        let records = encoded.as_array().unwrap();

        let report = decode_batch(records, &DecodeOptions::default()).unwrap();
        assert_eq!(report.effects, effects);
    }
}
