//! Decode configuration.
//!
//! Callers tune how strictly records are read and how batches react to
//! malformed records. The defaults are lenient field handling and
//! aborting a batch at its first failure.

use serde::{Deserialize, Serialize};

/// What to do with fields a record's shape does not declare.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownFields {
    /// Skip them, so richer future input still decodes.
    #[default]
    Ignore,
    /// Fail the record with an `Unrecognized` field error.
    Reject,
}

/// How a batch decode reacts to a malformed record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Stop at the first malformed record.
    #[default]
    Abort,
    /// Keep going and report every malformed record.
    Collect,
}

/// Options for decoding effect records.
///
/// ## Example
///
/// ```
/// use invokator::{DecodeOptions, UnknownFields, ErrorPolicy};
///
/// let options = DecodeOptions::new().strict().collect_errors();
/// assert_eq!(options.unknown_fields, UnknownFields::Reject);
/// assert_eq!(options.on_error, ErrorPolicy::Collect);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Handling of undeclared fields.
    pub unknown_fields: UnknownFields,

    /// Batch reaction to malformed records.
    pub on_error: ErrorPolicy,
}

impl DecodeOptions {
    /// Lenient options: unknown fields ignored, batches abort on error.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject fields a record's shape does not declare.
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.unknown_fields = UnknownFields::Reject;
        self
    }

    /// Ignore fields a record's shape does not declare.
    #[must_use]
    pub fn lenient(mut self) -> Self {
        self.unknown_fields = UnknownFields::Ignore;
        self
    }

    /// Report every malformed record in a batch instead of stopping.
    #[must_use]
    pub fn collect_errors(mut self) -> Self {
        self.on_error = ErrorPolicy::Collect;
        self
    }

    /// Stop a batch at its first malformed record.
    #[must_use]
    pub fn abort_on_error(mut self) -> Self {
        self.on_error = ErrorPolicy::Abort;
        self
    }

    /// Whether undeclared fields fail the record.
    #[must_use]
    pub fn rejects_unknown_fields(&self) -> bool {
        self.unknown_fields == UnknownFields::Reject
    }
}
