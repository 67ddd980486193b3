//! Error types for effect decoding and registry construction.
//!
//! Decode-time failures are reported through [`ModelError`]. Registry
//! failures ([`RegistryError`]) are programming defects and only surface
//! while the discriminator table is being built.

use thiserror::Error;

use crate::vocab::EffectType;

/// What went wrong with a single field of a record.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FieldIssue {
    /// A required field is absent or `null`.
    #[error("missing required field")]
    Missing,

    /// The field is present but has the wrong JSON shape.
    #[error("expected {expected}, found {found}")]
    WrongType {
        expected: &'static str,
        found: &'static str,
    },

    /// The field is not part of the record's shape (strict mode only).
    #[error("unrecognized field")]
    Unrecognized,
}

/// Errors raised while decoding a structured record into the effect model.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A wire string is not a member of the named vocabulary.
    ///
    /// `field` is the path of the record field that held the string, or
    /// `None` when a bare wire string was decoded.
    #[error("unknown {kind} value: {value:?}{}", located(.field))]
    UnknownEnumValue {
        kind: &'static str,
        value: String,
        field: Option<String>,
    },

    /// The `type` discriminator is not one of the known effect types.
    #[error("unknown effect type: {0:?}")]
    UnknownEffectType(String),

    /// A variant-specific field failed to decode.
    #[error("invalid field `{field}` for {effect} effect: {issue}")]
    InvalidEffectFields {
        effect: EffectType,
        field: String,
        issue: FieldIssue,
    },

    /// A field of a nested record failed to decode.
    ///
    /// Once the enclosing effect is known this is promoted to
    /// [`ModelError::InvalidEffectFields`].
    #[error("invalid field `{field}`: {issue}")]
    InvalidField { field: String, issue: FieldIssue },

    /// The input is not a key/value record.
    #[error("expected an effect record, found {found}")]
    NotARecord { found: &'static str },

    /// The record has no string `type` field.
    #[error("effect record has no `type` discriminator")]
    MissingDiscriminator,
}

fn located(field: &Option<String>) -> String {
    field
        .as_deref()
        .map(|field| format!(" in field `{field}`"))
        .unwrap_or_default()
}

impl ModelError {
    pub(crate) fn unknown_enum(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownEnumValue {
            kind,
            value: value.into(),
            field: None,
        }
    }

    /// Record which field held an unknown wire string.
    pub(crate) fn at_field(self, field: &str) -> Self {
        match self {
            Self::UnknownEnumValue {
                kind,
                value,
                field: None,
            } => Self::UnknownEnumValue {
                kind,
                value,
                field: Some(field.to_owned()),
            },
            other => other,
        }
    }

    pub(crate) fn field(field: impl Into<String>, issue: FieldIssue) -> Self {
        Self::InvalidField {
            field: field.into(),
            issue,
        }
    }

    /// Prefix the failing field path with the record it was nested in.
    pub(crate) fn nested(self, parent: &str) -> Self {
        match self {
            Self::InvalidField { field, issue } => Self::InvalidField {
                field: format!("{parent}.{field}"),
                issue,
            },
            Self::UnknownEnumValue {
                kind,
                value,
                field: Some(field),
            } => Self::UnknownEnumValue {
                kind,
                value,
                field: Some(format!("{parent}.{field}")),
            },
            Self::NotARecord { found } => Self::field(
                parent,
                FieldIssue::WrongType {
                    expected: "object",
                    found,
                },
            ),
            other => other,
        }
    }

    /// Attach the effect type to a field failure.
    pub(crate) fn in_effect(self, effect: EffectType) -> Self {
        match self {
            Self::InvalidField { field, issue } => Self::InvalidEffectFields {
                effect,
                field,
                issue,
            },
            other => other,
        }
    }

    /// Name of the failing field, if the error concerns one.
    #[must_use]
    pub fn field_name(&self) -> Option<&str> {
        match self {
            Self::InvalidEffectFields { field, .. } | Self::InvalidField { field, .. } => {
                Some(field.as_str())
            }
            Self::UnknownEnumValue { field, .. } => field.as_deref(),
            Self::MissingDiscriminator => Some("type"),
            _ => None,
        }
    }
}

/// Defects in the discriminator-to-variant table.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Two variants claim the same discriminator.
    #[error("effect type {discriminator} is claimed by both {first} and {second}")]
    AmbiguousDiscriminator {
        discriminator: EffectType,
        first: &'static str,
        second: &'static str,
    },

    /// No variant claims this discriminator.
    #[error("effect type {0} has no variant")]
    Unmapped(EffectType),
}

/// A batch decode aborted at the first malformed record.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("effect record #{index} is malformed: {source}")]
pub struct BatchError {
    pub index: usize,
    #[source]
    pub source: ModelError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_prefixes_field_path() {
        let err = ModelError::field("amount", FieldIssue::Missing).nested("dice[1]");
        assert_eq!(err.field_name(), Some("dice[1].amount"));
    }

    #[test]
    fn test_in_effect_promotes_field_errors() {
        let err = ModelError::field("damage", FieldIssue::Missing).in_effect(EffectType::Attack);
        assert_eq!(
            err,
            ModelError::InvalidEffectFields {
                effect: EffectType::Attack,
                field: "damage".to_string(),
                issue: FieldIssue::Missing,
            }
        );
        assert_eq!(
            err.to_string(),
            "invalid field `damage` for attack effect: missing required field"
        );
    }

    #[test]
    fn test_in_effect_keeps_enum_errors() {
        let err = ModelError::unknown_enum("element", "Lava").in_effect(EffectType::Infuse);
        assert!(matches!(err, ModelError::UnknownEnumValue { kind: "element", .. }));
    }

    #[test]
    fn test_enum_errors_carry_nested_path() {
        let err = ModelError::unknown_enum("element", "Lava")
            .at_field("element")
            .nested("dice[3]")
            .in_effect(EffectType::Discount);

        assert_eq!(err.field_name(), Some("dice[3].element"));
        assert_eq!(
            err.to_string(),
            "unknown element value: \"Lava\" in field `dice[3].element`"
        );
    }

    #[test]
    fn test_bare_enum_error_has_no_path() {
        let err = ModelError::unknown_enum("talent type", "X");
        assert_eq!(err.field_name(), None);
        assert_eq!(err.to_string(), "unknown talent type value: \"X\"");
    }
}
