//! Effect activation conditions.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::config::DecodeOptions;
use crate::error::ModelError;
use crate::vocab::{EffectTrigger, ReactionType, TalentType};

use super::record::{deserialize_record, FieldReader};

/// When an effect becomes eligible to activate.
///
/// All parts are optional. A trigger without a kind describes an
/// effect that is always active or passively attached; interpreting
/// that is left to the rules engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Trigger {
    #[serde(rename = "type")]
    pub kind: Option<EffectTrigger>,
    pub talent: Option<TalentType>,
    pub reaction: Option<ReactionType>,
}

impl Trigger {
    /// Wire fields of a trigger record.
    pub const FIELDS: &'static [&'static str] = &["type", "talent", "reaction"];

    /// A trigger firing on `kind`.
    #[must_use]
    pub const fn on(kind: EffectTrigger) -> Self {
        Self {
            kind: Some(kind),
            talent: None,
            reaction: None,
        }
    }

    /// Restrict to a talent kind.
    #[must_use]
    pub fn with_talent(mut self, talent: TalentType) -> Self {
        self.talent = Some(talent);
        self
    }

    /// Restrict to an elemental reaction.
    #[must_use]
    pub fn with_reaction(mut self, reaction: ReactionType) -> Self {
        self.reaction = Some(reaction);
        self
    }

    /// True when no trigger kind is set.
    #[must_use]
    pub const fn is_unconditional(&self) -> bool {
        self.kind.is_none()
    }

    /// Decode a trigger record with default options.
    pub fn from_record(record: &Value) -> Result<Self, ModelError> {
        Self::from_record_with(record, &DecodeOptions::default())
    }

    /// Decode a trigger record.
    pub fn from_record_with(record: &Value, options: &DecodeOptions) -> Result<Self, ModelError> {
        let reader = FieldReader::new(record, options)?;
        let trigger = Self {
            kind: reader.opt_wire("type")?,
            talent: reader.opt_wire("talent")?,
            reaction: reader.opt_wire("reaction")?,
        };
        reader.finish(Self::FIELDS)?;
        Ok(trigger)
    }
}

impl<'de> Deserialize<'de> for Trigger {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_record(deserializer, Self::from_record)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_empty_trigger() {
        let trigger = Trigger::from_record(&json!({})).unwrap();
        assert_eq!(trigger, Trigger::default());
        assert!(trigger.is_unconditional());
    }

    #[test]
    fn test_full_trigger_with_alias() {
        let trigger =
            Trigger::from_record(&json!({"type": "skill", "talent": "E", "reaction": "bloom"}))
                .unwrap();
        assert_eq!(
            trigger,
            Trigger::on(EffectTrigger::Skill)
                .with_talent(TalentType::Skill)
                .with_reaction(ReactionType::Bloom)
        );
    }

    #[test]
    fn test_serializes_every_field() {
        let value = serde_json::to_value(Trigger::on(EffectTrigger::End)).unwrap();
        assert_eq!(value, json!({"type": "end", "talent": null, "reaction": null}));
    }

    #[test]
    fn test_unknown_reaction() {
        let err = Trigger::from_record(&json!({"reaction": "fizzle"})).unwrap_err();
        assert_eq!(err, ModelError::unknown_enum("reaction type", "fizzle").at_field("reaction"));
    }
}
