//! Discriminator-driven decoding.
//!
//! Decoding reads the `type` tag, resolves it to an [`EffectType`], and
//! hands the record to the one variant that owns that type. The
//! variant reads its own fields; undeclared fields are checked against
//! the registry entry when the options are strict.

use serde_json::Value;
use tracing::{debug, trace};

use crate::config::DecodeOptions;
use crate::error::ModelError;
use crate::vocab::{EffectType, WireEnum};

use super::effect::Effect;
use super::record::FieldReader;
use super::registry::EffectRegistry;
use super::variants::{
    AddDiceEffect, AttackEffect, BuffEffect, CardEffect, ClearEffect, DecrementEffect,
    DestroyEffect, DiscountEffect, DrawEffect, EffectVariant, EnergyEffect, ExtendEffect,
    ForceSwitchEffect, HealEffect, InfuseEffect, ReadVariant, ReferenceEffect, SummonEffect,
    SwapEffect, SwitchEffect,
};

/// Decode one effect record with lenient options.
///
/// ## Example
///
/// ```
/// use invokator::{decode, Effect, SidelineLocation, SidelineTarget};
/// use serde_json::json;
///
/// let effect = decode(&json!({"type": "energy", "amount": 1})).unwrap();
/// let Effect::Energy(energy) = effect else { panic!("expected energy") };
/// assert_eq!(energy.target, SidelineTarget::ActiveCharacter);
/// assert_eq!(energy.location, SidelineLocation::Friend);
/// ```
pub fn decode(record: &Value) -> Result<Effect, ModelError> {
    decode_with(record, &DecodeOptions::default())
}

/// Decode one effect record.
pub fn decode_with(record: &Value, options: &DecodeOptions) -> Result<Effect, ModelError> {
    let result = decode_record(record, options);
    match &result {
        Ok(effect) => trace!(effect_type = %effect.effect_type(), "decoded effect"),
        Err(err) => debug!(error = %err, "rejected effect record"),
    }
    result
}

fn decode_record(record: &Value, options: &DecodeOptions) -> Result<Effect, ModelError> {
    let reader = FieldReader::new(record, options)?;
    let tag = reader.discriminator()?;
    let effect_type =
        EffectType::decode(tag).map_err(|_| ModelError::UnknownEffectType(tag.to_owned()))?;

    let effect = read_variant(effect_type, &reader).map_err(|err| err.in_effect(effect_type))?;

    if reader.options().rejects_unknown_fields() {
        let spec = EffectRegistry::global().spec(effect_type);
        reader
            .finish(&spec.record_fields())
            .map_err(|err| err.in_effect(effect_type))?;
    }
    Ok(effect)
}

/// Match each discriminator to its variant reader. Every arm is also
/// checked at compile time against the variant's own `TYPE`, so an arm
/// and a variant declaration cannot disagree.
macro_rules! dispatch {
    ($effect_type:expr, $reader:expr; $($tag:ident => $ty:ident),* $(,)?) => {{
        $(
            const _: () = assert!(
                <$ty as EffectVariant>::TYPE as usize == EffectType::$tag as usize,
                "dispatch arm does not match the variant's effect type",
            );
        )*
        match $effect_type {
            $(EffectType::$tag => $ty::read($reader)?.into(),)*
        }
    }};
}

/// The single dispatch site. Adding an [`EffectType`] without a branch
/// here fails to compile.
fn read_variant(effect_type: EffectType, reader: &FieldReader<'_>) -> Result<Effect, ModelError> {
    Ok(dispatch!(effect_type, reader;
        Card => CardEffect,
        Attack => AttackEffect,
        Heal => HealEffect,
        Summon => SummonEffect,
        Effect => ReferenceEffect,
        Infuse => InfuseEffect,
        Switch => SwitchEffect,
        ForceSwitch => ForceSwitchEffect,
        Buff => BuffEffect,
        Clear => ClearEffect,
        Discount => DiscountEffect,
        Decrement => DecrementEffect,
        Draw => DrawEffect,
        AddDice => AddDiceEffect,
        Destroy => DestroyEffect,
        Extend => ExtendEffect,
        Swap => SwapEffect,
        Energy => EnergyEffect,
    ))
}

/// Encode an effect as a record with every field present.
///
/// Keys are sorted; absent optionals are `null`.
///
/// # Panics
///
/// Never in practice: effects hold only string-keyed records, integers,
/// booleans and strings, none of which `serde_json` can refuse.
#[must_use]
pub fn encode(effect: &Effect) -> Value {
    serde_json::to_value(effect).expect("effects always encode to JSON")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use strum::IntoEnumIterator;

    use crate::error::FieldIssue;
    use crate::vocab::Element;

    fn required_fields(effect_type: EffectType) -> Value {
        match effect_type {
            EffectType::Card | EffectType::Summon | EffectType::Effect => json!({"id": "x"}),
            EffectType::Attack => json!({"damage": 1, "element": "Pyro"}),
            EffectType::Heal | EffectType::Buff | EffectType::Draw | EffectType::Energy => {
                json!({"amount": 1})
            }
            EffectType::Infuse => json!({"element": "Cryo"}),
            EffectType::ForceSwitch => json!({"switch_pos": "next"}),
            EffectType::Discount | EffectType::AddDice => json!({"dice": [{"amount": 1}]}),
            EffectType::Destroy => json!({"target": "summon", "location": "enemy"}),
            EffectType::Extend => json!({"target": "friend_summon"}),
            EffectType::Swap => json!({"slot": "weapon"}),
            EffectType::Switch | EffectType::Clear | EffectType::Decrement => json!({}),
        }
    }

    #[test]
    fn test_dispatches_on_type() {
        let effect = decode(&json!({"type": "heal", "amount": 2})).unwrap();
        assert_eq!(effect, Effect::heal(2));
    }

    #[test]
    fn test_default_decode_keeps_each_type() {
        let registry = EffectRegistry::global();
        for effect_type in EffectType::iter() {
            let mut record = required_fields(effect_type);
            record["type"] = json!(effect_type.encode());

            let effect = decode(&record).unwrap();
            assert_eq!(effect.effect_type(), effect_type);
            assert_eq!(registry.spec(effect_type).discriminator, effect_type);

            let encoded = encode(&effect);
            assert_eq!(encoded["type"], json!(effect_type.encode()));
            assert_eq!(decode(&encoded), Ok(effect));
        }
    }

    #[test]
    fn test_unknown_type() {
        let err = decode(&json!({"type": "frobnicate"})).unwrap_err();
        assert_eq!(err, ModelError::UnknownEffectType("frobnicate".to_string()));
    }

    #[test]
    fn test_missing_discriminator() {
        assert_eq!(
            decode(&json!({"amount": 2})),
            Err(ModelError::MissingDiscriminator)
        );
        assert_eq!(
            decode(&json!({"type": 7})),
            Err(ModelError::MissingDiscriminator)
        );
    }

    #[test]
    fn test_missing_required_field() {
        let err = decode(&json!({"type": "attack", "element": "Pyro"})).unwrap_err();
        assert_eq!(
            err,
            ModelError::InvalidEffectFields {
                effect: EffectType::Attack,
                field: "damage".to_string(),
                issue: FieldIssue::Missing,
            }
        );
    }

    #[test]
    fn test_bad_trigger_is_effect_field() {
        let err = decode(&json!({"type": "clear", "trigger": "always"})).unwrap_err();
        assert_eq!(err.field_name(), Some("trigger"));
        assert!(matches!(
            err,
            ModelError::InvalidEffectFields { effect: EffectType::Clear, .. }
        ));
    }

    #[test]
    fn test_strict_rejects_unknown_field() {
        let record = json!({"type": "infuse", "element": "Cryo", "duration": 2});
        assert_eq!(decode(&record), Ok(Effect::infuse(Element::Cryo)));

        let err = decode_with(&record, &DecodeOptions::new().strict()).unwrap_err();
        assert_eq!(
            err,
            ModelError::InvalidEffectFields {
                effect: EffectType::Infuse,
                field: "duration".to_string(),
                issue: FieldIssue::Unrecognized,
            }
        );
    }

    #[test]
    fn test_strict_accepts_declared_fields() {
        let record = json!({
            "type": "destroy",
            "target": "summon",
            "location": "enemy",
            "amount": 2,
            "trigger": {"type": "used"}
        });
        assert!(decode_with(&record, &DecodeOptions::new().strict()).is_ok());
    }

    #[test]
    fn test_encode_fills_defaults() {
        let effect = decode(&json!({"type": "switch"})).unwrap();
        assert_eq!(
            encode(&effect),
            json!({
                "type": "switch",
                "instant": false,
                "trigger": {"type": null, "talent": null, "reaction": null}
            })
        );
    }
}
