//! Trigger and elemental reaction vocabularies.

use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Game event that makes an effect eligible to activate.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    IntoStaticStr,
    EnumIter,
    EnumCount,
)]
#[strum(serialize_all = "lowercase")]
pub enum EffectTrigger {
    /// The card or skill carrying the effect was used.
    Used,
    Attack,
    Normal,
    Skill,
    Burst,
    /// A usage counter reached zero.
    Depleted,
    /// Start of the round.
    Start,
    /// End of the round.
    End,
    Switch,

    Swirl,

    /// The summon or support was placed on the board.
    Deploy,
}

wire_enum!(EffectTrigger, "effect trigger");

/// Elemental reaction qualifying a trigger.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    IntoStaticStr,
    EnumIter,
    EnumCount,
)]
#[strum(serialize_all = "snake_case")]
pub enum ReactionType {
    Melt,
    Vaporize,
    Overloaded,
    Superconduct,
    ElectroCharged,
    Frozen,
    Swirl,
    Crystallize,
    Bloom,
    Burning,
    Quicken,
}

wire_enum!(ReactionType, "reaction type");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::WireEnum;

    #[test]
    fn test_trigger_wire_values() {
        assert_eq!(EffectTrigger::Depleted.encode(), "depleted");
        assert_eq!(EffectTrigger::decode("deploy"), Ok(EffectTrigger::Deploy));
        assert_eq!(EffectTrigger::COUNT, 11);
    }

    #[test]
    fn test_reaction_snake_case() {
        assert_eq!(ReactionType::ElectroCharged.encode(), "electro_charged");
        assert_eq!(ReactionType::decode("superconduct"), Ok(ReactionType::Superconduct));
    }
}
