//! The effect discriminator.

use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Discriminator of the effect family.
///
/// Each value is owned by exactly one effect variant; see
/// [`crate::effects::EffectRegistry`].
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
pub enum EffectType {
    Card,
    Attack,
    Heal,
    Summon,
    /// Attaches a named status effect.
    Effect,
    Infuse,
    Switch,
    ForceSwitch,

    Buff,
    Clear,
    Discount,
    Decrement,
    Draw,
    AddDice,
    Destroy,
    Extend,
    Swap,
    Energy,
}

wire_enum!(EffectType, "effect type");
