//! Card, equipment and talent vocabularies.

use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Type of a card.
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
pub enum CardType {
    Equipment,
    Event,
}

wire_enum!(CardType, "card type");

/// Slot an equipment card occupies.
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
pub enum EquipmentType {
    Artifact,
    Weapon,
}

wire_enum!(EquipmentType, "equipment type");

/// Kind of a character's talent.
///
/// `A`, `E` and `Q` are accepted as short aliases for normal attacks,
/// elemental skills and bursts. Encoding always yields the long name.
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
pub enum TalentType {
    #[strum(to_string = "normal", serialize = "A")]
    Normal,
    #[strum(to_string = "skill", serialize = "E")]
    Skill,
    #[strum(to_string = "burst", serialize = "Q")]
    Burst,
    #[strum(serialize = "passive")]
    Passive,
}

wire_enum!(TalentType, "talent type");

/// How a card's effect is attached to the board.
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
pub enum CardEffectAttachType {
    Static,
    Dynamic,
}

wire_enum!(CardEffectAttachType, "card effect attach type");

/// Slot a forced switch moves the active character to, relative to the
/// current one.
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
pub enum CardPosition {
    Previous,
    Next,
}

wire_enum!(CardPosition, "card position");
