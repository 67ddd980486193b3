//! Sideline target and location vocabularies.

use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Which kind of board entity an effect acts upon.
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
pub enum SidelineTarget {
    Summon,
    FriendSummon,
    EnemySummon,
    Character,
    ActiveCharacter,
}

wire_enum!(SidelineTarget, "sideline target");

/// Whose side of the board an effect acts upon.
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
pub enum SidelineLocation {
    Friend,
    Enemy,
}

wire_enum!(SidelineLocation, "sideline location");

impl SidelineLocation {
    /// The other side of the board.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Friend => Self::Enemy,
            Self::Enemy => Self::Friend,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::WireEnum;

    #[test]
    fn test_target_wire_values() {
        assert_eq!(
            SidelineTarget::wire_values(),
            vec!["summon", "friend_summon", "enemy_summon", "character", "active_character"]
        );
    }

    #[test]
    fn test_location_opposite() {
        assert_eq!(SidelineLocation::Friend.opposite(), SidelineLocation::Enemy);
        assert_eq!(SidelineLocation::Enemy.opposite().encode(), "friend");
    }
}
