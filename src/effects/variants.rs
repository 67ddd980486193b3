//! The concrete effect shapes.
//!
//! Each variant fixes one [`EffectType`] and declares its own fields.
//! Fields with a documented default are filled in when absent; the rest
//! are required.

use serde::Serialize;

use crate::error::ModelError;
use crate::vocab::{
    CardPosition, EffectType, Element, EquipmentType, SidelineLocation, SidelineTarget,
};

use super::dice::DiceList;
use super::record::FieldReader;
use super::trigger::Trigger;

/// Static description of one effect variant.
pub trait EffectVariant {
    /// Discriminator owned by this variant.
    const TYPE: EffectType;

    /// Rust-side name, for diagnostics.
    const NAME: &'static str;

    /// Variant-specific wire fields (excluding `type` and `trigger`).
    const FIELDS: &'static [&'static str];

    /// The subset of `FIELDS` without a default.
    const REQUIRED: &'static [&'static str];
}

/// Construction from a record reader.
pub(crate) trait ReadVariant: EffectVariant + Sized {
    fn read(reader: &FieldReader<'_>) -> Result<Self, ModelError>;
}

macro_rules! variant {
    ($ty:ident, $tag:ident, fields: [$($field:literal),*], required: [$($req:literal),*]) => {
        impl EffectVariant for $ty {
            const TYPE: EffectType = EffectType::$tag;
            const NAME: &'static str = stringify!($ty);
            const FIELDS: &'static [&'static str] = &[$($field),*];
            const REQUIRED: &'static [&'static str] = &[$($req),*];
        }
    };
}

/// Puts a card into play.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CardEffect {
    pub trigger: Trigger,
    pub id: String,
}

variant!(CardEffect, Card, fields: ["id"], required: ["id"]);

impl CardEffect {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            trigger: Trigger::default(),
            id: id.into(),
        }
    }
}

impl ReadVariant for CardEffect {
    fn read(reader: &FieldReader<'_>) -> Result<Self, ModelError> {
        Ok(Self {
            id: reader.string("id")?,
            trigger: reader.trigger()?,
        })
    }
}

/// Deals elemental or physical damage.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct AttackEffect {
    pub trigger: Trigger,
    pub damage: i64,
    pub element: Element,
}

variant!(AttackEffect, Attack, fields: ["damage", "element"], required: ["damage", "element"]);

impl AttackEffect {
    pub fn new(damage: i64, element: Element) -> Self {
        Self {
            trigger: Trigger::default(),
            damage,
            element,
        }
    }
}

impl ReadVariant for AttackEffect {
    fn read(reader: &FieldReader<'_>) -> Result<Self, ModelError> {
        Ok(Self {
            damage: reader.int("damage")?,
            element: reader.wire("element")?,
            trigger: reader.trigger()?,
        })
    }
}

/// Restores hit points.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct HealEffect {
    pub trigger: Trigger,
    pub amount: i64,
}

variant!(HealEffect, Heal, fields: ["amount"], required: ["amount"]);

impl HealEffect {
    pub fn new(amount: i64) -> Self {
        Self {
            trigger: Trigger::default(),
            amount,
        }
    }
}

impl ReadVariant for HealEffect {
    fn read(reader: &FieldReader<'_>) -> Result<Self, ModelError> {
        Ok(Self {
            amount: reader.int("amount")?,
            trigger: reader.trigger()?,
        })
    }
}

/// Places a summon on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SummonEffect {
    pub trigger: Trigger,
    pub id: String,
}

variant!(SummonEffect, Summon, fields: ["id"], required: ["id"]);

impl SummonEffect {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            trigger: Trigger::default(),
            id: id.into(),
        }
    }
}

impl ReadVariant for SummonEffect {
    fn read(reader: &FieldReader<'_>) -> Result<Self, ModelError> {
        Ok(Self {
            id: reader.string("id")?,
            trigger: reader.trigger()?,
        })
    }
}

/// Attaches a named status effect.
///
/// Wire discriminator `effect`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ReferenceEffect {
    pub trigger: Trigger,
    pub id: String,
}

variant!(ReferenceEffect, Effect, fields: ["id"], required: ["id"]);

impl ReferenceEffect {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            trigger: Trigger::default(),
            id: id.into(),
        }
    }
}

impl ReadVariant for ReferenceEffect {
    fn read(reader: &FieldReader<'_>) -> Result<Self, ModelError> {
        Ok(Self {
            id: reader.string("id")?,
            trigger: reader.trigger()?,
        })
    }
}

/// Converts the active character's attacks to an element.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct InfuseEffect {
    pub trigger: Trigger,
    pub element: Element,
}

variant!(InfuseEffect, Infuse, fields: ["element"], required: ["element"]);

impl InfuseEffect {
    pub fn new(element: Element) -> Self {
        Self {
            trigger: Trigger::default(),
            element,
        }
    }
}

impl ReadVariant for InfuseEffect {
    fn read(reader: &FieldReader<'_>) -> Result<Self, ModelError> {
        Ok(Self {
            element: reader.wire("element")?,
            trigger: reader.trigger()?,
        })
    }
}

/// Switches the active character, optionally as a fast action.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct SwitchEffect {
    pub trigger: Trigger,
    pub instant: bool,
}

variant!(SwitchEffect, Switch, fields: ["instant"], required: []);

impl SwitchEffect {
    pub fn new(instant: bool) -> Self {
        Self {
            trigger: Trigger::default(),
            instant,
        }
    }
}

impl ReadVariant for SwitchEffect {
    fn read(reader: &FieldReader<'_>) -> Result<Self, ModelError> {
        Ok(Self {
            instant: reader.bool_or("instant", false)?,
            trigger: reader.trigger()?,
        })
    }
}

/// Forces the opponent's active character to move.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ForceSwitchEffect {
    pub trigger: Trigger,
    pub switch_pos: CardPosition,
}

variant!(ForceSwitchEffect, ForceSwitch, fields: ["switch_pos"], required: ["switch_pos"]);

impl ForceSwitchEffect {
    pub fn new(switch_pos: CardPosition) -> Self {
        Self {
            trigger: Trigger::default(),
            switch_pos,
        }
    }
}

impl ReadVariant for ForceSwitchEffect {
    fn read(reader: &FieldReader<'_>) -> Result<Self, ModelError> {
        Ok(Self {
            switch_pos: reader.wire("switch_pos")?,
            trigger: reader.trigger()?,
        })
    }
}

/// Adds bonus damage.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct BuffEffect {
    pub trigger: Trigger,
    pub amount: i64,
}

variant!(BuffEffect, Buff, fields: ["amount"], required: ["amount"]);

impl BuffEffect {
    pub fn new(amount: i64) -> Self {
        Self {
            trigger: Trigger::default(),
            amount,
        }
    }
}

impl ReadVariant for BuffEffect {
    fn read(reader: &FieldReader<'_>) -> Result<Self, ModelError> {
        Ok(Self {
            amount: reader.int("amount")?,
            trigger: reader.trigger()?,
        })
    }
}

/// Removes the effect's own status.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ClearEffect {
    pub trigger: Trigger,
}

variant!(ClearEffect, Clear, fields: [], required: []);

impl ReadVariant for ClearEffect {
    fn read(reader: &FieldReader<'_>) -> Result<Self, ModelError> {
        Ok(Self {
            trigger: reader.trigger()?,
        })
    }
}

/// Lowers the dice cost of an action.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct DiscountEffect {
    pub trigger: Trigger,
    pub dice: DiceList,
}

variant!(DiscountEffect, Discount, fields: ["dice"], required: ["dice"]);

impl DiscountEffect {
    pub fn new(dice: impl IntoIterator<Item = super::DiceCost>) -> Self {
        Self {
            trigger: Trigger::default(),
            dice: dice.into_iter().collect(),
        }
    }
}

impl ReadVariant for DiscountEffect {
    fn read(reader: &FieldReader<'_>) -> Result<Self, ModelError> {
        Ok(Self {
            dice: reader.dice("dice")?,
            trigger: reader.trigger()?,
        })
    }
}

/// Consumes usages from a counter.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct DecrementEffect {
    pub trigger: Trigger,
    pub amount: i64,
}

variant!(DecrementEffect, Decrement, fields: ["amount"], required: []);

impl DecrementEffect {
    pub fn new(amount: i64) -> Self {
        Self {
            trigger: Trigger::default(),
            amount,
        }
    }
}

impl Default for DecrementEffect {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ReadVariant for DecrementEffect {
    fn read(reader: &FieldReader<'_>) -> Result<Self, ModelError> {
        Ok(Self {
            amount: reader.int_or("amount", 1)?,
            trigger: reader.trigger()?,
        })
    }
}

/// Draws cards.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct DrawEffect {
    pub trigger: Trigger,
    pub amount: i64,
}

variant!(DrawEffect, Draw, fields: ["amount"], required: ["amount"]);

impl DrawEffect {
    pub fn new(amount: i64) -> Self {
        Self {
            trigger: Trigger::default(),
            amount,
        }
    }
}

impl ReadVariant for DrawEffect {
    fn read(reader: &FieldReader<'_>) -> Result<Self, ModelError> {
        Ok(Self {
            amount: reader.int("amount")?,
            trigger: reader.trigger()?,
        })
    }
}

/// Creates dice.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct AddDiceEffect {
    pub trigger: Trigger,
    pub dice: DiceList,
}

variant!(AddDiceEffect, AddDice, fields: ["dice"], required: ["dice"]);

impl AddDiceEffect {
    pub fn new(dice: impl IntoIterator<Item = super::DiceCost>) -> Self {
        Self {
            trigger: Trigger::default(),
            dice: dice.into_iter().collect(),
        }
    }
}

impl ReadVariant for AddDiceEffect {
    fn read(reader: &FieldReader<'_>) -> Result<Self, ModelError> {
        Ok(Self {
            dice: reader.dice("dice")?,
            trigger: reader.trigger()?,
        })
    }
}

/// Removes summons or characters from a side of the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct DestroyEffect {
    pub trigger: Trigger,
    pub target: SidelineTarget,
    pub location: SidelineLocation,
    pub amount: i64,
}

variant!(
    DestroyEffect,
    Destroy,
    fields: ["target", "location", "amount"],
    required: ["target", "location"]
);

impl DestroyEffect {
    pub fn new(target: SidelineTarget, location: SidelineLocation) -> Self {
        Self {
            trigger: Trigger::default(),
            target,
            location,
            amount: 1,
        }
    }

    #[must_use]
    pub fn with_amount(mut self, amount: i64) -> Self {
        self.amount = amount;
        self
    }
}

impl ReadVariant for DestroyEffect {
    fn read(reader: &FieldReader<'_>) -> Result<Self, ModelError> {
        Ok(Self {
            target: reader.wire("target")?,
            location: reader.wire("location")?,
            amount: reader.int_or("amount", 1)?,
            trigger: reader.trigger()?,
        })
    }
}

/// Adds usages to summons or statuses.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ExtendEffect {
    pub trigger: Trigger,
    pub target: SidelineTarget,
    pub location: SidelineLocation,
}

variant!(ExtendEffect, Extend, fields: ["target", "location"], required: ["target"]);

impl ExtendEffect {
    pub fn new(target: SidelineTarget) -> Self {
        Self {
            trigger: Trigger::default(),
            target,
            location: SidelineLocation::Friend,
        }
    }

    #[must_use]
    pub fn at(mut self, location: SidelineLocation) -> Self {
        self.location = location;
        self
    }
}

impl ReadVariant for ExtendEffect {
    fn read(reader: &FieldReader<'_>) -> Result<Self, ModelError> {
        Ok(Self {
            target: reader.wire("target")?,
            location: reader.wire_or("location", SidelineLocation::Friend)?,
            trigger: reader.trigger()?,
        })
    }
}

/// Moves an equipment card to another character.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SwapEffect {
    pub trigger: Trigger,
    pub slot: EquipmentType,
}

variant!(SwapEffect, Swap, fields: ["slot"], required: ["slot"]);

impl SwapEffect {
    pub fn new(slot: EquipmentType) -> Self {
        Self {
            trigger: Trigger::default(),
            slot,
        }
    }
}

impl ReadVariant for SwapEffect {
    fn read(reader: &FieldReader<'_>) -> Result<Self, ModelError> {
        Ok(Self {
            slot: reader.wire("slot")?,
            trigger: reader.trigger()?,
        })
    }
}

/// Grants burst energy.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct EnergyEffect {
    pub trigger: Trigger,
    pub amount: i64,
    pub target: SidelineTarget,
    pub location: SidelineLocation,
}

variant!(
    EnergyEffect,
    Energy,
    fields: ["amount", "target", "location"],
    required: ["amount"]
);

impl EnergyEffect {
    pub fn new(amount: i64) -> Self {
        Self {
            trigger: Trigger::default(),
            amount,
            target: SidelineTarget::ActiveCharacter,
            location: SidelineLocation::Friend,
        }
    }

    #[must_use]
    pub fn targeting(mut self, target: SidelineTarget, location: SidelineLocation) -> Self {
        self.target = target;
        self.location = location;
        self
    }
}

impl ReadVariant for EnergyEffect {
    fn read(reader: &FieldReader<'_>) -> Result<Self, ModelError> {
        Ok(Self {
            amount: reader.int("amount")?,
            target: reader.wire_or("target", SidelineTarget::ActiveCharacter)?,
            location: reader.wire_or("location", SidelineLocation::Friend)?,
            trigger: reader.trigger()?,
        })
    }
}
