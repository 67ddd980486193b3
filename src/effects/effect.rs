//! The closed effect family.

use serde::ser::Serializer;
use serde::{Deserialize, Deserializer, Serialize};

use crate::vocab::{Element, EffectType};

use super::dispatch;
use super::record::deserialize_record;
use super::trigger::Trigger;
use super::variants::{
    AddDiceEffect, AttackEffect, BuffEffect, CardEffect, ClearEffect, DecrementEffect,
    DestroyEffect, DiscountEffect, DrawEffect, EffectVariant, EnergyEffect, ExtendEffect,
    ForceSwitchEffect, HealEffect, InfuseEffect, ReferenceEffect, SummonEffect, SwapEffect,
    SwitchEffect,
};

/// Run `$body` with `$e` bound to the variant payload.
macro_rules! with_variant {
    ($effect:expr, $e:ident => $body:expr) => {
        match $effect {
            Effect::Card($e) => $body,
            Effect::Attack($e) => $body,
            Effect::Heal($e) => $body,
            Effect::Summon($e) => $body,
            Effect::Reference($e) => $body,
            Effect::Infuse($e) => $body,
            Effect::Switch($e) => $body,
            Effect::ForceSwitch($e) => $body,
            Effect::Buff($e) => $body,
            Effect::Clear($e) => $body,
            Effect::Discount($e) => $body,
            Effect::Decrement($e) => $body,
            Effect::Draw($e) => $body,
            Effect::AddDice($e) => $body,
            Effect::Destroy($e) => $body,
            Effect::Extend($e) => $body,
            Effect::Swap($e) => $body,
            Effect::Energy($e) => $body,
        }
    };
}

/// A declarative card-game rule effect.
///
/// Effects describe what a card, skill or status does, not how the
/// rules engine carries it out. Every variant owns exactly one
/// [`EffectType`] and carries a [`Trigger`].
///
/// ## Wire Form
///
/// On the wire an effect is a flat record: the `type` discriminator,
/// an optional `trigger` record, and the variant's own fields.
/// Deserialization goes through [`crate::decode`], so unknown
/// discriminators and malformed fields surface as
/// [`crate::ModelError`]s.
///
/// ```
/// use invokator::{Effect, Element};
///
/// let effect: Effect =
///     serde_json::from_str(r#"{"type": "attack", "damage": 2, "element": "Pyro"}"#).unwrap();
/// assert_eq!(effect, Effect::attack(2, Element::Pyro));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Effect {
    Card(CardEffect),
    Attack(AttackEffect),
    Heal(HealEffect),
    Summon(SummonEffect),
    Reference(ReferenceEffect),
    Infuse(InfuseEffect),
    Switch(SwitchEffect),
    ForceSwitch(ForceSwitchEffect),
    Buff(BuffEffect),
    Clear(ClearEffect),
    Discount(DiscountEffect),
    Decrement(DecrementEffect),
    Draw(DrawEffect),
    AddDice(AddDiceEffect),
    Destroy(DestroyEffect),
    Extend(ExtendEffect),
    Swap(SwapEffect),
    Energy(EnergyEffect),
}

impl Effect {
    /// The discriminator of this effect.
    #[must_use]
    pub fn effect_type(&self) -> EffectType {
        match self {
            Self::Card(_) => CardEffect::TYPE,
            Self::Attack(_) => AttackEffect::TYPE,
            Self::Heal(_) => HealEffect::TYPE,
            Self::Summon(_) => SummonEffect::TYPE,
            Self::Reference(_) => ReferenceEffect::TYPE,
            Self::Infuse(_) => InfuseEffect::TYPE,
            Self::Switch(_) => SwitchEffect::TYPE,
            Self::ForceSwitch(_) => ForceSwitchEffect::TYPE,
            Self::Buff(_) => BuffEffect::TYPE,
            Self::Clear(_) => ClearEffect::TYPE,
            Self::Discount(_) => DiscountEffect::TYPE,
            Self::Decrement(_) => DecrementEffect::TYPE,
            Self::Draw(_) => DrawEffect::TYPE,
            Self::AddDice(_) => AddDiceEffect::TYPE,
            Self::Destroy(_) => DestroyEffect::TYPE,
            Self::Extend(_) => ExtendEffect::TYPE,
            Self::Swap(_) => SwapEffect::TYPE,
            Self::Energy(_) => EnergyEffect::TYPE,
        }
    }

    /// The activation condition of this effect.
    #[must_use]
    pub fn trigger(&self) -> &Trigger {
        with_variant!(self, e => &e.trigger)
    }

    /// Replace the activation condition.
    #[must_use]
    pub fn with_trigger(mut self, trigger: Trigger) -> Self {
        with_variant!(&mut self, e => e.trigger = trigger);
        self
    }

    // === Convenience constructors ===

    /// Deal `damage` of `element`.
    pub fn attack(damage: i64, element: Element) -> Self {
        AttackEffect::new(damage, element).into()
    }

    /// Heal `amount` hit points.
    pub fn heal(amount: i64) -> Self {
        HealEffect::new(amount).into()
    }

    /// Draw `amount` cards.
    pub fn draw(amount: i64) -> Self {
        DrawEffect::new(amount).into()
    }

    /// Add `amount` bonus damage.
    pub fn buff(amount: i64) -> Self {
        BuffEffect::new(amount).into()
    }

    /// Summon `id`.
    pub fn summon(id: impl Into<String>) -> Self {
        SummonEffect::new(id).into()
    }

    /// Attach status effect `id`.
    pub fn status(id: impl Into<String>) -> Self {
        ReferenceEffect::new(id).into()
    }

    /// Infuse attacks with `element`.
    pub fn infuse(element: Element) -> Self {
        InfuseEffect::new(element).into()
    }

    /// Grant `amount` energy to the friendly active character.
    pub fn energy(amount: i64) -> Self {
        EnergyEffect::new(amount).into()
    }

    /// Remove the effect's own status.
    pub fn clear() -> Self {
        ClearEffect::default().into()
    }
}

impl Serialize for Effect {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        struct Tagged<'a, T> {
            #[serde(rename = "type")]
            kind: EffectType,
            #[serde(flatten)]
            body: &'a T,
        }

        let kind = self.effect_type();
        with_variant!(self, e => Tagged { kind, body: e }.serialize(serializer))
    }
}

impl<'de> Deserialize<'de> for Effect {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_record(deserializer, dispatch::decode)
    }
}

macro_rules! into_effect {
    ($($variant:ident($ty:ident)),* $(,)?) => {
        $(
            impl From<$ty> for Effect {
                fn from(effect: $ty) -> Self {
                    Self::$variant(effect)
                }
            }
        )*
    };
}

into_effect!(
    Card(CardEffect),
    Attack(AttackEffect),
    Heal(HealEffect),
    Summon(SummonEffect),
    Reference(ReferenceEffect),
    Infuse(InfuseEffect),
    Switch(SwitchEffect),
    ForceSwitch(ForceSwitchEffect),
    Buff(BuffEffect),
    Clear(ClearEffect),
    Discount(DiscountEffect),
    Decrement(DecrementEffect),
    Draw(DrawEffect),
    AddDice(AddDiceEffect),
    Destroy(DestroyEffect),
    Extend(ExtendEffect),
    Swap(SwapEffect),
    Energy(EnergyEffect),
);
