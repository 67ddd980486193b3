//! The effect model: variants, triggers, dice costs and dispatch.
//!
//! - `Effect`: The closed family of 18 effect variants
//! - `Trigger`: When an effect becomes eligible to activate
//! - `DiceCost`: A number of dice, optionally of one element
//! - `EffectRegistry`: Discriminator-to-variant table, checked on build
//! - `decode` / `encode`: Record conversion through the single dispatch site
//!
//! ## Design Philosophy
//!
//! The model is declarative. It records what an effect is, never what
//! it does at runtime; resolving effects belongs to a rules engine.

mod dice;
mod dispatch;
mod effect;
mod record;
mod registry;
mod trigger;
mod variants;

pub use dice::{DiceCost, DiceList};
pub use dispatch::{decode, decode_with, encode};
pub use effect::Effect;
pub use registry::{EffectRegistry, VariantSpec, VARIANTS};
pub use trigger::Trigger;
pub use variants::{
    AddDiceEffect, AttackEffect, BuffEffect, CardEffect, ClearEffect, DecrementEffect,
    DestroyEffect, DiscountEffect, DrawEffect, EffectVariant, EnergyEffect, ExtendEffect,
    ForceSwitchEffect, HealEffect, InfuseEffect, ReferenceEffect, SummonEffect, SwapEffect,
    SwitchEffect,
};
