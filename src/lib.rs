//! # invokator
//!
//! Typed rule-effect model for the Genius Invokation trading card game.
//!
//! ## Design Principles
//!
//! 1. **Declarative**: Effects describe what a card or skill does, never
//!    how a rules engine carries it out.
//!
//! 2. **Closed Family**: The 18 effect variants are listed in one place.
//!    Adding one is a deliberate edit that the compiler checks at every
//!    dispatch site.
//!
//! 3. **Lossless Wire Form**: Records decode into strongly-typed effects
//!    and encode back with every field present.
//!
//! ## Modules
//!
//! - `vocab`: Closed string-backed vocabularies (elements, talents, ...)
//! - `effects`: Effect variants, triggers, dice costs and dispatch
//! - `batch`: Decoding lists of records with abort/collect policies
//! - `config`: Decode options
//! - `error`: Error types

pub mod batch;
pub mod config;
pub mod effects;
pub mod error;
pub mod vocab;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::vocab::{
    CardEffectAttachType, CardPosition, CardType, EffectTrigger, EffectType, Element,
    EquipmentType, ReactionType, SidelineLocation, SidelineTarget, TalentType, WireEnum,
};

pub use crate::effects::{
    decode, decode_with, encode, DiceCost, DiceList, Effect, EffectRegistry, EffectVariant,
    Trigger, VariantSpec,
};

pub use crate::batch::{decode_batch, encode_batch, BatchReport, RecordFailure};
pub use crate::config::{DecodeOptions, ErrorPolicy, UnknownFields};
pub use crate::error::{BatchError, FieldIssue, ModelError, RegistryError};
