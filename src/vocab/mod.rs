//! Closed vocabularies used as field types across the effect model.
//!
//! Every enum here is string-backed: the wire string is both the decode
//! key and the encode value, and it is unique within its enum.
//!
//! ## Key Types
//!
//! - `Element`: Elemental types plus the `omni`, `physical` and
//!   `infused` bookkeeping pseudo-elements
//! - `TalentType`: Talent kinds, accepting the `A`/`E`/`Q` short aliases
//! - `EffectType`: The discriminator of the effect family
//! - `SidelineTarget` / `SidelineLocation`: Which board entity and whose side

use std::str::FromStr;

use strum::IntoEnumIterator;

use crate::error::ModelError;

/// A closed, string-backed vocabulary.
///
/// Decoding accepts every spelling the enum knows (including aliases);
/// encoding always produces the canonical spelling.
pub trait WireEnum:
    Copy + Eq + FromStr + IntoEnumIterator + Into<&'static str> + 'static
{
    /// Human-readable vocabulary name, used in error messages.
    const KIND: &'static str;

    /// Decode a wire string.
    fn decode(wire: &str) -> Result<Self, ModelError> {
        Self::from_str(wire).map_err(|_| ModelError::unknown_enum(Self::KIND, wire))
    }

    /// Encode to the canonical wire string.
    fn encode(self) -> &'static str {
        self.into()
    }

    /// All canonical wire strings, in declaration order.
    fn wire_values() -> Vec<&'static str> {
        Self::iter().map(Self::encode).collect()
    }
}

/// Implement [`WireEnum`] and string-based serde for a strum enum.
///
/// Reaches the submodules below through textual scope, so it must stay
/// above their `mod` declarations.
macro_rules! wire_enum {
    ($ty:ty, $kind:literal) => {
        impl $crate::vocab::WireEnum for $ty {
            const KIND: &'static str = $kind;
        }

        impl ::serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str($crate::vocab::WireEnum::encode(*self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let wire = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                <$ty as $crate::vocab::WireEnum>::decode(&wire).map_err(::serde::de::Error::custom)
            }
        }
    };
}

mod card;
mod effect_type;
mod element;
mod sideline;
mod trigger;

pub use card::{CardEffectAttachType, CardPosition, CardType, EquipmentType, TalentType};
pub use effect_type::EffectType;
pub use element::Element;
pub use sideline::{SidelineLocation, SidelineTarget};
pub use trigger::{EffectTrigger, ReactionType};
