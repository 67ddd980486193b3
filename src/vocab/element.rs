//! Elemental types.

use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Elemental type of a character, a die, or a damage instance.
///
/// The seven playable elements are capitalised on the wire. `omni`,
/// `physical` and `infused` are bookkeeping pseudo-elements: omni dice
/// match any element, physical damage carries no element, and infused
/// damage takes the element of the attacker's current infusion.
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
pub enum Element {
    Anemo,
    Cryo,
    Dendro,
    Electro,
    Geo,
    Hydro,
    Pyro,

    #[strum(serialize = "omni")]
    Omni,
    #[strum(serialize = "physical")]
    Physical,

    #[strum(serialize = "infused")]
    Infused,
}

wire_enum!(Element, "element");

impl Element {
    /// Elements a character can actually have.
    pub const PLAYABLE: [Element; 7] = [
        Element::Anemo,
        Element::Cryo,
        Element::Dendro,
        Element::Electro,
        Element::Geo,
        Element::Hydro,
        Element::Pyro,
    ];

    /// Whether this is one of the seven playable elements.
    #[must_use]
    pub const fn is_playable(self) -> bool {
        !matches!(self, Element::Omni | Element::Physical | Element::Infused)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::WireEnum;

    #[test]
    fn test_wire_spelling() {
        assert_eq!(Element::Pyro.encode(), "Pyro");
        assert_eq!(Element::Omni.encode(), "omni");
        assert_eq!(Element::decode("Hydro"), Ok(Element::Hydro));
        assert!(Element::decode("pyro").is_err());
    }

    #[test]
    fn test_playable() {
        assert!(Element::PLAYABLE.iter().all(|e| e.is_playable()));
        assert!(!Element::Physical.is_playable());
        assert!(!Element::Infused.is_playable());
        assert_eq!(Element::COUNT, 10);
    }
}
