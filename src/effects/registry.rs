//! Discriminator-to-variant table.
//!
//! The `EffectRegistry` maps every [`EffectType`] to the static
//! description of the variant that owns it. It is built once from the
//! closed [`VARIANTS`] list. A discriminator claimed twice, or not
//! claimed at all, is a defect: for [`VARIANTS`] it is rejected at
//! compile time, and [`EffectRegistry::build`] repeats the check for any
//! other list.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use strum::{EnumCount, IntoEnumIterator};
use tracing::trace;

use crate::error::RegistryError;
use crate::vocab::EffectType;

use super::variants::{
    AddDiceEffect, AttackEffect, BuffEffect, CardEffect, ClearEffect, DecrementEffect,
    DestroyEffect, DiscountEffect, DrawEffect, EffectVariant, EnergyEffect, ExtendEffect,
    ForceSwitchEffect, HealEffect, InfuseEffect, ReferenceEffect, SummonEffect, SwapEffect,
    SwitchEffect,
};

/// Static description of one effect variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariantSpec {
    /// Discriminator owned by the variant.
    pub discriminator: EffectType,
    /// Rust-side name of the variant.
    pub name: &'static str,
    /// Variant-specific wire fields.
    pub fields: &'static [&'static str],
    /// Fields without a default.
    pub required: &'static [&'static str],
}

impl VariantSpec {
    /// Describe variant `V`.
    #[must_use]
    pub const fn of<V: EffectVariant>() -> Self {
        Self {
            discriminator: V::TYPE,
            name: V::NAME,
            fields: V::FIELDS,
            required: V::REQUIRED,
        }
    }

    /// Every field a record of this variant may carry.
    #[must_use]
    pub fn record_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::with_capacity(self.fields.len() + 2);
        fields.push("type");
        fields.push("trigger");
        fields.extend_from_slice(self.fields);
        fields
    }

    /// Whether `field` must be present in a record of this variant.
    #[must_use]
    pub fn is_required(&self, field: &str) -> bool {
        self.required.contains(&field)
    }
}

/// The closed list of effect variants.
///
/// The array length is tied to the number of effect types and every
/// discriminator must appear once, so leaving a variant out or declaring
/// two variants with the same type does not compile.
pub const VARIANTS: [VariantSpec; EffectType::COUNT] = [
    VariantSpec::of::<CardEffect>(),
    VariantSpec::of::<AttackEffect>(),
    VariantSpec::of::<HealEffect>(),
    VariantSpec::of::<SummonEffect>(),
    VariantSpec::of::<ReferenceEffect>(),
    VariantSpec::of::<InfuseEffect>(),
    VariantSpec::of::<SwitchEffect>(),
    VariantSpec::of::<ForceSwitchEffect>(),
    VariantSpec::of::<BuffEffect>(),
    VariantSpec::of::<ClearEffect>(),
    VariantSpec::of::<DiscountEffect>(),
    VariantSpec::of::<DecrementEffect>(),
    VariantSpec::of::<DrawEffect>(),
    VariantSpec::of::<AddDiceEffect>(),
    VariantSpec::of::<DestroyEffect>(),
    VariantSpec::of::<ExtendEffect>(),
    VariantSpec::of::<SwapEffect>(),
    VariantSpec::of::<EnergyEffect>(),
];

const _: () = assert!(
    duplicate_discriminator(&VARIANTS).is_none(),
    "two effect variants claim the same discriminator"
);

/// Index of the first spec whose discriminator an earlier spec already
/// claimed.
pub(crate) const fn duplicate_discriminator(specs: &[VariantSpec]) -> Option<usize> {
    let mut seen = [false; EffectType::COUNT];
    let mut i = 0;
    while i < specs.len() {
        let slot = specs[i].discriminator as usize;
        if seen[slot] {
            return Some(i);
        }
        seen[slot] = true;
        i += 1;
    }
    None
}

/// Lookup table from discriminator to variant description.
///
/// ## Example
///
/// ```
/// use invokator::effects::EffectRegistry;
/// use invokator::EffectType;
///
/// let spec = EffectRegistry::global().spec(EffectType::Energy);
/// assert_eq!(spec.name, "EnergyEffect");
/// assert_eq!(spec.required, &["amount"]);
/// ```
#[derive(Clone, Debug)]
pub struct EffectRegistry {
    variants: FxHashMap<EffectType, VariantSpec>,
}

impl EffectRegistry {
    /// Build a registry from a variant list.
    ///
    /// Fails if two variants share a discriminator or if any effect
    /// type is left without a variant.
    pub fn build(specs: &[VariantSpec]) -> Result<Self, RegistryError> {
        let mut variants = FxHashMap::default();
        variants.reserve(specs.len());

        for spec in specs {
            if let Some(existing) = variants.insert(spec.discriminator, *spec) {
                return Err(RegistryError::AmbiguousDiscriminator {
                    discriminator: spec.discriminator,
                    first: existing.name,
                    second: spec.name,
                });
            }
        }

        if let Some(missing) = EffectType::iter().find(|ty| !variants.contains_key(ty)) {
            return Err(RegistryError::Unmapped(missing));
        }

        trace!(variants = variants.len(), "built effect registry");
        Ok(Self { variants })
    }

    /// The process-wide registry built from [`VARIANTS`].
    ///
    /// Built on first access. [`VARIANTS`] is checked at compile time, so
    /// the build cannot fail; the panic guards the invariant only.
    pub fn global() -> &'static EffectRegistry {
        static REGISTRY: OnceLock<EffectRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            Self::build(&VARIANTS).unwrap_or_else(|err| panic!("invalid effect variant list: {err}"))
        })
    }

    /// Look up a variant description.
    #[must_use]
    pub fn get(&self, effect_type: EffectType) -> Option<&VariantSpec> {
        self.variants.get(&effect_type)
    }

    /// Look up a variant description.
    ///
    /// Total for registries returned by [`EffectRegistry::build`].
    #[must_use]
    pub fn spec(&self, effect_type: EffectType) -> &VariantSpec {
        self.get(effect_type)
            .expect("registry covers every effect type")
    }

    /// Number of registered variants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Iterate over variant descriptions in discriminator order.
    pub fn iter(&self) -> impl Iterator<Item = &VariantSpec> {
        EffectType::iter().filter_map(move |ty| self.variants.get(&ty))
    }
}
