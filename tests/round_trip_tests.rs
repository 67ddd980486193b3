//! Round-trip property tests.
//!
//! Any validly constructed effect must survive encode followed by
//! decode unchanged, through both the record API and serde.

use proptest::prelude::*;
use strum::IntoEnumIterator;

use invokator::effects::{
    AddDiceEffect, AttackEffect, BuffEffect, CardEffect, DecrementEffect,
    DestroyEffect, DiscountEffect, DrawEffect, EnergyEffect, ExtendEffect, ForceSwitchEffect,
    HealEffect, InfuseEffect, ReferenceEffect, SummonEffect, SwapEffect, SwitchEffect,
};
use invokator::{
    decode, decode_with, encode, CardPosition, DecodeOptions, DiceCost, Effect, EffectTrigger,
    EffectType, Element, EquipmentType, ReactionType, SidelineLocation, SidelineTarget,
    TalentType, Trigger, WireEnum,
};

fn one_of<T: IntoEnumIterator + Clone + std::fmt::Debug + 'static>() -> impl Strategy<Value = T> {
    proptest::sample::select(T::iter().collect::<Vec<_>>())
}

fn trigger() -> impl Strategy<Value = Trigger> {
    (
        proptest::option::of(one_of::<EffectTrigger>()),
        proptest::option::of(one_of::<TalentType>()),
        proptest::option::of(one_of::<ReactionType>()),
    )
        .prop_map(|(kind, talent, reaction)| Trigger { kind, talent, reaction })
}

fn dice() -> impl Strategy<Value = Vec<DiceCost>> {
    proptest::collection::vec(
        (0i64..8, proptest::option::of(one_of::<Element>()))
            .prop_map(|(amount, element)| DiceCost { amount, element }),
        0..6,
    )
}

fn id() -> impl Strategy<Value = String> {
    "[a-z_]{1,12}"
}

fn body() -> impl Strategy<Value = Effect> {
    let amount = -5i64..20;
    prop_oneof![
        id().prop_map(|id| Effect::from(CardEffect::new(id))),
        (amount.clone(), one_of::<Element>())
            .prop_map(|(damage, element)| Effect::from(AttackEffect::new(damage, element))),
        amount.clone().prop_map(|a| Effect::from(HealEffect::new(a))),
        id().prop_map(|id| Effect::from(SummonEffect::new(id))),
        id().prop_map(|id| Effect::from(ReferenceEffect::new(id))),
        one_of::<Element>().prop_map(|e| Effect::from(InfuseEffect::new(e))),
        any::<bool>().prop_map(|instant| Effect::from(SwitchEffect::new(instant))),
        one_of::<CardPosition>().prop_map(|p| Effect::from(ForceSwitchEffect::new(p))),
        amount.clone().prop_map(|a| Effect::from(BuffEffect::new(a))),
        Just(Effect::clear()),
        dice().prop_map(|d| Effect::from(DiscountEffect::new(d))),
        amount.clone().prop_map(|a| Effect::from(DecrementEffect::new(a))),
        amount.clone().prop_map(|a| Effect::from(DrawEffect::new(a))),
        dice().prop_map(|d| Effect::from(AddDiceEffect::new(d))),
        (one_of::<SidelineTarget>(), one_of::<SidelineLocation>(), amount.clone())
            .prop_map(|(t, l, a)| Effect::from(DestroyEffect::new(t, l).with_amount(a))),
        (one_of::<SidelineTarget>(), one_of::<SidelineLocation>())
            .prop_map(|(t, l)| Effect::from(ExtendEffect::new(t).at(l))),
        one_of::<EquipmentType>().prop_map(|s| Effect::from(SwapEffect::new(s))),
        (amount, one_of::<SidelineTarget>(), one_of::<SidelineLocation>())
            .prop_map(|(a, t, l)| Effect::from(EnergyEffect::new(a).targeting(t, l))),
    ]
}

fn effect() -> impl Strategy<Value = Effect> {
    (body(), trigger()).prop_map(|(effect, trigger)| effect.with_trigger(trigger))
}

proptest! {
    #[test]
    fn prop_decode_inverts_encode(effect in effect()) {
        let record = encode(&effect);
        prop_assert_eq!(decode(&record), Ok(effect));
    }

    #[test]
    fn prop_encoded_records_pass_strict_mode(effect in effect()) {
        let record = encode(&effect);
        prop_assert!(decode_with(&record, &DecodeOptions::new().strict()).is_ok());
    }

    #[test]
    fn prop_serde_round_trip(effect in effect()) {
        let json = serde_json::to_string(&effect).unwrap();
        let back: Effect = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, effect);
    }

    #[test]
    fn prop_encoded_type_matches(effect in effect()) {
        let record = encode(&effect);
        let wire = record["type"].as_str().unwrap();
        prop_assert_eq!(EffectType::decode(wire), Ok(effect.effect_type()));
    }
}
