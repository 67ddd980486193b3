//! Batch decoding integration tests.

use serde_json::{json, Value};

use invokator::{
    decode_batch, encode_batch, DecodeOptions, Effect, Element, FieldIssue, ModelError,
    RecordFailure,
};

fn card_effects() -> Value {
    json!([
        {"type": "attack", "damage": 3, "element": "Electro", "trigger": {"type": "burst"}},
        {"type": "summon", "id": "oz"},
        {"type": "discount", "dice": [{"amount": 1, "element": "Electro"}]},
        {"type": "energy", "amount": 1, "extra": true}
    ])
}

/// A clean batch decodes every record in order.
#[test]
fn test_clean_batch() {
    let records = card_effects();
    let report = decode_batch(records.as_array().unwrap(), &DecodeOptions::default()).unwrap();

    assert!(report.is_clean());
    assert_eq!(report.effects.len(), 4);
    assert_eq!(report.effects[1], Effect::summon("oz"));
}

/// Strict mode plus collect reports the offending record and keeps the rest.
#[test]
fn test_strict_collect() {
    let records = card_effects();
    let options = DecodeOptions::new().strict().collect_errors();
    let report = decode_batch(records.as_array().unwrap(), &options).unwrap();

    assert_eq!(report.effects.len(), 3);
    assert_eq!(
        report.failures,
        vec![RecordFailure {
            index: 3,
            error: ModelError::InvalidEffectFields {
                effect: invokator::EffectType::Energy,
                field: "extra".to_string(),
                issue: FieldIssue::Unrecognized,
            },
        }]
    );
}

/// Strict mode with the default policy aborts with the record index.
#[test]
fn test_strict_abort() {
    let records = card_effects();
    let err = decode_batch(records.as_array().unwrap(), &DecodeOptions::new().strict()).unwrap_err();

    assert_eq!(err.index, 3);
    assert_eq!(err.source.field_name(), Some("extra"));
    assert!(err.to_string().starts_with("effect record #3 is malformed"));
}

/// Encoded batches decode back to the same effects.
#[test]
fn test_batch_round_trip() {
    let effects = vec![
        Effect::attack(2, Element::Physical),
        Effect::infuse(Element::Dendro),
        Effect::clear(),
    ];
    let encoded = encode_batch(&effects);
    let report = decode_batch(encoded.as_array().unwrap(), &DecodeOptions::new().strict()).unwrap();
    assert_eq!(report.effects, effects);
}
