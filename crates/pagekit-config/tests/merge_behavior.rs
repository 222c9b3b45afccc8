//! Tests for the overlay merge policy.

use pagekit_config::{Configuration, merge_values, merged_value};
use proptest::prelude::*;
use serde_json::{Value, json};

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::from),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-c]", inner, 0..4)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn merge_is_deterministic(base in value(), overlay in value()) {
        prop_assert_eq!(merged_value(&base, &overlay), merged_value(&base, &overlay));
    }

    #[test]
    fn shared_sequences_concatenate(
        base in prop::collection::vec(value(), 0..6),
        overlay in prop::collection::vec(value(), 0..6),
    ) {
        let merged = merged_value(
            &json!({ "plugins": base.clone() }),
            &json!({ "plugins": overlay.clone() }),
        );
        let plugins = merged["plugins"].as_array().unwrap();

        prop_assert_eq!(plugins.len(), base.len() + overlay.len());
        prop_assert_eq!(&plugins[..base.len()], &base[..]);
        prop_assert_eq!(&plugins[base.len()..], &overlay[..]);
    }

    #[test]
    fn shared_scalars_take_overlay(base in scalar(), overlay in scalar()) {
        let merged = merged_value(&json!({ "mode": base }), &json!({ "mode": overlay.clone() }));
        prop_assert_eq!(&merged["mode"], &overlay);
    }

    #[test]
    fn keys_only_in_base_survive(base in value(), overlay in value()) {
        let merged = merged_value(
            &json!({ "keep": base.clone(), "shared": 1 }),
            &json!({ "shared": overlay }),
        );
        prop_assert_eq!(&merged["keep"], &base);
    }
}

#[test]
fn deeply_nested_mappings_merge() {
    let base = json!({
        "module": { "rules": [{ "loader": "babel-loader" }], "strict": true },
        "output": { "path": "/dist", "filename": "[name].js" }
    });
    let overlay = json!({
        "module": { "rules": [{ "loader": "css-loader" }] },
        "output": { "filename": "[name].[hash].js", "publicPath": "/" }
    });

    let merged = merged_value(&base, &overlay);
    assert_eq!(
        merged,
        json!({
            "module": {
                "rules": [{ "loader": "babel-loader" }, { "loader": "css-loader" }],
                "strict": true
            },
            "output": { "path": "/dist", "filename": "[name].[hash].js", "publicPath": "/" }
        })
    );
}

#[test]
fn sequences_inside_sequences_are_opaque() {
    let mut target = json!({ "matrix": [[1, 2]] });
    merge_values(&mut target, &json!({ "matrix": [[3]] }));
    assert_eq!(target["matrix"], json!([[1, 2], [3]]));
}

#[test]
fn overlay_adds_missing_keys() {
    let merged = merged_value(&json!({ "entry": "./src" }), &json!({ "devtool": "eval" }));
    assert_eq!(merged, json!({ "entry": "./src", "devtool": "eval" }));
}

#[test]
fn configuration_merge_matches_value_merge() {
    let base = json!({ "plugins": ["A"], "output": { "path": "/dist" } });
    let overlay = json!({ "plugins": ["B"], "output": { "publicPath": "/" } });

    let merged = Configuration::from_value(base.clone())
        .merged(&Configuration::from_value(overlay.clone()));
    assert_eq!(merged.into_value(), merged_value(&base, &overlay));
}

#[test]
fn merge_preserves_key_order() {
    let merged = merged_value(
        &json!({ "entry": 1, "plugins": [], "output": {} }),
        &json!({ "mode": "development", "entry": 2 }),
    );
    let keys: Vec<_> = merged.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["entry", "plugins", "output", "mode"]);
}
