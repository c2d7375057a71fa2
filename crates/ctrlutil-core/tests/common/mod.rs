use std::collections::BTreeMap;

use ctrlutil_core::shape::KeyKind;
use proptest::prelude::*;
use serde_json::{Map, Value};

/// Keys drawn from a tiny alphabet so generated records overlap often
#[allow(dead_code)]
pub fn key_strategy() -> impl Strategy<Value = String> {
    "[a-e]{1,2}"
}

#[allow(dead_code)]
pub fn record_strategy() -> impl Strategy<Value = BTreeMap<String, i64>> {
    prop::collection::btree_map(key_strategy(), any::<i64>(), 0..8)
}

/// JSON record with scalar members of mixed types
#[allow(dead_code)]
pub fn json_record_strategy() -> impl Strategy<Value = Map<String, Value>> {
    let scalar = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,4}".prop_map(Value::String),
    ];
    prop::collection::vec((prop_oneof![key_strategy(), "[0-3]".prop_map(String::from)], scalar), 0..8)
        .prop_map(|members| members.into_iter().collect())
}

/// Index key kinds a hand-written schema may add next to its named fields
#[allow(dead_code)]
pub fn index_kinds_strategy() -> impl Strategy<Value = Vec<KeyKind>> {
    prop::collection::vec(prop_oneof![Just(KeyKind::String), Just(KeyKind::Number)], 0..3)
}

/// Unwrap `json!` fixtures that are known to be objects
#[allow(dead_code)]
pub fn object(value: &Value) -> &Map<String, Value> {
    value.as_object().expect("fixture is a JSON object")
}
