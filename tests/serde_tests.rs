#![cfg(feature = "serde")]

//! Integration tests for serde support in refset.
//!
//! Sets serialize as JSON arrays in traversal order. Deserializing collapses
//! duplicates, so a round trip always preserves set equality.

use refset::prelude::*;
use rstest::rstest;

// =============================================================================
// Set<T> Integration Tests
// =============================================================================

#[rstest]
fn test_set_json_roundtrip() {
    let set: Set<i32> = (1..=10).collect();
    let json = serde_json::to_string(&set).unwrap();
    let restored: Set<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(set, restored);
}

#[rstest]
fn test_set_serializes_in_order() {
    let set: Set<String> = Set::from(["b", "a", "c"].map(String::from));
    assert_eq!(serde_json::to_string(&set).unwrap(), r#"["b","a","c"]"#);
}

#[rstest]
fn test_set_deserialize_collapses_duplicates() {
    let set: Set<i64> = serde_json::from_str("[3, 1, 3, 2, 1]").unwrap();
    assert_eq!(set.len(), 3);
    assert_eq!(set.to_vec(), vec![3, 1, 2]);
}

#[rstest]
fn test_set_deserialize_rejects_non_sequences() {
    let result: Result<Set<i32>, _> = serde_json::from_str(r#"{"a": 1}"#);
    assert!(result.is_err());
}

#[rstest]
fn test_empty_set_json() {
    let set: Set<i32> = Set::new();
    assert_eq!(serde_json::to_string(&set).unwrap(), "[]");
    let restored: Set<i32> = serde_json::from_str("[]").unwrap();
    assert!(restored.is_empty());
}

// =============================================================================
// Value Integration Tests
// =============================================================================

#[rstest]
fn test_mixed_set_serializes_scalars() {
    let set = set![[1, 2], 2.5, "a", true, Value::Null];
    assert_eq!(serde_json::to_string(&set).unwrap(), r#"[1,2,2.5,"a",true,null]"#);
}

#[rstest]
fn test_mixed_set_deserialize_keeps_domains_apart() {
    let set: Set<Value> =
        serde_json::from_str(r#"[1, "1", true, null, 1.0, "1"]"#).unwrap();
    assert_eq!(set.len(), 4);
    assert!(set.contains(&1));
    assert!(set.contains("1"));
    assert!(set.contains(&true));
    assert!(set.contains(&Value::Null));
}

#[rstest]
fn test_handles_serialize_by_content() {
    let object = Object::new();
    object.insert("name", "refset");
    let array = Array::from_iter([1, 2]);
    let inner = SetHandle::new(set![["x"]]);
    let set = set![object, array, inner];

    assert_eq!(
        serde_json::to_string(&set).unwrap(),
        r#"[{"name":"refset"},[1,2],["x"]]"#
    );
}

#[rstest]
fn test_deserialized_containers_are_distinct_members() {
    let set: Set<Value> = serde_json::from_str("[[1], [1], {}, {}]").unwrap();
    assert_eq!(set.len(), 4);
    assert!(set.iter().take(2).all(|member| member.as_array().is_some()));
    assert!(set.iter().skip(2).all(|member| member.as_object().is_some()));
}

#[rstest]
fn test_value_large_integers_keep_precision_on_output() {
    let value = Value::from(9_007_199_254_740_991_i64);
    assert_eq!(serde_json::to_string(&value).unwrap(), "9007199254740991");
}

#[rstest]
fn test_mutably_borrowed_handles_fail_to_serialize() {
    let inner = SetHandle::new(set![[1, 2]]);
    let array = Array::from_iter([1]);

    let guard = inner.borrow_mut();
    let error = serde_json::to_string(&Value::from(inner.clone())).unwrap_err();
    assert!(error.to_string().contains("set is mutably borrowed"));
    drop(guard);
    assert_eq!(serde_json::to_string(&Value::from(inner)).unwrap(), "[1,2]");

    let guard = array.borrow_mut();
    assert!(serde_json::to_string(&set![array.clone()]).is_err());
    drop(guard);
    assert_eq!(serde_json::to_string(&set![array]).unwrap(), "[[1]]");
}
