//! Walking nested hashes

use super::test_utils::{found, idx, int, nested_hash, sym};
use nested_dig::{dig, Lookup, Value};
use pretty_assertions::assert_eq;

#[test]
fn test_full_path() {
    let h = nested_hash();
    assert_eq!(h.dig(&[sym("foo"), sym("bar"), sym("baz")]).unwrap(), found(int(1)));
}

#[test]
fn test_missing_last_key() {
    let h = nested_hash();
    assert_eq!(h.dig(&[sym("foo"), sym("bar"), sym("nope")]).unwrap(), Lookup::Absent);
}

#[test]
fn test_missing_middle_key() {
    let h = nested_hash();
    assert_eq!(h.dig(&[sym("foo"), sym("baz")]).unwrap(), Lookup::Absent);
}

#[test]
fn test_missing_first_key() {
    let h = nested_hash();
    assert_eq!(h.dig(&[sym("bar"), sym("baz"), sym("foo")]).unwrap(), Lookup::Absent);
}

#[test]
fn test_absent_intermediate_short_circuits() {
    let h = nested_hash();
    assert_eq!(h.dig(&[sym("foo"), sym("zot"), sym("xyz")]).unwrap(), Lookup::Absent);
}

#[test]
fn test_absent_prefix_ignores_remaining_keys() {
    // keys after the missing one would fail if they were ever applied
    let h = Value::hash([(sym("foo"), int(1))]);
    assert_eq!(h.dig(&[sym("nope"), idx(0), idx(0)]).unwrap(), Lookup::Absent);
}

#[test]
fn test_index_into_nested_array() {
    let h = Value::hash([(sym("foo"), Value::array([int(1), int(2), int(3)]))]);
    assert_eq!(h.dig(&[sym("foo"), idx(2)]).unwrap(), found(int(3)));
    assert_eq!(h.dig(&[sym("foo"), idx(-3)]).unwrap(), found(int(1)));
    assert_eq!(h.dig(&[sym("foo"), idx(3)]).unwrap(), Lookup::Absent);
}

#[test]
fn test_intermediate_container_result() {
    let h = nested_hash();
    assert_eq!(
        dig(&h, &[sym("foo"), sym("bar")]).unwrap(),
        found(Value::hash([(sym("baz"), int(1))]))
    );
}

#[test]
fn test_dig_does_not_mutate() {
    let h = nested_hash();
    let before = h.clone();
    let _ = h.dig(&[sym("foo"), sym("missing"), sym("x")]);
    let _ = h.dig(&[sym("foo"), sym("bar"), sym("baz"), idx(0)]);
    assert_eq!(h, before);
}
