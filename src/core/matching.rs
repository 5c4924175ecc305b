//! Partial structural matching and element search

use crate::value::Value;

/// Check whether `pattern` is structurally contained in `subject`.
///
/// - The same reference is always contained.
/// - Any two callables match, whatever they do.
/// - For two mappings every pattern key must exist in the subject and match
///   recursively; extra subject keys are ignored, so an empty pattern
///   matches any mapping.
/// - Everything else, sequences included, must be deeply equal.
pub fn contains_obj(subject: &Value, pattern: &Value) -> bool {
    if std::ptr::eq(subject, pattern) {
        return true;
    }

    match (subject, pattern) {
        (Value::Callable(_), Value::Callable(_)) => true,
        (Value::Mapping(subject), Value::Mapping(pattern)) => {
            pattern.iter().all(|(key, expected)| {
                subject
                    .get(key)
                    .is_some_and(|actual| contains_obj(actual, expected))
            })
        }
        _ => subject == pattern,
    }
}

/// Search a sequence for an equal element, or a string for a substring.
///
/// `from_index` counts elements (or characters) from the start; a negative
/// value counts back from the end and is clamped to zero. Any other haystack
/// never contains anything.
pub fn contains(haystack: &Value, needle: &Value, from_index: i64) -> bool {
    match haystack {
        Value::Sequence(items) => {
            let start = resolve_start(from_index, items.len());
            items.iter().skip(start).any(|item| item == needle)
        }
        Value::String(text) => {
            let Some(needle) = needle.as_str() else {
                return false;
            };
            let start = resolve_start(from_index, text.chars().count());
            let byte_start = text
                .char_indices()
                .nth(start)
                .map(|(i, _)| i)
                .unwrap_or(text.len());
            text[byte_start..].contains(needle)
        }
        _ => false,
    }
}

fn resolve_start(from_index: i64, len: usize) -> usize {
    if from_index >= 0 {
        return usize::try_from(from_index).unwrap_or(usize::MAX);
    }
    let back = usize::try_from(from_index.unsigned_abs()).unwrap_or(usize::MAX);
    len.saturating_sub(back)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Callable;
    use serde_json::json;

    fn v(json: serde_json::Value) -> Value {
        Value::from(json)
    }

    #[test]
    fn test_empty_pattern_always_contained() {
        assert!(contains_obj(&v(json!({"a": 1, "b": [2]})), &v(json!({}))));
        assert!(contains_obj(&v(json!({})), &v(json!({}))));
    }

    #[test]
    fn test_pattern_key_missing_from_subject() {
        assert!(!contains_obj(&v(json!({"a": 1})), &v(json!({"a": 1, "b": 2}))));
    }

    #[test]
    fn test_extra_subject_keys_are_ignored() {
        assert!(contains_obj(
            &v(json!({"a": 1, "b": {"c": 3, "d": 4}, "e": "x"})),
            &v(json!({"b": {"c": 3}}))
        ));
    }

    #[test]
    fn test_nested_value_mismatch() {
        assert!(!contains_obj(
            &v(json!({"b": {"c": 3}})),
            &v(json!({"b": {"c": 4}}))
        ));
    }

    #[test]
    fn test_type_mismatch() {
        assert!(!contains_obj(&v(json!({"a": "1"})), &v(json!({"a": 1}))));
        assert!(!contains_obj(&v(json!({"a": {}})), &v(json!({"a": []}))));
        assert!(!contains_obj(&v(json!({"a": null})), &v(json!({"a": {}}))));
    }

    #[test]
    fn test_sequences_compare_by_value() {
        assert!(contains_obj(
            &v(json!({"list": [1, {"x": 2}]})),
            &v(json!({"list": [1, {"x": 2}]}))
        ));
        assert!(!contains_obj(
            &v(json!({"list": [1, 2, 3]})),
            &v(json!({"list": [1, 2]}))
        ));
    }

    #[test]
    fn test_callables_match_regardless_of_behavior() {
        let a = Value::mapping([("f", Callable::from_fn(0, |_| Ok(Value::from(1))))]);
        let b = Value::mapping([("f", Callable::from_fn(1, |_| Ok(Value::from(2))))]);
        assert!(contains_obj(&a, &b));
        assert!(!contains_obj(&a, &v(json!({"f": 1}))));
    }

    #[test]
    fn test_same_reference_is_contained() {
        let value = v(json!({"a": [1, 2]}));
        assert!(contains_obj(&value, &value));
    }

    #[test]
    fn test_contains_sequence() {
        let items = v(json!([1, 2, 3]));
        assert!(contains(&items, &Value::from(2), 0));
        assert!(!contains(&items, &Value::from(9), 0));
        assert!(!contains(&items, &Value::from(1), 1));
        assert!(contains(&items, &Value::from(3), -1));
    }

    #[test]
    fn test_contains_sequence_of_mappings_uses_equality() {
        let items = v(json!([{}, {}, {"id": 1}]));
        assert!(contains(&items, &v(json!({"id": 1})), 0));
        assert!(!contains(&items, &v(json!({"id": 2})), 0));
    }

    #[test]
    fn test_contains_string() {
        let text = Value::from("hello world");
        assert!(contains(&text, &Value::from("hello"), 0));
        assert!(!contains(&text, &Value::from("helloo"), 0));
        assert!(!contains(&text, &Value::from("hello"), 1));
        assert!(contains(&text, &Value::from("world"), 6));
        assert!(!contains(&text, &Value::from("hello"), 100));
    }

    #[test]
    fn test_contains_string_negative_offset() {
        let text = Value::from("hello world");
        assert!(contains(&text, &Value::from("world"), -5));
        assert!(!contains(&text, &Value::from("hello"), -5));
        assert!(contains(&text, &Value::from("hello"), -100));
        assert!(contains(&Value::from("héllo"), &Value::from("lo"), -2));
    }

    #[test]
    fn test_offsets_beyond_platform_width() {
        let items = v(json!([1, 2, 3]));
        assert!(!contains(&items, &Value::from(1), i64::MAX));
        assert!(contains(&items, &Value::from(1), i64::MIN));
    }

    #[test]
    fn test_contains_on_other_values() {
        assert!(!contains(&Value::Null, &Value::Null, 0));
        assert!(!contains(&v(json!({"a": 1})), &Value::from(1), 0));
    }
}
