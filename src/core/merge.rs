//! Shallow and deep overlay of mappings
//!
//! Both functions mutate and return only the target; sources are read-only.
//! Sequences are opaque values: they replace whatever is in the target and
//! are never merged element-wise.

use crate::value::{Mapping, Value};
use tracing::trace;

/// Attach every key of each source onto `target`, overwriting existing keys.
///
/// Sources are applied left to right; `None` sources are skipped.
pub fn extend<'t, 's, I>(target: &'t mut Mapping, sources: I) -> &'t mut Mapping
where
    I: IntoIterator,
    I::Item: Into<Option<&'s Mapping>>,
{
    for source in sources {
        let Some(source): Option<&Mapping> = source.into() else {
            continue;
        };
        for (key, value) in source {
            target.insert(key.clone(), value.clone());
        }
    }
    target
}

/// Attach every key of each source onto `target`, recursing into plain mappings.
///
/// When a source value is a mapping, the target slot is turned into an empty
/// mapping first if it holds anything else, then merged into recursively.
/// Any other value (including sequences and callables) replaces the slot.
pub fn deep_extend<'t, 's, I>(target: &'t mut Mapping, sources: I) -> &'t mut Mapping
where
    I: IntoIterator,
    I::Item: Into<Option<&'s Mapping>>,
{
    for source in sources {
        let Some(source): Option<&Mapping> = source.into() else {
            continue;
        };
        merge_into(target, source);
    }
    target
}

fn merge_into(target: &mut Mapping, source: &Mapping) {
    for (key, value) in source {
        match value {
            Value::Mapping(nested) => {
                let slot = target
                    .entry(key.clone())
                    .or_insert_with(|| Value::Mapping(Mapping::new()));
                if !slot.is_mapping() {
                    trace!(key = %key, replaced = slot.type_name(), "replacing slot with mapping");
                    *slot = Value::Mapping(Mapping::new());
                }
                if let Value::Mapping(slot_map) = slot {
                    merge_into(slot_map, nested);
                }
            }
            other => {
                target.insert(key.clone(), other.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(json: serde_json::Value) -> Mapping {
        match Value::from(json) {
            Value::Mapping(m) => m,
            other => panic!("expected mapping, got {}", other.type_name()),
        }
    }

    #[test]
    fn test_extend_without_sources_returns_target() {
        let mut target = map(json!({"hello": "world"}));
        let sources: [&Mapping; 0] = [];
        assert_eq!(extend(&mut target, sources), &map(json!({"hello": "world"})));
    }

    #[test]
    fn test_extend_later_sources_win() {
        let mut target = map(json!({"hello": "world"}));
        let a = map(json!({"test": 1234, "hello": "cool"}));
        let b = map(json!({"hello": 3}));
        extend(&mut target, [&a, &b]);
        assert_eq!(target, map(json!({"hello": 3, "test": 1234})));
    }

    #[test]
    fn test_extend_keeps_null_values() {
        let mut target = map(json!({"hello": "world"}));
        let a = map(json!({"nice": null}));
        extend(&mut target, [&a]);
        assert_eq!(target.get("nice"), Some(&Value::Null));
    }

    #[test]
    fn test_extend_is_shallow() {
        let mut target = map(json!({"hello": {"a": 1}}));
        let a = map(json!({"hello": {"b": 2}}));
        extend(&mut target, [&a]);
        assert_eq!(target, map(json!({"hello": {"b": 2}})));
    }

    #[test]
    fn test_deep_extend_adds_top_level_keys() {
        let mut target = map(json!({"hello": {"test": 567}}));
        let a = map(json!({"test": 1234}));
        deep_extend(&mut target, [&a]);
        assert_eq!(target, map(json!({"hello": {"test": 567}, "test": 1234})));
    }

    #[test]
    fn test_deep_extend_merges_nested() {
        let mut target = map(json!({"hello": {"test": "nice", "me": "you"}}));
        let a = map(json!({"test": 1234, "hello": {"test": 123, "nice": 546}}));
        deep_extend(&mut target, [&a]);
        assert_eq!(
            target,
            map(json!({"hello": {"test": 123, "me": "you", "nice": 546}, "test": 1234}))
        );
    }

    #[test]
    fn test_deep_extend_creates_three_levels() {
        let mut target = Mapping::new();
        let a = map(json!({"test": 1234, "hello": {"test": 123, "yes": {"no": 55}}}));
        deep_extend(&mut target, [&a]);
        assert_eq!(target, a);
    }

    #[test]
    fn test_deep_extend_replaces_scalar_with_mapping() {
        let mut target = map(json!({"a": 5}));
        let a = map(json!({"a": {"x": 1}}));
        deep_extend(&mut target, [&a]);
        assert_eq!(target, map(json!({"a": {"x": 1}})));
    }

    #[test]
    fn test_deep_extend_replaces_sequences_wholesale() {
        let mut target = map(json!({"list": [1, 2, 3], "nested": {"list": [9]}}));
        let a = map(json!({"list": [4], "nested": {"list": []}}));
        deep_extend(&mut target, [&a]);
        assert_eq!(target, map(json!({"list": [4], "nested": {"list": []}})));
    }

    #[test]
    fn test_deep_extend_skips_absent_sources() {
        let mut target = map(json!({"a": 1}));
        let b = map(json!({"b": 2}));
        deep_extend(&mut target, [None, Some(&b), None]);
        assert_eq!(target, map(json!({"a": 1, "b": 2})));
    }

    #[test]
    fn test_deep_extend_does_not_touch_sources() {
        let mut first = Mapping::new();
        let second = Mapping::new();
        let third = map(json!({"hello": "world"}));
        deep_extend(&mut first, [&second, &third]);
        assert_eq!(first, map(json!({"hello": "world"})));
        assert!(second.is_empty());
    }

    #[test]
    fn test_deep_extend_nested_source_not_aliased() {
        let mut target = Mapping::new();
        let source = map(json!({"inner": {"x": 1}}));
        deep_extend(&mut target, [&source]);
        target
            .get_mut("inner")
            .and_then(Value::as_mapping_mut)
            .unwrap()
            .insert("y".into(), Value::from(2));
        assert_eq!(source, map(json!({"inner": {"x": 1}})));
    }
}
