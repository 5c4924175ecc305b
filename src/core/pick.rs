//! Selective projection of a mapping's fields

use crate::error::{common, Result};
use crate::value::{Mapping, Value};

/// Build a new mapping holding only `keys` from `obj`.
///
/// With `bind_methods`, every selected callable is bound to `obj` so it keeps
/// resolving its receiver against the original object wherever it is later
/// invoked. Keys missing from `obj` are left out of the result.
///
/// # Errors
///
/// Fails with an invalid-argument error when `obj` is `Null` or not a mapping,
/// or when `keys` is `None`.
pub fn pick<K: AsRef<str>>(
    obj: &Value,
    keys: Option<&[K]>,
    bind_methods: bool,
) -> Result<Mapping> {
    let source = match obj {
        Value::Null => return Err(common::null_object("obj")),
        Value::Mapping(map) => map,
        other => return Err(common::wrong_type("obj", "mapping", other.type_name())),
    };
    let keys = keys.ok_or_else(|| common::null_keys("keys"))?;

    let mut picked = Mapping::new();
    for key in keys {
        let key = key.as_ref();
        let Some(value) = source.get(key) else {
            continue;
        };
        let value = match value {
            Value::Callable(f) if bind_methods => Value::Callable(f.bind(obj.clone(), [])),
            other => other.clone(),
        };
        picked.insert(key.to_string(), value);
    }
    Ok(picked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::value::Callable;
    use serde_json::json;

    #[test]
    fn test_pick_empty_keys() {
        let picked = pick::<&str>(&Value::from(json!({})), Some(&[][..]), false).unwrap();
        assert!(picked.is_empty());
    }

    #[test]
    fn test_pick_single_and_multi() {
        let obj = Value::from(json!({"hello": 123, "yes": 456, "no": 999}));
        let picked = pick(&obj, Some(&["yes"][..]), false).unwrap();
        assert_eq!(Value::Mapping(picked), Value::from(json!({"yes": 456})));

        let picked = pick(&obj, Some(&["yes", "no"][..]), false).unwrap();
        assert_eq!(Value::Mapping(picked), Value::from(json!({"yes": 456, "no": 999})));
    }

    #[test]
    fn test_pick_null_object_fails() {
        let err = pick(&Value::Null, Some(&["yes", "no"][..]), false).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(err.code(), ErrorCode::ARG_NULL_OBJECT);
    }

    #[test]
    fn test_pick_null_keys_fails() {
        let obj = Value::from(json!({"hello": 123}));
        let err = pick::<&str>(&obj, None, false).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ARG_NULL_KEYS);
    }

    #[test]
    fn test_pick_non_mapping_fails() {
        let err = pick(&Value::from(json!([1, 2])), Some(&["0"][..]), false).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ARG_INVALID_TYPE);
    }

    #[test]
    fn test_pick_missing_key_is_omitted() {
        let obj = Value::from(json!({"a": 1}));
        let picked = pick(&obj, Some(&["a", "zzz"][..]), false).unwrap();
        assert_eq!(picked.len(), 1);
    }

    fn object_with_methods() -> Value {
        let test = Callable::from_fn(0, |_| Ok(Value::from("tested")));
        let nice = Callable::from_fn(0, |_| Ok(Value::Null));
        let one = Callable::new(0, |receiver, _| {
            let inner = receiver
                .get("_test")
                .and_then(Value::as_callable)
                .ok_or_else(|| Value::from("_test is not callable"))?;
            inner.call(receiver, &[])
        });
        Value::mapping([("_test", test), ("nice", nice), ("one", one)])
    }

    #[test]
    fn test_pick_with_bound_methods_keeps_receiver() {
        let obj = object_with_methods();
        let picked = pick(&obj, Some(&["nice", "one"][..]), true).unwrap();
        assert!(picked.contains_key("nice"));
        assert!(picked.contains_key("one"));
        assert!(!picked.contains_key("_test"));

        let projected = Value::Mapping(picked.clone());
        let one = picked["one"].as_callable().unwrap();
        assert_eq!(one.call(&projected, &[]), Ok(Value::from("tested")));
    }

    #[test]
    fn test_pick_without_binding_loses_receiver() {
        let obj = object_with_methods();
        let picked = pick(&obj, Some(&["one"][..]), false).unwrap();
        let projected = Value::Mapping(picked.clone());
        let one = picked["one"].as_callable().unwrap();
        assert!(one.call(&projected, &[]).is_err());
    }
}
