//! Keyed indexing of sequences

use crate::value::{Mapping, Value};
use std::collections::BTreeMap;
use tracing::trace;

/// How [`to_map`] derives a key from each element
pub enum KeySelector<'a> {
    /// Read this field from each element
    Field(&'a str),
    /// Compute the key; `None` means "no key"
    Func(&'a dyn Fn(&Value) -> Option<Value>),
}

impl<'a> From<&'a str> for KeySelector<'a> {
    fn from(field: &'a str) -> Self {
        KeySelector::Field(field)
    }
}

impl<'a, F> From<&'a F> for KeySelector<'a>
where
    F: Fn(&Value) -> Option<Value>,
{
    fn from(func: &'a F) -> Self {
        KeySelector::Func(func)
    }
}

impl KeySelector<'_> {
    fn key_for(&self, item: &Value) -> Option<String> {
        match self {
            KeySelector::Field(field) => item.get(field).and_then(Value::to_key),
            KeySelector::Func(func) => func(item).as_ref().and_then(Value::to_key),
        }
    }
}

/// Index `items` by the key the selector computes for each element.
///
/// Later elements overwrite earlier ones with the same key. Elements whose key
/// is missing or `Null` are left out.
pub fn to_map<'a>(items: &[Value], selector: impl Into<KeySelector<'a>>) -> Mapping {
    let selector = selector.into();
    let mut map = Mapping::new();
    for item in items {
        match selector.key_for(item) {
            Some(key) => {
                map.insert(key, item.clone());
            }
            None => trace!(item = %item, "skipping element without key"),
        }
    }
    map
}

/// Typed counterpart of [`to_map`]: index cloned items by a computed key
pub fn index_by<T, K, F>(items: &[T], mut key: F) -> BTreeMap<K, T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> Option<K>,
{
    items
        .iter()
        .filter_map(|item| key(item).map(|k| (k, item.clone())))
        .collect()
}

/// Own values of a mapping in key order, or a copy of a sequence's elements.
///
/// Any other value has no values.
pub fn values(value: &Value) -> Vec<Value> {
    match value {
        Value::Mapping(map) => map.values().cloned().collect(),
        Value::Sequence(items) => items.clone(),
        _ => Vec::new(),
    }
}
