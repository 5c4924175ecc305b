//! Common test utilities and helpers

#![allow(dead_code)]

use basis::{Callable, Mapping, Value};
use std::sync::{Arc, Mutex};

/// Build a mapping from a JSON literal
pub fn mapping(json: serde_json::Value) -> Mapping {
    match Value::from(json) {
        Value::Mapping(map) => map,
        other => panic!("fixture must be a mapping, got {}", other.type_name()),
    }
}

/// Build a sequence from a JSON literal
pub fn sequence(json: serde_json::Value) -> Vec<Value> {
    match Value::from(json) {
        Value::Sequence(items) => items,
        other => panic!("fixture must be a sequence, got {}", other.type_name()),
    }
}

/// Callable that records every argument list it receives
pub struct CallRecorder {
    calls: Arc<Mutex<Vec<Vec<Value>>>>,
}

impl CallRecorder {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn callable(&self) -> Callable {
        let calls = Arc::clone(&self.calls);
        Callable::from_fn(1, move |args| {
            calls.lock().unwrap().push(args.to_vec());
            Ok(Value::Null)
        })
    }

    pub fn calls(&self) -> Vec<Vec<Value>> {
        self.calls.lock().unwrap().clone()
    }
}
