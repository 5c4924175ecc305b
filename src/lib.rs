//! # Basis
//!
//! Generic data-manipulation utilities meant to sit underneath other software.
//!
//! ## Modules
//!
//! - `value` - Dynamic [`Value`] model: mappings, sequences, scalars and callables
//! - `core` - Deep merge, partial containment, keyed indexing, projection, delegation
//! - `random` - Injectable uniform integer source and Fisher–Yates shuffle
//! - `timing` - Scheduler seam and trailing-edge debounce
//! - `guard` - Failure boundaries around callables
//! - `config` - YAML/environment configuration
//! - `logging` - Optional `tracing` subscriber setup
//! - `error` - Coded error type shared by every module
//!
//! ## Example
//!
//! ```
//! use basis::{contains_obj, deep_extend, Mapping, Value};
//! use serde_json::json;
//!
//! let mut target = Mapping::new();
//! let defaults = Value::from(json!({"a": {"x": 1}}));
//! let overrides = Value::from(json!({"a": {"y": 2}}));
//! deep_extend(&mut target, [defaults.as_mapping(), overrides.as_mapping()]);
//!
//! let merged = Value::Mapping(target);
//! assert_eq!(merged, Value::from(json!({"a": {"x": 1, "y": 2}})));
//! assert!(contains_obj(&merged, &Value::from(json!({"a": {"y": 2}}))));
//! ```
pub mod config;
pub mod core;
pub mod error;
pub mod guard;
pub mod logging;
pub mod random;
pub mod timing;
pub mod value;


pub use crate::config::BasisConfig;
pub use crate::core::{
    contains, contains_obj, deep_extend, extend, index_by, inherit, pick, to_map, values,
    Instance, KeySelector, TypeDescriptor,
};
pub use crate::error::{BasisError, Result};
pub use crate::guard::safe_fn;
pub use crate::random::{
    random, random_max, random_with, shuffle, shuffle_value, shuffle_with, SeededSource,
    ThreadSource, UniformSource,
};
pub use crate::timing::{
    debounce, debounce_callable, debounce_with, Debounced, ManualScheduler, Scheduler,
    TaskHandle, TokioScheduler,
};
pub use crate::value::{Callable, Mapping, Value};
