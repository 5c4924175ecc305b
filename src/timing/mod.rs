//! Time-coalesced invocation
//!
//! - `scheduler` - the [`Scheduler`] seam, owned [`TaskHandle`]s and the tokio implementation
//! - `manual` - virtual-clock scheduler for deterministic tests
//! - `debounce` - trailing-edge debounce built on a scheduler

pub mod debounce;
pub mod manual;
pub mod scheduler;

pub use debounce::{debounce, debounce_callable, debounce_with, Debounced};
pub use manual::ManualScheduler;
pub use scheduler::{Scheduler, Task, TaskHandle, TokioScheduler};
