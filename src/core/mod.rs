//! Core data-manipulation functions
//!
//! Following the "functional core, imperative shell" pattern, everything here:
//! - Takes inputs and returns outputs (merge functions mutate only their target)
//! - Holds no state between calls
//! - Performs no I/O and schedules nothing
//! - Is reentrant and testable without mocks

pub mod delegation;
pub mod index;
pub mod matching;
pub mod merge;
pub mod pick;

pub use delegation::{inherit, Instance, TypeDescriptor};
pub use index::{index_by, to_map, values, KeySelector};
pub use matching::{contains, contains_obj};
pub use merge::{deep_extend, extend};
pub use pick::pick;
