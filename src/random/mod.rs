//! Uniform integer draws and Fisher–Yates shuffling
//!
//! Every function that needs randomness has a `_with` variant taking a
//! [`UniformSource`], so tests can inject a [`SeededSource`] or a scripted
//! [`mock::ScriptedSource`] and get reproducible permutations. The plain
//! variants draw from [`ThreadSource`].

pub mod mock;

use crate::value::Value;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

pub use mock::ScriptedSource;

/// Provider of uniformly distributed integers
pub trait UniformSource: Send {
    /// Draw an integer from the inclusive range `[min, max]`; callers guarantee `min <= max`
    fn uniform(&mut self, min: i64, max: i64) -> i64;
}

/// Process-wide default source backed by the thread-local generator
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSource;

impl UniformSource for ThreadSource {
    fn uniform(&mut self, min: i64, max: i64) -> i64 {
        rand::rng().random_range(min..=max)
    }
}

/// Reproducible source seeded from a `u64`
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl UniformSource for SeededSource {
    fn uniform(&mut self, min: i64, max: i64) -> i64 {
        self.rng.random_range(min..=max)
    }
}

impl<S: UniformSource + ?Sized> UniformSource for Box<S> {
    fn uniform(&mut self, min: i64, max: i64) -> i64 {
        (**self).uniform(min, max)
    }
}

/// Random integer in `[min, max]` from the default source
pub fn random(min: i64, max: i64) -> i64 {
    random_with(&mut ThreadSource, min, max)
}

/// Random integer in `[0, max]` from the default source
pub fn random_max(max: i64) -> i64 {
    random_with(&mut ThreadSource, 0, max)
}

/// Random integer in `[min, max]`.
///
/// Returns `min` without drawing when the bounds are equal; reversed bounds
/// are swapped.
pub fn random_with<S: UniformSource + ?Sized>(source: &mut S, min: i64, max: i64) -> i64 {
    if min == max {
        return min;
    }
    let (low, high) = if min < max { (min, max) } else { (max, min) };
    source.uniform(low, high)
}

/// Shuffled copy of `items` using the default source
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(&mut ThreadSource, items)
}

/// Shuffled copy of `items` (inside-out Fisher–Yates).
///
/// For each index `i`, a slot `r` in `[0, i]` is drawn; whatever currently sits
/// at `r` moves to `i` and element `i` takes slot `r`. Inputs of length zero or
/// one are copied without drawing.
pub fn shuffle_with<T, S>(source: &mut S, items: &[T]) -> Vec<T>
where
    T: Clone,
    S: UniformSource + ?Sized,
{
    if items.len() <= 1 {
        return items.to_vec();
    }

    let mut shuffled = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let slot = random_with(source, 0, i as i64) as usize;
        shuffled.push(item.clone());
        if slot != i {
            shuffled.swap(slot, i);
        }
    }
    trace!(len = shuffled.len(), "shuffled sequence");
    shuffled
}

/// Shuffle a sequence value; anything that is not a sequence yields `None`
pub fn shuffle_value(value: &Value) -> Option<Value> {
    shuffle_value_with(&mut ThreadSource, value)
}

/// [`shuffle_value`] with an explicit source
pub fn shuffle_value_with<S>(source: &mut S, value: &Value) -> Option<Value>
where
    S: UniformSource + ?Sized,
{
    value
        .as_sequence()
        .map(|items| Value::Sequence(shuffle_with(source, items)))
}
