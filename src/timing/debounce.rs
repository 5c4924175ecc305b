//! Trailing-edge debounce
//!
//! Every call cancels the instance's pending invocation and schedules a new one
//! with the latest arguments, so a burst of calls closer together than `wait`
//! runs the function exactly once, after the burst, with the last arguments.

use super::scheduler::{Scheduler, TaskHandle, TokioScheduler};
use crate::config::BasisConfig;
use crate::error::Result;
use crate::value::{Callable, Value};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tracing::{debug, trace, warn};

struct DebounceInner<A> {
    func: Arc<dyn Fn(A) + Send + Sync>,
    wait: Duration,
    scheduler: Arc<dyn Scheduler>,
    pending: Mutex<Option<TaskHandle>>,
}

impl<A> DebounceInner<A> {
    fn pending_slot(&self) -> MutexGuard<'_, Option<TaskHandle>> {
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<A> Drop for DebounceInner<A> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending_slot().take() {
            handle.cancel();
        }
    }
}

/// A debounced function; clones share the same pending invocation
pub struct Debounced<A> {
    inner: Arc<DebounceInner<A>>,
}

impl<A> Clone for Debounced<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A: Send + 'static> Debounced<A> {
    pub fn new<F>(func: F, wait: Duration, scheduler: Arc<dyn Scheduler>) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(DebounceInner {
                func: Arc::new(func),
                wait,
                scheduler,
                pending: Mutex::new(None),
            }),
        }
    }

    /// Debounce with the configured default wait
    pub fn from_config<F>(func: F, config: &BasisConfig, scheduler: Arc<dyn Scheduler>) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self::new(func, config.default_wait(), scheduler)
    }

    /// Replace any pending invocation with one for `args`
    pub fn call(&self, args: A) {
        let mut pending = self.inner.pending_slot();
        if let Some(previous) = pending.take() {
            if previous.is_pending() {
                trace!("cancelling superseded debounced call");
            }
            previous.cancel();
        }

        let func = Arc::clone(&self.inner.func);
        let handle = self
            .inner
            .scheduler
            .schedule(self.inner.wait, Box::new(move || func(args)));
        debug!(wait_ms = self.inner.wait.as_millis() as u64, "scheduled debounced call");
        *pending = Some(handle);
    }

    /// Whether an invocation is armed and has not fired yet
    pub fn is_pending(&self) -> bool {
        self.inner
            .pending_slot()
            .as_ref()
            .is_some_and(TaskHandle::is_pending)
    }

    pub fn wait(&self) -> Duration {
        self.inner.wait
    }
}

/// Debounce `func` on the current tokio runtime
pub fn debounce<A, F>(func: F, wait: Duration) -> Result<Debounced<A>>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    let scheduler = TokioScheduler::current()?;
    Ok(Debounced::new(func, wait, Arc::new(scheduler)))
}

/// Debounce `func` on an explicit scheduler
pub fn debounce_with<A, F>(func: F, wait: Duration, scheduler: Arc<dyn Scheduler>) -> Debounced<A>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    Debounced::new(func, wait, scheduler)
}

/// Debounce a [`Callable`].
///
/// The returned callable records the receiver and arguments of each call and
/// returns `Null` immediately; the deferred invocation uses the latest ones.
/// A value thrown by the deferred call is logged and dropped.
pub fn debounce_callable(
    callable: Callable,
    wait: Duration,
    scheduler: Arc<dyn Scheduler>,
) -> Callable {
    let arity = callable.arity();
    let debounced = Debounced::new(
        move |(receiver, args): (Value, Vec<Value>)| {
            if let Err(thrown) = callable.call(&receiver, &args) {
                warn!(error = %thrown, "debounced call threw");
            }
        },
        wait,
        scheduler,
    );
    Callable::new(arity, move |receiver, args| {
        debounced.call((receiver.clone(), args.to_vec()));
        Ok(Value::Null)
    })
}
