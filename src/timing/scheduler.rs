//! Deferred task scheduling with owned, cancellable handles

use crate::error::{BasisError, ErrorCode, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;

/// Work scheduled to run once after a delay
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Something that can run a task after a delay
pub trait Scheduler: Send + Sync {
    /// Arrange for `task` to run once `delay` has elapsed
    fn schedule(&self, delay: Duration, task: Task) -> TaskHandle;
}

#[derive(Debug, Default)]
pub(crate) struct TaskState {
    cancelled: AtomicBool,
    finished: AtomicBool,
}

impl TaskState {
    /// Run `task` unless cancelled; either way the task is finished afterwards
    pub(crate) fn run(&self, task: Task) {
        if !self.cancelled.load(Ordering::SeqCst) {
            task();
        }
        self.finished.store(true, Ordering::SeqCst);
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Owned reference to one pending deferred invocation
#[derive(Debug)]
pub struct TaskHandle {
    state: Arc<TaskState>,
    abort: Option<AbortHandle>,
}

impl TaskHandle {
    pub(crate) fn new(state: Arc<TaskState>) -> Self {
        Self { state, abort: None }
    }

    pub(crate) fn with_abort(state: Arc<TaskState>, abort: AbortHandle) -> Self {
        Self {
            state,
            abort: Some(abort),
        }
    }

    /// Prevent the task from running; no effect once it has run
    pub fn cancel(&self) {
        self.state.cancelled.store(true, Ordering::SeqCst);
        if let Some(abort) = &self.abort {
            abort.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.state.is_cancelled()
    }

    /// True once the task ran (or was skipped because it was cancelled first)
    pub fn is_finished(&self) -> bool {
        self.state.finished.load(Ordering::SeqCst)
    }

    /// Still waiting to run
    pub fn is_pending(&self) -> bool {
        !self.is_cancelled() && !self.is_finished()
    }
}

/// Scheduler running tasks on a tokio runtime
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    /// Use the runtime the caller is running in
    pub fn current() -> Result<Self> {
        Handle::try_current()
            .map(Self::from_handle)
            .map_err(|e| {
                BasisError::runtime_with_code(
                    ErrorCode::RUNTIME_NO_EXECUTOR,
                    format!("no tokio runtime available: {}", e),
                )
            })
    }

    pub fn from_handle(handle: Handle) -> Self {
        Self { handle }
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TaskHandle {
        let state = Arc::new(TaskState::default());
        let task_state = Arc::clone(&state);
        let join = self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            task_state.run(task);
        });
        TaskHandle::with_abort(state, join.abort_handle())
    }
}
