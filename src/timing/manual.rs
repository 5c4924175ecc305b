//! Virtual-clock scheduler for deterministic tests
//!
//! Nothing runs until [`ManualScheduler::advance`] moves the clock past a
//! task's deadline. Tasks run outside the internal lock, so they may schedule
//! further work.

use super::scheduler::{Scheduler, Task, TaskHandle, TaskState};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

struct Scheduled {
    deadline: Duration,
    armed_at: Duration,
    seq: u64,
    state: Arc<TaskState>,
    task: Task,
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    next_seq: u64,
    queue: Vec<Scheduled>,
}

/// Scheduler driven by an explicitly advanced clock
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Arc<Mutex<ManualState>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ManualState> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Time elapsed on the virtual clock
    pub fn now(&self) -> Duration {
        self.lock().now
    }

    /// Number of tasks scheduled and not yet run or cancelled
    pub fn pending(&self) -> usize {
        self.lock()
            .queue
            .iter()
            .filter(|s| !s.state.is_cancelled())
            .count()
    }

    /// Move the clock forward, running every task that falls due.
    ///
    /// Due tasks run in deadline order, ties in scheduling order. The clock
    /// reads each task's deadline while it runs. Tasks armed during this call
    /// also run if they fall due, except zero-delay ones: those wait for the
    /// next `advance`, so a task that keeps re-arming itself cannot stall the
    /// clock. Returns how many tasks ran.
    pub fn advance(&self, by: Duration) -> usize {
        let (target, horizon) = {
            let state = self.lock();
            (state.now + by, state.next_seq)
        };
        let mut ran = 0;

        loop {
            let next = {
                let mut state = self.lock();
                state.queue.retain(|s| !s.state.is_cancelled());
                let due = state
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, s)| s.deadline <= target)
                    .filter(|(_, s)| s.seq < horizon || s.deadline > s.armed_at)
                    .min_by_key(|(_, s)| (s.deadline, s.seq))
                    .map(|(i, _)| i);
                due.map(|i| {
                    let scheduled = state.queue.swap_remove(i);
                    state.now = scheduled.deadline;
                    scheduled
                })
            };

            let Some(scheduled) = next else {
                break;
            };
            scheduled.state.run(scheduled.task);
            ran += 1;
        }

        self.lock().now = target;
        ran
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TaskHandle {
        let state = Arc::new(TaskState::default());
        let mut inner = self.lock();
        let seq = inner.next_seq;
        inner.next_seq += 1;
        let armed_at = inner.now;
        let deadline = armed_at + delay;
        inner.queue.push(Scheduled {
            deadline,
            armed_at,
            seq,
            state: Arc::clone(&state),
            task,
        });
        TaskHandle::new(state)
    }
}
