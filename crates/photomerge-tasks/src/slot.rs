//! Last-request-wins coordination for rapidly re-triggered work.
//!
//! A slider-driven UI fires a new composite on every tick, and only the
//! newest one matters. [`TaskSlot`] holds at most one in-flight task and
//! cancels whichever task a new one supersedes, so stale results can never
//! reach the caller out of order.

use crate::TaskHandle;

/// Holds the single newest in-flight task.
#[derive(Debug)]
pub struct TaskSlot<T> {
    current: Option<TaskHandle<T>>,
}

impl<T> TaskSlot<T> {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Install a new in-flight task, cancelling the task it supersedes.
    pub fn replace(&mut self, next: TaskHandle<T>) {
        if let Some(previous) = self.current.take() {
            previous.cancel();
        }
        self.current = Some(next);
    }

    /// Cancel and discard the current task, if any.
    pub fn cancel(&mut self) {
        if let Some(task) = self.current.take() {
            task.cancel();
        }
    }

    /// Whether the slot holds no in-flight task.
    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }

    /// Poll the newest task; a delivered value clears the slot.
    pub fn poll(&mut self) -> Option<T> {
        let value = self.current.as_ref()?.try_recv();
        if value.is_some() {
            self.current = None;
        }
        value
    }
}

impl<T> Default for TaskSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}
