//! Task handles: one background computation, one delivery, explicit
//! cancellation.

use std::sync::mpsc::{self, Receiver};
use std::thread;

use log::debug;
use tokio_util::sync::CancellationToken;

/// Handle to a single in-flight background computation.
///
/// The worker delivers exactly one value through the handle. Cancellation
/// is permanent and wins over delivery: once [`TaskHandle::cancel`] has
/// returned, neither [`TaskHandle::try_recv`] nor [`TaskHandle::join`] will
/// ever yield the value, and a worker that observes the cancellation drops
/// its result without sending it.
#[derive(Debug)]
pub struct TaskHandle<T> {
    cancel: CancellationToken,
    receiver: Receiver<T>,
}

impl<T: Send + 'static> TaskHandle<T> {
    /// Run `work` on a dedicated worker thread.
    pub(crate) fn spawn<F>(work: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let (sender, receiver) = mpsc::sync_channel(1);

        thread::spawn(move || {
            if token.is_cancelled() {
                debug!("task cancelled before start");
                return;
            }

            let value = work();

            // Re-check after computing: a task cancelled mid-flight must
            // not deliver its completion value.
            if token.is_cancelled() {
                debug!("task cancelled in flight, dropping result");
                return;
            }

            // The receiver may already be gone; nothing to do then.
            let _ = sender.send(value);
        });

        Self { cancel, receiver }
    }
}

impl<T> TaskHandle<T> {
    /// Request cancellation. Idempotent; returns without waiting for the
    /// worker.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Whether this task has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Non-blocking poll for the result. Returns `None` while the task is
    /// still running, and forever after cancellation.
    pub fn try_recv(&self) -> Option<T> {
        if self.cancel.is_cancelled() {
            return None;
        }
        self.receiver.try_recv().ok()
    }

    /// Block until the task delivers, returning `None` if it was cancelled
    /// or its worker died without delivering.
    pub fn join(self) -> Option<T> {
        if self.cancel.is_cancelled() {
            return None;
        }
        self.receiver.recv().ok()
    }
}
