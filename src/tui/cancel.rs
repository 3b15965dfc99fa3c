//! Cancellation tokens that tie async work to a component's lifetime.
//!
//! A component keeps the [`CancelHandle`] and hands the [`CancelSignal`] to
//! the command it spawns. Cancelling the handle, or dropping it when the
//! component goes away, makes [`run_until_cancelled`] resolve to `None`
//! without waiting for the underlying request.

use std::future::Future;

use tokio::sync::watch;

/// Owner side of a cancellation token.
#[derive(Debug)]
pub struct CancelHandle {
    sender: watch::Sender<bool>,
}

impl CancelHandle {
    /// Signals cancellation to every paired [`CancelSignal`].
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }
}

/// Worker side of a cancellation token.
#[derive(Debug, Clone)]
pub struct CancelSignal {
    receiver: watch::Receiver<bool>,
}

impl CancelSignal {
    /// Whether cancellation was requested or the handle was dropped.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.receiver.borrow() || self.receiver.has_changed().is_err()
    }

    /// Resolves once cancellation is requested or the handle is dropped.
    pub async fn cancelled(mut self) {
        while !*self.receiver.borrow_and_update() {
            if self.receiver.changed().await.is_err() {
                return;
            }
        }
    }
}

/// Creates a connected handle and signal.
#[must_use]
pub fn cancel_pair() -> (CancelHandle, CancelSignal) {
    let (sender, receiver) = watch::channel(false);
    (CancelHandle { sender }, CancelSignal { receiver })
}

/// Runs `work` unless `signal` fires first.
///
/// Returns `None` when cancelled; the work future is dropped, which aborts
/// an in-flight reqwest request.
pub async fn run_until_cancelled<F>(signal: CancelSignal, work: F) -> Option<F::Output>
where
    F: Future,
{
    tokio::select! {
        biased;
        () = signal.cancelled() => None,
        output = work => Some(output),
    }
}
