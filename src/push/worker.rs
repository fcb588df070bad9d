//! Background workers: the producing end of a push pipeline stage.
//!
//! Every worker-backed stage is one tokio task holding an [`Emitter`]: the
//! sending half of the stage's bounded channel plus the stop signal owned
//! by the stage's [`Iter`]. All waiting a worker does (on upstream data, or
//! on room in its own channel) races the stop signal, so a worker never
//! outlives interest in its output.

use std::future::Future;

use tokio::sync::{mpsc, watch};

use crate::push::config::PushConfig;
use crate::push::error::PushError;
use crate::push::iter::Iter;

/// The producing side handed to a worker body.
pub(crate) struct Emitter<T> {
    tx: mpsc::Sender<T>,
    stop: watch::Receiver<bool>,
    stage: &'static str,
}

impl<T> Emitter<T> {
    /// True once the consumer dropped or cancelled the stage.
    fn stopped(&self) -> bool {
        *self.stop.borrow() || self.stop.has_changed().is_err() || self.tx.is_closed()
    }

    fn note_stop(&self) {
        tracing::debug!(stage = self.stage, "push worker stopping: consumer gone");
    }

    /// Send one element downstream, waiting for room in the channel.
    ///
    /// Returns `false` when the consumer is gone; the worker should return.
    pub(crate) async fn emit(&mut self, value: T) -> bool {
        if self.stopped() {
            self.note_stop();
            return false;
        }
        let sent = tokio::select! {
            biased;
            _ = self.stop.changed() => false,
            sent = self.tx.send(value) => sent.is_ok(),
        };
        if !sent {
            self.note_stop();
        }
        sent
    }

    /// Pull one element from `upstream`.
    ///
    /// `Ok(None)` covers both upstream exhaustion and a stop request; in
    /// either case the worker has nothing more to do. Upstream faults are
    /// passed through so they reach the outermost consumer.
    pub(crate) async fn pull<U>(&mut self, upstream: &mut Iter<U>) -> Result<Option<U>, PushError> {
        if self.stopped() {
            self.note_stop();
            return Ok(None);
        }
        let next = tokio::select! {
            biased;
            _ = self.stop.changed() => None,
            next = upstream.try_next() => Some(next),
        };
        match next {
            Some(next) => next,
            None => {
                self.note_stop();
                Ok(None)
            }
        }
    }
}

/// Start a worker task and return the `Iter` reading its output.
///
/// `body` receives the [`Emitter`] and returns the task's future. When the
/// future completes the emitter is dropped, which closes the channel.
///
/// Must be called from within a Tokio runtime.
pub(crate) fn spawn<T, F, Fut>(config: PushConfig, stage: &'static str, body: F) -> Iter<T>
where
    T: Send + 'static,
    F: FnOnce(Emitter<T>) -> Fut,
    Fut: Future<Output = Result<(), PushError>> + Send + 'static,
{
    let (tx, rx) = mpsc::channel(config.capacity());
    let (stop_tx, stop_rx) = watch::channel(false);
    let task = body(Emitter {
        tx,
        stop: stop_rx,
        stage,
    });
    let handle = tokio::spawn(async move {
        tracing::trace!(stage, "push worker started");
        let outcome = task.await;
        match &outcome {
            Ok(()) => tracing::trace!(stage, "push worker finished"),
            Err(fault) => tracing::debug!(stage, error = %fault, "push worker passing on upstream fault"),
        }
        outcome
    });
    Iter::from_worker(rx, handle, stop_tx, config)
}

/// An `Iter` over `values`, filled and closed up front. No worker, no runtime needed.
pub(crate) fn preload<T>(config: PushConfig, values: Vec<T>) -> Iter<T> {
    let (tx, rx) = mpsc::channel(values.len().max(1));
    for value in values {
        // Capacity equals the number of values, so every send finds room.
        let _ = tx.try_send(value);
    }
    Iter::preloaded(rx, config)
}
