//! `Iter` - the consumer end of a push pipeline stage.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::{ready, Stream};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::push::config::PushConfig;
use crate::push::error::PushError;

pub(crate) type WorkerHandle = JoinHandle<Result<(), PushError>>;

/// A push sequence: a bounded channel, usually fed by a background worker.
///
/// Exactly one consumer reads an `Iter`. Elements arrive in depth-first
/// flattening order; the worker waits on a full channel, so it never runs
/// more than the configured capacity ahead.
///
/// # Lifecycle
///
/// Dropping an `Iter` stops its worker. The worker in turn drops the
/// upstream `Iter`s it was reading, which stops *their* workers, so an
/// abandoned pipeline winds down completely instead of leaving tasks
/// blocked forever. [`Iter::cancel`] does the same without dropping.
///
/// # Faults
///
/// [`Iter::try_next`] reports a worker that panicked, anywhere upstream, as
/// `Err(PushError)` once the elements it produced before failing have been
/// delivered. [`Iter::next`] and the `Stream` impl log the fault and report
/// exhaustion instead.
pub struct Iter<T> {
    rx: mpsc::Receiver<T>,
    worker: Option<WorkerHandle>,
    stop: Option<watch::Sender<bool>>,
    config: PushConfig,
    cancelled: bool,
}

impl<T> Iter<T> {
    /// An `Iter` over a channel that was filled and closed up front.
    pub(crate) fn preloaded(rx: mpsc::Receiver<T>, config: PushConfig) -> Self {
        Iter {
            rx,
            worker: None,
            stop: None,
            config,
            cancelled: false,
        }
    }

    /// An `Iter` fed by a running worker.
    pub(crate) fn from_worker(
        rx: mpsc::Receiver<T>,
        worker: WorkerHandle,
        stop: watch::Sender<bool>,
        config: PushConfig,
    ) -> Self {
        Iter {
            rx,
            worker: Some(worker),
            stop: Some(stop),
            config,
            cancelled: false,
        }
    }

    /// The configuration stages built from this one will use.
    pub fn config(&self) -> PushConfig {
        self.config
    }

    /// Use `config` for every stage built from this one.
    pub fn with_config(mut self, config: PushConfig) -> Self {
        self.config = config;
        self
    }

    /// Stop the worker and everything upstream of it.
    ///
    /// The sequence reports exhaustion from now on, even if elements were
    /// already buffered.
    pub fn cancel(&mut self) {
        if let Some(stop) = &self.stop {
            stop.send_replace(true);
        }
        self.rx.close();
        self.worker = None;
        self.cancelled = true;
        tracing::debug!("push sequence cancelled by its consumer");
    }

    /// Poll for the next element, surfacing worker faults.
    pub fn poll_try_next(&mut self, cx: &mut Context<'_>) -> Poll<Result<Option<T>, PushError>> {
        if self.cancelled {
            return Poll::Ready(Ok(None));
        }
        if let Some(value) = ready!(self.rx.poll_recv(cx)) {
            return Poll::Ready(Ok(Some(value)));
        }
        // Channel closed and drained: find out how the worker ended.
        let Some(worker) = self.worker.as_mut() else {
            return Poll::Ready(Ok(None));
        };
        let outcome = ready!(Pin::new(worker).poll(cx));
        self.worker = None;
        self.stop = None;
        Poll::Ready(match outcome {
            Ok(Ok(())) => Ok(None),
            Ok(Err(fault)) => Err(fault),
            Err(join) if join.is_panic() => Err(PushError::from_panic(join.into_panic())),
            Err(_) => Err(PushError::Cancelled),
        })
    }

    /// The next element, `Ok(None)` on exhaustion, or the fault that ended the worker.
    ///
    /// A fault is reported once; later calls report exhaustion.
    pub async fn try_next(&mut self) -> Result<Option<T>, PushError> {
        futures::future::poll_fn(|cx| self.poll_try_next(cx)).await
    }

    /// The next element, or `None` when exhausted.
    ///
    /// A worker fault is logged at `error` level and reported as exhaustion.
    /// Use [`Iter::try_next`] to observe it instead.
    pub async fn next(&mut self) -> Option<T> {
        match self.try_next().await {
            Ok(value) => value,
            Err(fault) => {
                tracing::error!(error = %fault, "push sequence fault treated as exhaustion");
                None
            }
        }
    }
}

impl<T> std::fmt::Debug for Iter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Iter")
            .field("rx", &"<channel>")
            .field("has_worker", &self.worker.is_some())
            .field("config", &self.config)
            .field("cancelled", &self.cancelled)
            .finish()
    }
}

// No field is structurally pinned.
impl<T> Unpin for Iter<T> {}

impl<T> Stream for Iter<T> {
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        let this = self.get_mut();
        match ready!(this.poll_try_next(cx)) {
            Ok(value) => Poll::Ready(value),
            Err(fault) => {
                tracing::error!(error = %fault, "push sequence fault treated as exhaustion");
                Poll::Ready(None)
            }
        }
    }
}
