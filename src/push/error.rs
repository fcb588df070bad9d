//! Fault type for the push engine.

use std::any::Any;

/// A fault raised by a background worker of a push pipeline.
///
/// Exhaustion is never an error. `PushError` only reports that a worker
/// ended abnormally, which the channel alone would have made look like an
/// ordinary end of sequence.
///
/// # Examples
///
/// ```rust
/// use eddy::push::{self, PushError};
///
/// # tokio_test::block_on(async {
/// let mut xs = push::from_fn(|| -> Option<i32> { panic!("sensor offline") });
///
/// match xs.try_next().await {
///     Err(PushError::WorkerPanicked { message }) => assert_eq!(message, "sensor offline"),
///     other => panic!("expected a worker panic, got {:?}", other),
/// }
/// # });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushError {
    /// A worker panicked, either in its own logic or in a user closure it ran.
    WorkerPanicked {
        /// The panic payload, when it was a string.
        message: String,
    },
    /// A worker was aborted before it finished (for example at runtime shutdown).
    Cancelled,
}

impl PushError {
    pub(crate) fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "<non-string panic payload>".to_string()
        };
        PushError::WorkerPanicked { message }
    }

    /// Returns `true` if a worker panicked.
    pub fn is_panic(&self) -> bool {
        matches!(self, PushError::WorkerPanicked { .. })
    }
}

impl std::fmt::Display for PushError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PushError::WorkerPanicked { message } => {
                write!(f, "push worker panicked: {}", message)
            }
            PushError::Cancelled => write!(f, "push worker was cancelled"),
        }
    }
}

impl std::error::Error for PushError {}
