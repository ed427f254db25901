//! One-shot completion signal for the stream loop.
//!
//! The loop owns a [`CompletionGuard`]; dropping the guard is the only way a
//! value reaches the caller's [`Completion`], so exactly one [`StreamEnd`]
//! is delivered whether the loop returns normally or unwinds.

use std::io;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, SyncSender, TryRecvError};
use std::time::Duration;

use tracing::debug;

use crate::SESSION_TARGET;

/// Why the stream loop stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEnd {
    /// The daemon closed the stream, or the session was closed locally.
    EndOfStream,
    /// A line exceeded the buffered line limit.
    LineTooLong {
        /// Maximum accepted line length in bytes.
        limit: usize,
    },
    /// Reading from the transport failed.
    ReadFailed {
        /// Kind of the underlying I/O error.
        kind: io::ErrorKind,
        /// Rendered error message.
        message: String,
    },
    /// A filter panicked and unwound the stream loop.
    Panicked,
}

impl StreamEnd {
    pub(crate) fn read_failed(error: &io::Error) -> Self {
        Self::ReadFailed {
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

/// Caller side of the completion signal, returned by `Session::watch`.
#[derive(Debug)]
pub struct Completion {
    receiver: Receiver<StreamEnd>,
    observed: Option<StreamEnd>,
}

impl Completion {
    /// Blocks until the stream loop exits.
    ///
    /// Returns the cause already observed through [`Self::try_wait`] or
    /// [`Self::wait_timeout`], if any.
    #[must_use]
    pub fn wait(self) -> StreamEnd {
        self.observed
            .unwrap_or_else(|| self.receiver.recv().unwrap_or(StreamEnd::Panicked))
    }

    /// Waits up to `timeout` for the stream loop to exit.
    ///
    /// Returns `None` on timeout, or when the value was already observed.
    pub fn wait_timeout(&mut self, timeout: Duration) -> Option<StreamEnd> {
        if self.observed.is_some() {
            return None;
        }
        let end = match self.receiver.recv_timeout(timeout) {
            Ok(end) => end,
            Err(RecvTimeoutError::Timeout) => return None,
            Err(RecvTimeoutError::Disconnected) => StreamEnd::Panicked,
        };
        self.observed = Some(end.clone());
        Some(end)
    }

    /// Returns the exit cause if the loop has already stopped.
    pub fn try_wait(&mut self) -> Option<StreamEnd> {
        if self.observed.is_some() {
            return None;
        }
        let end = match self.receiver.try_recv() {
            Ok(end) => end,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => StreamEnd::Panicked,
        };
        self.observed = Some(end.clone());
        Some(end)
    }
}

/// Loop side of the completion signal. Sends its cause when dropped.
#[derive(Debug)]
pub(crate) struct CompletionGuard {
    sender: Option<SyncSender<StreamEnd>>,
    cause: StreamEnd,
}

impl CompletionGuard {
    /// Records the cause that will be sent when the guard drops.
    pub(crate) fn complete(mut self, cause: StreamEnd) {
        self.cause = cause;
    }
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        let Some(sender) = self.sender.take() else {
            return;
        };
        let cause = std::mem::replace(&mut self.cause, StreamEnd::Panicked);
        if sender.send(cause).is_err() {
            debug!(target: SESSION_TARGET, "completion receiver dropped before loop exit");
        }
    }
}

/// Creates a linked guard and completion pair.
pub(crate) fn channel() -> (CompletionGuard, Completion) {
    let (sender, receiver) = mpsc::sync_channel(1);
    (
        CompletionGuard {
            sender: Some(sender),
            cause: StreamEnd::Panicked,
        },
        Completion {
            receiver,
            observed: None,
        },
    )
}
