//! Cancellation and deadlines for API calls.
//!
//! Every API call takes a [`Context`](crate::context::Context). If the context is cancelled, or its
//! deadline expires, while the request is in flight, the request is aborted and the call returns an
//! [`Error`](crate::Error) with status `0` carrying the cancellation cause.
//!
//! ```rust
//! # use lago_rust::context::Context;
//! # use std::time::Duration;
//! let ctx = Context::background().with_timeout(Duration::from_secs(5));
//! let (ctx, cancel) = ctx.with_cancel();
//! cancel.cancel();
//! assert!(ctx.err().is_some());
//! ```

use crate::error::Cause;
use futures::future::{select_all, FutureExt};
use std::{future::Future, time::Duration};
use tokio::{sync::watch, time::Instant};

/// Carries a deadline and a set of cancellation signals across API calls.
///
/// Contexts are cheap to clone. Derived contexts inherit every deadline and
/// cancellation signal of their parent.
#[derive(Debug, Clone, Default)]
pub struct Context {
    deadline: Option<Instant>,
    cancellations: Vec<watch::Receiver<bool>>,
}

/// Handle used to cancel a [`Context`](crate::context::Context) created with
/// [`with_cancel`](crate::context::Context::with_cancel).
///
/// Dropping the handle does not cancel the context.
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    /// Cancels the associated context and all the contexts derived from it.
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }
}

impl Context {
    /// Returns an empty context which is never cancelled and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    /// Returns a derived context which expires after `timeout`.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Returns a derived context which expires at `deadline`,
    /// or at the parent's deadline if that comes first.
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        Self {
            deadline: Some(self.deadline.map_or(deadline, |d| d.min(deadline))),
            cancellations: self.cancellations.clone(),
        }
    }

    /// Returns a derived context together with the handle to cancel it.
    pub fn with_cancel(&self) -> (Self, CancelHandle) {
        let (tx, rx) = watch::channel(false);

        let mut cancellations = self.cancellations.clone();
        cancellations.push(rx);

        (
            Self {
                deadline: self.deadline,
                cancellations,
            },
            CancelHandle { tx },
        )
    }

    /// Returns the deadline of this context, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns the reason why this context is done, or `None` if it is still live.
    pub fn err(&self) -> Option<Cause> {
        if self.cancellations.iter().any(|rx| *rx.borrow()) {
            return Some(Cause::Cancelled);
        }

        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(Cause::DeadlineExceeded),
            _ => None,
        }
    }

    /// Completes when this context is cancelled or its deadline expires.
    pub async fn done(&self) -> Cause {
        let cancelled = async {
            if self.cancellations.is_empty() {
                return std::future::pending::<()>().await;
            }

            let waits = self.cancellations.iter().cloned().map(|mut rx| {
                async move {
                    // A dropped handle can never cancel
                    if rx.wait_for(|cancelled| *cancelled).await.is_err() {
                        std::future::pending::<()>().await;
                    }
                }
                .boxed()
            });
            select_all(waits).await;
        };

        let expired = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            _ = cancelled => Cause::Cancelled,
            _ = expired => Cause::DeadlineExceeded,
        }
    }

    /// Runs `fut` to completion unless this context is done first, in which case `fut` is dropped.
    pub(crate) async fn run<F: Future>(&self, fut: F) -> Result<F::Output, Cause> {
        if let Some(cause) = self.err() {
            return Err(cause);
        }

        tokio::select! {
            biased;
            cause = self.done() => Err(cause),
            output = fut => Ok(output),
        }
    }
}
