//! Cancellation utilities
//!
//! Provides cancellation handles and per-call deadlines for in-flight requests.

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::error::{AkismetError, Result};

/// A handle that can be used to request cancellation.
///
/// Clones share the same signal, so one handle can abort several calls.
#[derive(Clone, Debug, Default)]
pub struct CancelHandle {
    token: CancellationToken,
}

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Requests observing this handle return
    /// [`AkismetError::Cancelled`] right away; dropping the in-flight future
    /// closes its connection.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Check if cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// A future that resolves when cancellation is requested.
    pub fn cancelled(&self) -> tokio_util::sync::WaitForCancellationFuture<'_> {
        self.token.cancelled()
    }
}

/// Create a standalone cancel handle that can be shared across tasks.
pub fn new_cancel_handle() -> CancelHandle {
    CancelHandle::new()
}

/// Drive `future` until it finishes, `cancel` fires or `timeout` elapses.
///
/// Cancellation wins ties, so an already-cancelled handle never lets the
/// request start.
pub async fn run_cancellable<F, T>(
    future: F,
    cancel: Option<&CancelHandle>,
    timeout: Option<Duration>,
) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let cancelled = async {
        match cancel {
            Some(handle) => handle.cancelled().await,
            None => std::future::pending::<()>().await,
        }
    };
    let expired = async {
        match timeout {
            Some(limit) => tokio::time::sleep(limit).await,
            None => std::future::pending::<()>().await,
        }
    };

    tokio::select! {
        biased;
        _ = cancelled => Err(AkismetError::Cancelled),
        _ = expired => Err(AkismetError::TimeoutError(format!(
            "no response within {:?}",
            timeout.unwrap_or_default()
        ))),
        res = future => res,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn cancel_wakes_pending_request_immediately() {
        let cancel = new_cancel_handle();
        let waiter = {
            let cancel = cancel.clone();
            tokio::spawn(async move {
                run_cancellable(std::future::pending::<Result<()>>(), Some(&cancel), None).await
            })
        };

        // Give the task a chance to poll and block.
        tokio::task::yield_now().await;
        cancel.cancel();

        let out = tokio::time::timeout(Duration::from_millis(200), waiter)
            .await
            .expect("cancel should wake the waiting task")
            .expect("task ok");
        assert_eq!(out, Err(AkismetError::Cancelled));
    }

    #[tokio::test]
    async fn cancellation_wins_over_ready_request() {
        let cancel = CancelHandle::new();
        cancel.cancel();
        let out = run_cancellable(async { Ok(()) }, Some(&cancel), None).await;
        assert_eq!(out, Err(AkismetError::Cancelled));
    }

    #[tokio::test]
    async fn deadline_elapses() {
        let out = run_cancellable(
            std::future::pending::<Result<()>>(),
            None,
            Some(Duration::from_millis(20)),
        )
        .await;
        assert!(matches!(out, Err(AkismetError::TimeoutError(_))));
    }

    #[tokio::test]
    async fn completed_request_passes_through() {
        let cancel = CancelHandle::new();
        let out = run_cancellable(
            async { Ok(42) },
            Some(&cancel),
            Some(Duration::from_secs(5)),
        )
        .await;
        assert_eq!(out, Ok(42));
        assert!(!cancel.is_cancelled());
    }
}
