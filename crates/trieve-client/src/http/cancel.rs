//! Cooperative cancellation for in-flight dispatch calls
//!
//! A caller holds a [`CancelHandle`] and passes the paired [`CancelToken`]
//! into a dispatch call. Firing the handle aborts the in-flight network
//! request and the call fails with a cancellation signal rather than a
//! response.

use tokio::sync::watch;

/// Create a linked cancellation pair
pub fn cancel_pair() -> (CancelHandle, CancelToken) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx }, CancelToken { rx })
}

/// Caller-side trigger for cancelling a dispatch call
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    /// Fire the cancellation signal
    ///
    /// Idempotent; tokens that already observed the signal are unaffected.
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }
}

/// Token forwarded into the transport layer
#[derive(Debug, Clone)]
pub struct CancelToken {
    rx: watch::Receiver<bool>,
}

impl CancelToken {
    /// Whether the paired handle already fired
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolve once the paired handle fires
    ///
    /// If the handle is dropped without firing, this future never resolves,
    /// leaving the transport race to be decided by the response.
    pub async fn cancelled(&mut self) {
        if *self.rx.borrow() {
            return;
        }
        loop {
            if self.rx.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
            if *self.rx.borrow() {
                return;
            }
        }
    }
}
