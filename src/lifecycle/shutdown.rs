//! Shutdown coordination for interactive sessions.

use std::sync::Arc;

use tokio::sync::watch;

/// Coordinator for shutdown.
///
/// Clones share one flag; every `ShutdownSignal` observes the trigger, even
/// when subscribed after it fired.
#[derive(Clone)]
pub struct Shutdown {
    tx: Arc<watch::Sender<bool>>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    pub fn subscribe(&self) -> ShutdownSignal {
        ShutdownSignal {
            rx: self.tx.subscribe(),
        }
    }

    pub fn trigger(&self) {
        if !self.tx.send_replace(true) {
            tracing::info!("Shutdown triggered");
        }
    }

    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }

    /// Number of live `ShutdownSignal`s.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving half of `Shutdown`.
pub struct ShutdownSignal {
    rx: watch::Receiver<bool>,
}

impl ShutdownSignal {
    /// Resolves once shutdown has been triggered.
    pub async fn wait(&mut self) {
        // Err: every `Shutdown` clone is dropped.
        let _ = self.rx.wait_for(|triggered| *triggered).await;
    }
}
