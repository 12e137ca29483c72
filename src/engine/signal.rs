//! Refresh signals and the clone-able handle that delivers them.
//!
//! The engine does not know where signals come from. The same-page
//! order-created notification and the cross-tab storage-change notification
//! are both adapters outside the crate holding a [`SignalHandle`] clone.

use thiserror::Error;
use tokio::sync::mpsc;

/// External notifications that trigger a dashboard recomputation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshSignal {
    /// An order was just placed on this page. Carries no payload; the engine
    /// re-reads the Order Source regardless.
    OrderCreated,
    /// A stored key changed in another tab. The engine only reacts when the
    /// key matches its configured source key.
    StorageChanged { key: String },
}

/// Error returned when the engine is no longer listening.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignalError {
    #[error("dashboard engine closed")]
    EngineClosed,
}

/// Client half of the signal channel.
///
/// Cheap to clone; adapters keep a clone for as long as their subscription
/// lives. Dropping every clone closes the channel, which is how the engine
/// learns the view was torn down.
#[derive(Clone)]
pub struct SignalHandle {
    sender: mpsc::Sender<RefreshSignal>,
}

impl SignalHandle {
    pub(crate) fn new(sender: mpsc::Sender<RefreshSignal>) -> Self {
        Self { sender }
    }

    /// Notifies the engine that an order was created on this page.
    pub async fn order_created(&self) -> Result<(), SignalError> {
        self.send(RefreshSignal::OrderCreated).await
    }

    /// Notifies the engine that `key` changed in another tab.
    pub async fn storage_changed(&self, key: impl Into<String>) -> Result<(), SignalError> {
        self.send(RefreshSignal::StorageChanged { key: key.into() })
            .await
    }

    async fn send(&self, signal: RefreshSignal) -> Result<(), SignalError> {
        self.sender
            .send(signal)
            .await
            .map_err(|_| SignalError::EngineClosed)
    }
}
