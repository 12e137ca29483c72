//! The dashboard engine actor.
//!
//! One engine instance runs per mounted dashboard view. It follows the
//! resource-actor shape: exclusive ownership of state, a sequential event
//! loop over an mpsc receiver, shutdown by dropping the senders. The "state"
//! here is derived rather than authoritative, so every signal simply triggers
//! a full read-derive-publish pass.

pub mod signal;

pub use signal::*;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

use crate::domain::DashboardSnapshot;
use crate::source::{load_orders, OrderSource, DEFAULT_SOURCE_KEY};
use crate::stats::{derive_stats, project_recent};

/// Tunable policy for the engine.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Order Source key holding the serialized order list.
    pub source_key: String,
    /// Delay between an order-created signal and the recomputation.
    ///
    /// The notifier may fire before its write lands in the Order Source;
    /// this is best-effort slack for that ordering, not a guarantee.
    pub refresh_delay: Duration,
    /// Signal channel capacity.
    pub signal_buffer: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            source_key: DEFAULT_SOURCE_KEY.to_string(),
            refresh_delay: Duration::from_millis(100),
            signal_buffer: 32,
        }
    }
}

/// The actor that owns the dashboard's derived state.
///
/// Signals are processed one at a time; redundant signals each trigger their
/// own recomputation (the pass is idempotent, so this is harmless by
/// construction and nothing is coalesced). The loop exits once every
/// [`SignalHandle`] clone has been dropped.
pub struct DashboardEngine {
    receiver: mpsc::Receiver<RefreshSignal>,
    source: Arc<dyn OrderSource>,
    config: DashboardConfig,
    snapshot_tx: watch::Sender<DashboardSnapshot>,
}

impl DashboardEngine {
    /// Creates the engine plus the handles the application talks through.
    ///
    /// The snapshot receiver starts at [`DashboardSnapshot::default`], the
    /// placeholder view shown until the first pass publishes.
    pub fn new(
        source: Arc<dyn OrderSource>,
        config: DashboardConfig,
    ) -> (Self, SignalHandle, watch::Receiver<DashboardSnapshot>) {
        let (signal_tx, receiver) = mpsc::channel(config.signal_buffer);
        let (snapshot_tx, snapshot_rx) = watch::channel(DashboardSnapshot::default());
        let engine = Self {
            receiver,
            source,
            config,
            snapshot_tx,
        };
        (engine, SignalHandle::new(signal_tx), snapshot_rx)
    }

    /// Runs the event loop: one refresh up front, then one per signal.
    pub async fn run(mut self) {
        info!(key = %self.config.source_key, "Dashboard engine started");
        self.refresh().await;

        while let Some(signal) = self.receiver.recv().await {
            match signal {
                RefreshSignal::OrderCreated => {
                    debug!("Order created, refreshing");
                    tokio::time::sleep(self.config.refresh_delay).await;
                    self.refresh().await;
                }
                RefreshSignal::StorageChanged { key } if key == self.config.source_key => {
                    debug!(%key, "Order list changed in another tab, refreshing");
                    self.refresh().await;
                }
                RefreshSignal::StorageChanged { key } => {
                    debug!(%key, "Ignoring change to unrelated key");
                }
            }
        }

        info!("Dashboard engine stopped");
    }

    /// One full derivation pass: read, derive, publish.
    async fn refresh(&self) {
        let orders = load_orders(self.source.as_ref(), &self.config.source_key).await;
        let snapshot = DashboardSnapshot {
            stats: derive_stats(&orders),
            recent_orders: project_recent(&orders),
        };
        info!(
            orders = orders.len(),
            rows = snapshot.recent_orders.len(),
            "Dashboard updated"
        );
        // A torn-down view just means nobody is watching; not an error.
        let _ = self.snapshot_tx.send(snapshot);
    }
}
