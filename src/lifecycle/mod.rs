//! System wiring and teardown.
//!
//! [`VendorDashboard`] plays the orchestrator role: it spawns the engine
//! task, hands out the signal handle and snapshot receivers, and joins the
//! task on shutdown.

pub mod tracing;

pub use self::tracing::setup_tracing;

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::domain::DashboardSnapshot;
use crate::engine::{DashboardConfig, DashboardEngine, SignalHandle};
use crate::source::OrderSource;

/// Errors surfaced by the running dashboard system.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The engine stopped, so no further snapshots will arrive.
    #[error("dashboard engine stopped")]
    EngineStopped,
    /// The engine task panicked or was cancelled.
    #[error("engine task failed: {0}")]
    EngineTaskFailed(String),
}

/// The running dashboard: the engine task plus the handles the rest of the
/// application talks through.
pub struct VendorDashboard {
    /// Handle adapters use to request a refresh.
    pub signals: SignalHandle,
    snapshot_rx: watch::Receiver<DashboardSnapshot>,
    handle: JoinHandle<()>,
}

impl VendorDashboard {
    /// Spawns the engine against `source` and returns the running system.
    ///
    /// The engine performs its initial derivation pass as soon as its task is
    /// scheduled; until then [`VendorDashboard::snapshot`] returns the
    /// placeholder default.
    pub fn start(source: Arc<dyn OrderSource>, config: DashboardConfig) -> Self {
        let (engine, signals, snapshot_rx) = DashboardEngine::new(source, config);
        let handle = tokio::spawn(engine.run());
        Self {
            signals,
            snapshot_rx,
            handle,
        }
    }

    /// The most recently published snapshot.
    pub fn snapshot(&self) -> DashboardSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Waits for the next published snapshot.
    pub async fn changed(&mut self) -> Result<(), DashboardError> {
        self.snapshot_rx
            .changed()
            .await
            .map_err(|_| DashboardError::EngineStopped)
    }

    /// A dedicated snapshot receiver for the presentation layer.
    pub fn subscribe(&self) -> watch::Receiver<DashboardSnapshot> {
        self.snapshot_rx.clone()
    }

    /// Releases the signal subscription and waits for the engine to stop.
    ///
    /// Dropping the system's signal handle closes the channel once every
    /// adapter clone is gone too; the engine then exits its loop. Callers
    /// that handed clones to long-lived adapters must drop those first.
    pub async fn shutdown(self) -> Result<(), DashboardError> {
        ::tracing::info!("Shutting down dashboard...");
        drop(self.signals);
        drop(self.snapshot_rx);
        self.handle
            .await
            .map_err(|e| DashboardError::EngineTaskFailed(format!("{e:?}")))?;
        ::tracing::info!("Dashboard shutdown complete.");
        Ok(())
    }
}
