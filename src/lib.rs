//! # Vendor Dashboard Engine
//!
//! The derived-view core of a vendor-facing dashboard. It reads an ordered
//! list of order records from an external key-value **Order Source**, derives
//! four summary tiles and a bounded "recent orders" table from them, and
//! republishes both whenever a refresh signal fires.
//!
//! Rendering (tiles, tables, navigation between sub-views) is the host
//! application's job; this crate's outbound surface is a single published
//! [`DashboardSnapshot`](domain::DashboardSnapshot) value.
//!
//! ## Design
//!
//! The engine is a small actor: it owns its state, processes refresh signals
//! sequentially from an mpsc channel, and publishes snapshots through a watch
//! channel. No locks are needed because only the engine task ever recomputes.
//! Everything the engine computes flows through two pure functions,
//! [`stats::derive_stats`] and [`stats::project_recent`], so the derivation
//! logic is testable without a runtime.
//!
//! ## Module Tour
//!
//! - [`domain`]: the stored order schema and the display DTOs the view
//!   consumes (summary tiles, table rows, the published snapshot).
//! - [`source`]: the read seam to the external Order Source, plus the
//!   in-process [`MemoryStore`](source::MemoryStore) used by tests and demos.
//! - [`stats`]: the pure derivation core (four tiles, recent-order rows).
//! - [`engine`]: the actor loop, its refresh signals, and the clone-able
//!   [`SignalHandle`](engine::SignalHandle) adapters deliver signals through.
//! - [`lifecycle`]: system wiring, graceful teardown, and tracing setup.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use vendor_dashboard::engine::DashboardConfig;
//! use vendor_dashboard::lifecycle::VendorDashboard;
//! use vendor_dashboard::source::MemoryStore;
//!
//! let store = Arc::new(MemoryStore::new());
//! let mut dashboard = VendorDashboard::start(store, DashboardConfig::default());
//!
//! // An order-placement flow notifies the engine after writing the store.
//! dashboard.signals.order_created().await?;
//! dashboard.changed().await?;
//! let snapshot = dashboard.snapshot();
//!
//! dashboard.shutdown().await?;
//! ```
//!
//! ### Logging
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show signal handling and key filtering
//! RUST_LOG=debug cargo run
//! ```

pub mod domain;
pub mod engine;
pub mod lifecycle;
pub mod source;
pub mod stats;
