//! # Observability & Tracing
//!
//! Structured logging for the dashboard engine via the `tracing` crate.
//!
//! ## What Gets Traced
//!
//! - **Engine lifecycle**: startup (with the configured source key) and stop
//! - **Derivation passes**: every "Dashboard updated" publish, with the
//!   stored-order and row counts as structured fields
//! - **Signal handling**: receipt, key filtering, and the order-created delay
//!   at `debug` level
//! - **The failure path**: malformed Order Source payloads at `warn`
//!
//! ## Configuration
//!
//! Levels are controlled through `RUST_LOG`; the format is compact with
//! module targets hidden (`with_target(false)`), which keeps log lines short
//! while preserving the structured fields.
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo test
//!
//! # Show signal handling and key filtering
//! RUST_LOG=debug cargo test
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
