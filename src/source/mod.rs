//! Read seam to the external Order Source.
//!
//! The Order Source is a process-external key-value store holding the
//! serialized order list under a fixed key. This crate only reads it; the
//! order-placement flow owns the writes. Real adapters (a browser-storage
//! bridge, an IPC shim) implement [`OrderSource`] outside the crate;
//! [`MemoryStore`] stands in for them in tests and demos.

pub mod error;
pub mod memory;

pub use error::*;
pub use memory::*;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::OrderRecord;

/// Key under which the order-placement flow persists the order list.
pub const DEFAULT_SOURCE_KEY: &str = "vendorOrders";

/// Read interface to the external key-value store.
#[async_trait]
pub trait OrderSource: Send + Sync {
    /// Fetches the raw serialized payload stored under `key`, if any.
    async fn get(&self, key: &str) -> Option<String>;
}

/// Decodes a raw Order Source payload into order records.
pub fn parse_orders(raw: &str) -> Result<Vec<OrderRecord>, SourceError> {
    Ok(serde_json::from_str(raw)?)
}

/// Reads and decodes the order list stored under `key`.
///
/// An absent key or malformed payload yields an empty list. The decode
/// failure is logged and never surfaced to the caller; derivation then falls
/// back to baseline-only tiles and the seed rows.
pub async fn load_orders(source: &dyn OrderSource, key: &str) -> Vec<OrderRecord> {
    let Some(raw) = source.get(key).await else {
        return Vec::new();
    };
    match parse_orders(&raw) {
        Ok(orders) => orders,
        Err(error) => {
            warn!(%error, %key, "Malformed order payload, treating as empty");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OrderStatus;

    #[tokio::test]
    async fn absent_key_reads_as_empty() {
        let store = MemoryStore::new();
        let orders = load_orders(&store, DEFAULT_SOURCE_KEY).await;
        assert!(orders.is_empty());
    }

    #[tokio::test]
    async fn malformed_payload_reads_as_empty() {
        let store = MemoryStore::new();
        store.put(DEFAULT_SOURCE_KEY, "{\"not\": \"an array\"}");
        let orders = load_orders(&store, DEFAULT_SOURCE_KEY).await;
        assert!(orders.is_empty());

        store.put(DEFAULT_SOURCE_KEY, "garbage");
        let orders = load_orders(&store, DEFAULT_SOURCE_KEY).await;
        assert!(orders.is_empty());
    }

    #[tokio::test]
    async fn well_formed_payload_decodes() {
        let store = MemoryStore::new();
        store.put(
            DEFAULT_SOURCE_KEY,
            r#"[{
                "id": "o-1",
                "orderNumber": "ORD100",
                "items": [],
                "total": 1000,
                "status": "pending",
                "createdAt": "2025-01-15T10:30:00Z"
            }]"#,
        );
        let orders = load_orders(&store, DEFAULT_SOURCE_KEY).await;
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].status, OrderStatus::Pending);
        assert_eq!(orders[0].total, 1000.0);
    }
}
