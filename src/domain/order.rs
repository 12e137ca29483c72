//! The order schema as persisted by the order-placement flow.
//!
//! These records are owned by the Order Source; this crate only ever reads
//! them. Field names follow the stored payload's camelCase wire form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single line item within a stored order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_name: String,
    pub quantity: f64,
    pub unit: String,
    pub price: f64,
}

/// One order as written by the order-placement flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: String,
    pub order_number: String,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,
}

impl OrderRecord {
    /// Creates a new order record.
    ///
    /// # Arguments
    /// * `id` - Unique identifier assigned by the order-placement flow
    /// * `order_number` - Human-facing order number (shown in the table)
    /// * `items` - Line items
    /// * `total` - Order total
    /// * `status` - Current fulfillment status
    /// * `created_at` - Placement timestamp
    pub fn new(
        id: impl Into<String>,
        order_number: impl Into<String>,
        items: Vec<OrderItem>,
        total: f64,
        status: OrderStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            order_number: order_number.into(),
            items,
            total,
            status,
            created_at,
            delivery_address: None,
        }
    }
}

/// Fulfillment status of a stored order.
///
/// The wire form is a snake_case string. Statuses this view does not
/// recognize land in [`OrderStatus::Other`] rather than failing the whole
/// payload; they count as neither active nor delivered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    Processing,
    InTransit,
    Delivered,
    /// An unrecognized status, kept verbatim.
    Other(String),
}

impl OrderStatus {
    /// Whether this order still counts toward the Active Orders tile.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Processing | Self::InTransit)
    }
}

impl From<String> for OrderStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => Self::Pending,
            "processing" => Self::Processing,
            "in_transit" => Self::InTransit,
            "delivered" => Self::Delivered,
            _ => Self::Other(raw),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Pending => "pending".into(),
            OrderStatus::Processing => "processing".into(),
            OrderStatus::InTransit => "in_transit".into(),
            OrderStatus::Delivered => "delivered".into(),
            OrderStatus::Other(raw) => raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_decodes_known_wire_forms() {
        let record: OrderRecord = serde_json::from_str(
            r#"{
                "id": "o-1",
                "orderNumber": "ORD100",
                "items": [{"productName": "Onions", "quantity": 5, "unit": "kg", "price": 30}],
                "total": 150,
                "status": "in_transit",
                "createdAt": "2025-01-15T10:30:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(record.order_number, "ORD100");
        assert_eq!(record.status, OrderStatus::InTransit);
        assert!(record.status.is_active());
        assert_eq!(record.delivery_address, None);
        assert_eq!(record.items[0].product_name, "Onions");
    }

    #[test]
    fn unknown_status_is_preserved_not_rejected() {
        let status = OrderStatus::from("refunded".to_string());
        assert_eq!(status, OrderStatus::Other("refunded".to_string()));
        assert!(!status.is_active());
        assert_eq!(String::from(status), "refunded");
    }

    #[test]
    fn delivered_is_not_active() {
        assert!(!OrderStatus::Delivered.is_active());
        assert!(OrderStatus::Pending.is_active());
        assert!(OrderStatus::Processing.is_active());
    }
}
