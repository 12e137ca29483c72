//! Projection of stored orders into the recent-orders table.

use crate::domain::{DisplayOrderRow, DisplayStatus, OrderRecord, OrderStatus};

use super::format_rupees;

/// Upper bound on rows in the recent-orders table.
pub const RECENT_ROWS: usize = 3;
/// Supplier label for the viewer's own orders.
const OWN_ORDER_SUPPLIER: &str = "Your Order";

/// Builds the bounded recent-orders view.
///
/// The first [`RECENT_ROWS`] stored orders are mapped in stored order; the
/// static seed rows fill whatever capacity remains. Stored orders always take
/// precedence, and the result never exceeds [`RECENT_ROWS`] rows.
pub fn project_recent(orders: &[OrderRecord]) -> Vec<DisplayOrderRow> {
    let mut rows: Vec<DisplayOrderRow> = orders.iter().take(RECENT_ROWS).map(to_row).collect();
    rows.extend(DisplayOrderRow::seed_rows());
    rows.truncate(RECENT_ROWS);
    rows
}

fn to_row(order: &OrderRecord) -> DisplayOrderRow {
    let items = order
        .items
        .iter()
        .map(|item| item.product_name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    DisplayOrderRow {
        id: order.order_number.clone(),
        supplier: OWN_ORDER_SUPPLIER.to_string(),
        items,
        status: display_status(&order.status),
        date: order.created_at.format("%Y-%m-%d").to_string(),
        amount: format_rupees(order.total),
    }
}

/// Translates a stored status into the table's display vocabulary.
/// Anything unrecognized shows as Processing.
fn display_status(status: &OrderStatus) -> DisplayStatus {
    match status {
        OrderStatus::Delivered => DisplayStatus::Delivered,
        OrderStatus::InTransit => DisplayStatus::InTransit,
        OrderStatus::Pending | OrderStatus::Processing | OrderStatus::Other(_) => {
            DisplayStatus::Processing
        }
    }
}
