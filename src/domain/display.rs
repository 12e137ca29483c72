//! Display DTOs consumed by the presentation layer.
//!
//! Everything here is ephemeral: rebuilt on every derivation pass, no
//! identity across passes.

use serde::Serialize;
use std::fmt;

/// Icon vocabulary for the four summary tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MetricIcon {
    Package,
    ShoppingCart,
    Star,
    TrendingUp,
}

/// One dashboard tile: a label plus a display-ready value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryMetric {
    pub label: &'static str,
    /// Pre-formatted for display (currency prefix, grouping, etc.).
    pub value: String,
    pub icon: MetricIcon,
    pub color_class: &'static str,
    pub bg_class: &'static str,
}

/// Fixed display vocabulary for the recent-orders table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DisplayStatus {
    Processing,
    #[serde(rename = "In Transit")]
    InTransit,
    Delivered,
}

impl fmt::Display for DisplayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Processing => "Processing",
            Self::InTransit => "In Transit",
            Self::Delivered => "Delivered",
        };
        f.write_str(label)
    }
}

/// One row of the recent-orders table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayOrderRow {
    /// The human-facing order number.
    pub id: String,
    pub supplier: String,
    /// Product names, comma-joined.
    pub items: String,
    pub status: DisplayStatus,
    pub date: String,
    pub amount: String,
}

impl DisplayOrderRow {
    /// Static sample rows shown while the viewer has no stored orders.
    ///
    /// Real orders always take precedence; these only fill remaining slots in
    /// the 3-row table.
    pub fn seed_rows() -> Vec<DisplayOrderRow> {
        vec![
            DisplayOrderRow {
                id: "ORD001".into(),
                supplier: "Green Valley Farms".into(),
                items: "Onions, Tomatoes".into(),
                status: DisplayStatus::Delivered,
                date: "2025-01-10".into(),
                amount: "₹1,200".into(),
            },
            DisplayOrderRow {
                id: "ORD002".into(),
                supplier: "Fresh Harvest Co.".into(),
                items: "Potatoes, Carrots".into(),
                status: DisplayStatus::InTransit,
                date: "2025-01-12".into(),
                amount: "₹800".into(),
            },
            DisplayOrderRow {
                id: "ORD003".into(),
                supplier: "Organic Fields".into(),
                items: "Flour, Oil".into(),
                status: DisplayStatus::Processing,
                date: "2025-01-13".into(),
                amount: "₹2,100".into(),
            },
        ]
    }
}

/// Everything the dashboard view renders: the four tiles in fixed order and
/// up to three recent-order rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSnapshot {
    pub stats: [SummaryMetric; 4],
    pub recent_orders: Vec<DisplayOrderRow>,
}

impl Default for DashboardSnapshot {
    /// The placeholder shown before the first derivation pass completes.
    fn default() -> Self {
        Self {
            stats: [
                SummaryMetric {
                    label: "Active Orders",
                    value: "12".to_string(),
                    icon: MetricIcon::Package,
                    color_class: "text-blue-600",
                    bg_class: "bg-blue-100",
                },
                SummaryMetric {
                    label: "Total Spent",
                    value: "₹45,600".to_string(),
                    icon: MetricIcon::ShoppingCart,
                    color_class: "text-green-600",
                    bg_class: "bg-green-100",
                },
                SummaryMetric {
                    label: "Avg Rating",
                    value: "4.8".to_string(),
                    icon: MetricIcon::Star,
                    color_class: "text-yellow-600",
                    bg_class: "bg-yellow-100",
                },
                SummaryMetric {
                    label: "Savings",
                    value: "₹8,200".to_string(),
                    icon: MetricIcon::TrendingUp,
                    color_class: "text-purple-600",
                    bg_class: "bg-purple-100",
                },
            ],
            recent_orders: DisplayOrderRow::seed_rows(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_snapshot_matches_pre_load_view() {
        let snapshot = DashboardSnapshot::default();
        let labels: Vec<&str> = snapshot.stats.iter().map(|s| s.label).collect();
        assert_eq!(
            labels,
            vec!["Active Orders", "Total Spent", "Avg Rating", "Savings"]
        );
        assert_eq!(snapshot.stats[0].value, "12");
        assert_eq!(snapshot.stats[1].value, "₹45,600");
        assert_eq!(snapshot.recent_orders, DisplayOrderRow::seed_rows());
    }

    #[test]
    fn display_status_labels() {
        assert_eq!(DisplayStatus::InTransit.to_string(), "In Transit");
        assert_eq!(DisplayStatus::Delivered.to_string(), "Delivered");
        assert_eq!(DisplayStatus::Processing.to_string(), "Processing");
    }
}
