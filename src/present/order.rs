//! Order → view model.

use crate::domain::order::{Order, OrderItem};
use crate::shared::fmt::{format_timestamp, format_usd};
use serde::Serialize;

/// Render-ready projection of an [`Order`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderViewModel {
    pub id: u64,
    pub title: String,
    pub status: String,
    pub total: String,
    pub created_at: String,
    pub updated_at: String,
    /// `None` when the order has no line items: render no table at all.
    pub items: Option<Vec<OrderItemRow>>,
    /// Whether the line totals add up to the order total.
    pub items_total_matches: bool,
}

/// One row of the line-item table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderItemRow {
    pub id: u64,
    pub name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub total_price: String,
    /// `total_price == unit_price × quantity`.
    pub total_matches: bool,
}

/// Project an order into its view model.
///
/// Pure and deterministic. Items keep backend order.
pub fn renderable_of(order: &Order) -> OrderViewModel {
    let items = if order.items.is_empty() {
        None
    } else {
        Some(order.items.iter().map(row_of).collect())
    };

    OrderViewModel {
        id: order.id,
        title: format!("Order #{}", order.id),
        status: order.status.label(),
        total: format_usd(&order.total_amount),
        created_at: format_timestamp(&order.created_at),
        updated_at: format_timestamp(&order.updated_at),
        items,
        items_total_matches: order.items_total_matches(),
    }
}

fn row_of(item: &OrderItem) -> OrderItemRow {
    OrderItemRow {
        id: item.id,
        name: item.name.clone(),
        quantity: item.quantity,
        unit_price: format_usd(&item.unit_price),
        total_price: format_usd(&item.total_price),
        total_matches: item.total_matches(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderStatus;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    fn item(id: u64, name: &str, qty: u32, unit: Decimal, total: Decimal) -> OrderItem {
        OrderItem {
            id,
            stock_item_id: None,
            name: name.to_string(),
            quantity: qty,
            unit_price: unit,
            total_price: total,
        }
    }

    fn order(total: Decimal, items: Vec<OrderItem>) -> Order {
        Order {
            id: 42,
            status: OrderStatus::Ready,
            total_amount: total,
            created_at: Utc.with_ymd_and_hms(2025, 7, 25, 12, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 7, 25, 13, 30, 0).unwrap(),
            items,
        }
    }

    #[test]
    fn test_total_renders_two_decimals() {
        let vm = renderable_of(&order(Decimal::new(125, 1), vec![]));
        assert_eq!(vm.total, "$12.50");
        assert_eq!(vm.title, "Order #42");
        assert_eq!(vm.status, "Ready");
        assert_eq!(vm.created_at, "2025-07-25 12:00 UTC");
        assert_eq!(vm.updated_at, "2025-07-25 13:30 UTC");
    }

    #[test]
    fn test_empty_items_render_no_table() {
        let vm = renderable_of(&order(Decimal::ZERO, vec![]));
        assert!(vm.items.is_none());
        assert!(vm.items_total_matches);
    }

    #[test]
    fn test_items_keep_backend_order() {
        let o = order(
            Decimal::new(35, 0),
            vec![
                item(9, "Zeta", 1, Decimal::new(10, 0), Decimal::new(10, 0)),
                item(2, "Alpha", 2, Decimal::new(125, 1), Decimal::new(25, 0)),
            ],
        );
        let rows = renderable_of(&o).items.unwrap();
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Zeta", "Alpha"]);
        assert_eq!(rows[1].unit_price, "$12.50");
        assert_eq!(rows[1].total_price, "$25.00");
        assert!(rows.iter().all(|r| r.total_matches));
    }

    #[test]
    fn test_mismatched_totals_are_flagged_not_fixed() {
        let o = order(
            Decimal::new(99, 0),
            vec![item(1, "Widget", 3, Decimal::new(2, 0), Decimal::new(5, 0))],
        );
        let vm = renderable_of(&o);
        let rows = vm.items.as_ref().unwrap();
        assert!(!rows[0].total_matches);
        assert_eq!(rows[0].total_price, "$5.00");
        assert!(!vm.items_total_matches);
    }

    #[test]
    fn test_renderable_of_is_deterministic() {
        let o = order(
            Decimal::new(1234567, 2),
            vec![item(1, "Widget", 1, Decimal::new(1234567, 2), Decimal::new(1234567, 2))],
        );
        let a = renderable_of(&o);
        let b = renderable_of(&o);
        assert_eq!(a, b);
        assert_eq!(a.total, "$12,345.67");
    }

    #[test]
    fn test_overflowing_totals_render_as_mismatch() {
        // 1e28: close to Decimal::MAX, so ×100 and an 8-way sum both overflow.
        let huge = Decimal::from_str_exact("10000000000000000000000000000").unwrap();
        let mut items = vec![item(1, "Bulk", 100, huge, huge)];
        items.extend((2..=8).map(|id| item(id, "Unit", 1, huge, huge)));

        let vm = renderable_of(&order(huge, items));

        let rows = vm.items.as_ref().unwrap();
        assert!(!rows[0].total_matches);
        assert!(rows[1].total_matches);
        assert!(!vm.items_total_matches);
    }
}
