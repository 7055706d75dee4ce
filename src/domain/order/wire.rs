//! Wire types for order REST responses.

use crate::shared::serde_util::{decimal_lenient, timestamp_iso};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// `GET /api/orders/{id}` body, and each element of `GET /api/orders`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderResponse {
    pub id: i64,
    pub status: String,
    #[serde(deserialize_with = "decimal_lenient::deserialize")]
    pub total_amount: Decimal,
    #[serde(deserialize_with = "timestamp_iso::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "timestamp_iso::deserialize")]
    pub updated_at: DateTime<Utc>,
    /// Absent and `null` both mean "no items".
    #[serde(default)]
    pub items: Option<Vec<OrderItemResponse>>,
}

/// A line item inside [`OrderResponse`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItemResponse {
    pub id: i64,
    #[serde(default)]
    pub stock_item_id: Option<i64>,
    pub name: String,
    pub quantity: i64,
    #[serde(deserialize_with = "decimal_lenient::deserialize")]
    pub unit_price: Decimal,
    #[serde(deserialize_with = "decimal_lenient::deserialize")]
    pub total_price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_summary_deserialize() {
        let json = r#"{
            "id": 1,
            "status": "ready",
            "total_amount": 25.0,
            "created_at": "2025-07-25T12:00:00",
            "updated_at": "2025-07-25T13:00:00",
            "items": [
                {"id": 10, "stock_item_id": 3, "name": "Widget", "quantity": 2,
                 "unit_price": 12.5, "total_price": 25.0}
            ]
        }"#;
        let order: OrderResponse = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, 1);
        assert_eq!(order.total_amount, Decimal::new(25, 0));
        let items = order.items.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].unit_price, Decimal::new(125, 1));
        assert_eq!(items[0].stock_item_id, Some(3));
    }

    #[test]
    fn test_missing_or_null_items() {
        let base = r#""id": 2, "status": "draft", "total_amount": 0,
            "created_at": "2025-07-25T12:00:00Z", "updated_at": "2025-07-25T12:00:00Z""#;
        let absent: OrderResponse = serde_json::from_str(&format!("{{{}}}", base)).unwrap();
        assert!(absent.items.is_none());
        let null: OrderResponse =
            serde_json::from_str(&format!("{{{}, \"items\": null}}", base)).unwrap();
        assert!(null.items.is_none());
    }

    #[test]
    fn test_missing_required_field_fails() {
        let json = r#"{"id": 1, "status": "ready", "created_at": "2025-07-25T12:00:00Z",
                       "updated_at": "2025-07-25T12:00:00Z"}"#;
        assert!(serde_json::from_str::<OrderResponse>(json).is_err());
    }

    #[test]
    fn test_decode_encode_decode_is_stable() {
        let json = r#"[
            {"id": 1, "status": "ready", "total_amount": 12.5,
             "created_at": "2025-07-25T12:00:00", "updated_at": "2025-07-25T13:00:00.250",
             "items": [{"id": 10, "name": "Widget", "quantity": 2,
                        "unit_price": 6.25, "total_price": "12.50"}]},
            {"id": 2, "status": "on_hold", "total_amount": 0.1,
             "created_at": "2025-07-25T12:00:00+02:00", "updated_at": "2025-07-25T12:00:00+02:00",
             "items": null}
        ]"#;
        let decoded: Vec<OrderResponse> = serde_json::from_str(json).unwrap();
        assert_eq!(decoded[0].total_amount, Decimal::new(125, 1));
        assert_eq!(decoded[1].total_amount, Decimal::new(1, 1));
        assert!(decoded[1].items.is_none());

        let encoded = serde_json::to_string(&decoded).unwrap();
        let again: Vec<OrderResponse> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(again, decoded);
    }

    #[test]
    fn test_domain_order_round_trips() {
        use crate::domain::order::Order;

        let json = r#"{"id": 3, "status": "shipped", "total_amount": 99.99,
            "created_at": "2025-07-25T12:00:00", "updated_at": "2025-07-26T08:30:00",
            "items": [{"id": 1, "stock_item_id": 4, "name": "Gadget", "quantity": 1,
                       "unit_price": 99.99, "total_price": 99.99}]}"#;
        let order = Order::try_from(serde_json::from_str::<OrderResponse>(json).unwrap()).unwrap();

        let encoded = serde_json::to_string(&order).unwrap();
        let again: Order = serde_json::from_str(&encoded).unwrap();
        assert_eq!(again, order);
        assert_eq!(again.total_amount, Decimal::new(9999, 2));
    }
}
