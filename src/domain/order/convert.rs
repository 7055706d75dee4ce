//! Conversion: OrderResponse → Order (TryFrom + validation).

use super::wire;
use super::{Order, OrderItem, OrderItemValidationError, OrderStatus, OrderValidationError};
use std::collections::HashSet;

impl TryFrom<wire::OrderItemResponse> for OrderItem {
    type Error = OrderItemValidationError;

    fn try_from(source: wire::OrderItemResponse) -> Result<Self, Self::Error> {
        let id = u64::try_from(source.id)
            .ok()
            .filter(|id| *id > 0)
            .ok_or(OrderItemValidationError::InvalidId(source.id))?;

        if source.name.trim().is_empty() {
            return Err(OrderItemValidationError::EmptyName(id));
        }
        if source.quantity <= 0 {
            return Err(OrderItemValidationError::InvalidQuantity(id, source.quantity));
        }
        let quantity = u32::try_from(source.quantity)
            .map_err(|_| OrderItemValidationError::QuantityOutOfRange(id, source.quantity))?;
        if source.unit_price.is_sign_negative() && !source.unit_price.is_zero() {
            return Err(OrderItemValidationError::NegativeUnitPrice(id));
        }
        if source.total_price.is_sign_negative() && !source.total_price.is_zero() {
            return Err(OrderItemValidationError::NegativeTotalPrice(id));
        }

        Ok(OrderItem {
            id,
            stock_item_id: source.stock_item_id.and_then(|s| u64::try_from(s).ok()),
            name: source.name,
            quantity,
            unit_price: source.unit_price,
            total_price: source.total_price,
        })
    }
}

impl TryFrom<wire::OrderResponse> for Order {
    type Error = OrderValidationError;

    fn try_from(source: wire::OrderResponse) -> Result<Self, Self::Error> {
        let id = u64::try_from(source.id)
            .ok()
            .filter(|id| *id > 0)
            .ok_or(OrderValidationError::InvalidId(source.id))?;

        if source.total_amount.is_sign_negative() && !source.total_amount.is_zero() {
            return Err(OrderValidationError::NegativeTotal(id));
        }
        if source.updated_at < source.created_at {
            return Err(OrderValidationError::UpdatedBeforeCreated(id));
        }

        let mut seen = HashSet::new();
        let mut items = Vec::new();
        for raw in source.items.unwrap_or_default() {
            let item = OrderItem::try_from(raw).map_err(|source| OrderValidationError::Item {
                order_id: id,
                source,
            })?;
            if !seen.insert(item.id) {
                return Err(OrderValidationError::DuplicateItemId(id, item.id));
            }
            items.push(item);
        }

        Ok(Order {
            id,
            status: OrderStatus::parse(&source.status),
            total_amount: source.total_amount,
            created_at: source.created_at,
            updated_at: source.updated_at,
            items,
        })
    }
}
