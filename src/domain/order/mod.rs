//! Order domain: orders, line items, status, list filters.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::UserId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ─── OrderStatus ─────────────────────────────────────────────────────────────

/// Order lifecycle status as reported by the backend.
///
/// Unknown strings are kept verbatim in `Other` so a newer backend never
/// fails decoding on a status this client has not seen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Draft,
    Submitted,
    Processing,
    Shipped,
    Completed,
    Cancelled,
    Ready,
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Draft => "draft",
            OrderStatus::Submitted => "submitted",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Ready => "ready",
            OrderStatus::Other(s) => s,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "draft" => OrderStatus::Draft,
            "submitted" => OrderStatus::Submitted,
            "processing" => OrderStatus::Processing,
            "shipped" => OrderStatus::Shipped,
            "completed" => OrderStatus::Completed,
            "cancelled" => OrderStatus::Cancelled,
            "ready" => OrderStatus::Ready,
            other => OrderStatus::Other(other.to_string()),
        }
    }

    /// Title-cased label for display.
    pub fn label(&self) -> String {
        let s = self.as_str();
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for OrderStatus {
    fn from(s: String) -> Self {
        OrderStatus::parse(&s)
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.as_str().to_string()
    }
}

// ─── OrderItem ───────────────────────────────────────────────────────────────

/// A validated line item of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: u64,
    pub stock_item_id: Option<u64>,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
}

impl OrderItem {
    /// `unit_price × quantity`, or `None` if it overflows `Decimal`.
    pub fn expected_total(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity))
    }

    /// Whether the backend's `total_price` agrees with `unit_price × quantity`.
    /// An overflowing product never matches.
    pub fn total_matches(&self) -> bool {
        self.expected_total() == Some(self.total_price)
    }
}

// ─── Order ───────────────────────────────────────────────────────────────────

/// A validated, domain-level order snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub status: OrderStatus,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Line items in backend order.
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Sum of the line items' `total_price`, or `None` if it overflows `Decimal`.
    pub fn items_total(&self) -> Option<Decimal> {
        self.items
            .iter()
            .try_fold(Decimal::ZERO, |acc, i| acc.checked_add(i.total_price))
    }

    /// Whether the line totals add up to `total_amount`. Trivially true
    /// without items; an overflowing sum never matches.
    pub fn items_total_matches(&self) -> bool {
        self.items.is_empty() || self.items_total() == Some(self.total_amount)
    }
}

// ─── OrderFilter ─────────────────────────────────────────────────────────────

/// Query constraints for `GET /api/orders`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub user_id: Option<UserId>,
}

impl OrderFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_user(mut self, user_id: impl Into<UserId>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Encoded query string including the leading `?`, or empty.
    pub fn query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(s) = &self.status {
            params.push(format!("status={}", urlencoding::encode(s.as_str())));
        }
        if let Some(u) = &self.user_id {
            params.push(format!("user_id={}", urlencoding::encode(u.as_str())));
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq)]
pub enum OrderValidationError {
    #[error("Order id must be positive, got {0}")]
    InvalidId(i64),
    #[error("Order {0}: total_amount is negative")]
    NegativeTotal(u64),
    #[error("Order {0}: updated_at precedes created_at")]
    UpdatedBeforeCreated(u64),
    #[error("Order {0}: duplicate item id {1}")]
    DuplicateItemId(u64, u64),
    #[error("Order {order_id}: {source}")]
    Item {
        order_id: u64,
        source: OrderItemValidationError,
    },
}

#[derive(Debug, Error, PartialEq)]
pub enum OrderItemValidationError {
    #[error("item id must be positive, got {0}")]
    InvalidId(i64),
    #[error("item {0}: name is empty")]
    EmptyName(u64),
    #[error("item {0}: quantity must be positive, got {1}")]
    InvalidQuantity(u64, i64),
    #[error("item {0}: quantity {1} is out of range")]
    QuantityOutOfRange(u64, i64),
    #[error("item {0}: unit_price is negative")]
    NegativeUnitPrice(u64),
    #[error("item {0}: total_price is negative")]
    NegativeTotalPrice(u64),
}

impl From<OrderValidationError> for crate::error::FetchError {
    fn from(err: OrderValidationError) -> Self {
        crate::error::FetchError::Decode(err.to_string())
    }
}
