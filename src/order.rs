//! Orders: the request body for placing one, and the status the venue reports back.

use serde::{Deserialize, Serialize};

use crate::types::null_as_empty;
use crate::{Direction, OrderId, OrderType, Price, Quantity, Timestamp};

/// A single execution against an order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFillInfo {
    #[serde(default)]
    pub price: Price,
    #[serde(rename = "qty", default)]
    pub quantity: Quantity,
    #[serde(rename = "ts", default)]
    pub timestamp: Option<Timestamp>,
}

/// Status of an open or closed order.
///
/// `total_filled` is the sum of the fill quantities and `quantity` is what is
/// still open. Both are taken from the venue as-is.
///
/// Fields the venue leaves out decode as zero, empty or `None`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatus {
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub direction: Option<Direction>,
    #[serde(rename = "originalQty", default)]
    pub original_quantity: Quantity,
    #[serde(rename = "qty", default)]
    pub quantity: Quantity,
    #[serde(default)]
    pub price: Price,
    #[serde(default)]
    pub order_type: Option<OrderType>,
    #[serde(rename = "id", default)]
    pub order_id: OrderId,
    #[serde(default)]
    pub account: String,
    #[serde(rename = "ts", default)]
    pub timestamp: Option<Timestamp>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub fills: Vec<OrderFillInfo>,
    #[serde(default)]
    pub total_filled: Quantity,
    #[serde(default)]
    pub open: bool,
}

impl OrderStatus {
    /// Volume-weighted average fill price in cents, if anything filled.
    pub fn avg_fill_price(&self) -> Option<f64> {
        let qty: u64 = self.fills.iter().map(|f| f.quantity).sum();
        if qty == 0 {
            return None;
        }
        let notional: u128 = self
            .fills
            .iter()
            .map(|f| f.price.0 as u128 * f.quantity as u128)
            .sum();
        Some(notional as f64 / qty as f64)
    }

    /// True once nothing remains open on the venue.
    pub fn is_fully_filled(&self) -> bool {
        self.total_filled >= self.original_quantity
    }
}

/// Body of `POST /venues/{venue}/stocks/{stock}/orders`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub account: String,
    pub venue: String,
    pub stock: String,
    pub price: Price,
    #[serde(rename = "qty")]
    pub quantity: Quantity,
    pub direction: Direction,
    pub order_type: OrderType,
}

impl NewOrder {
    /// A limit order, the common case.
    pub fn limit(
        account: impl Into<String>,
        venue: impl Into<String>,
        stock: impl Into<String>,
        direction: Direction,
        price: Price,
        quantity: Quantity,
    ) -> Self {
        Self {
            account: account.into(),
            venue: venue.into(),
            stock: stock.into(),
            price,
            quantity,
            direction,
            order_type: OrderType::Limit,
        }
    }

    /// Replace the order type.
    pub fn with_order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = order_type;
        self
    }
}
