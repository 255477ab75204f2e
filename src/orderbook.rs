//! Orderbook snapshots as returned by a venue.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::null_as_empty;
use crate::{Price, Quantity, Timestamp};

/// One resting order in a book snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderbookEntry {
    pub price: Price,
    #[serde(rename = "qty")]
    pub quantity: Quantity,
    pub is_buy: bool,
}

impl fmt::Display for OrderbookEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = if self.is_buy { "BUY " } else { "SELL" };
        write!(f, "{side} {} x {}", self.price, self.quantity)
    }
}

/// A snapshot of a stock's orderbook.
///
/// Entries keep the order the venue sent them in (best price first).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Orderbook {
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub bids: Vec<OrderbookEntry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub asks: Vec<OrderbookEntry>,
    #[serde(rename = "ts", default)]
    pub timestamp: Option<Timestamp>,
}

impl Orderbook {
    /// Returns the best bid price, if any.
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.first().map(|e| e.price)
    }

    /// Returns the best ask price, if any.
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.first().map(|e| e.price)
    }

    /// Total quantity resting on the bid side.
    pub fn total_bid_quantity(&self) -> Quantity {
        self.bids.iter().map(|e| e.quantity).sum()
    }

    /// Total quantity resting on the ask side.
    pub fn total_ask_quantity(&self) -> Quantity {
        self.asks.iter().map(|e| e.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_display() {
        let bid = OrderbookEntry {
            price: Price(5264),
            quantity: 100,
            is_buy: true,
        };
        let ask = OrderbookEntry {
            price: Price(5300),
            quantity: 7,
            is_buy: false,
        };
        assert_eq!(bid.to_string(), "BUY  $52.64 x 100");
        assert_eq!(ask.to_string(), "SELL $53.00 x 7");
    }

    #[test]
    fn parse_keeps_server_order() {
        let json = r#"{
            "venue": "OGEX",
            "symbol": "FAC",
            "bids": [
                {"price": 5200, "qty": 10, "isBuy": true},
                {"price": 5250, "qty": 5, "isBuy": true}
            ],
            "asks": [
                {"price": 5300, "qty": 3, "isBuy": false}
            ],
            "ts": "2015-12-04T09:02:16.680986205Z"
        }"#;
        let book: Orderbook = serde_json::from_str(json).unwrap();
        // Not re-sorted locally even though 5250 > 5200.
        assert_eq!(book.bids[0].price, Price(5200));
        assert_eq!(book.bids[1].price, Price(5250));
        assert_eq!(book.best_bid(), Some(Price(5200)));
        assert_eq!(book.best_ask(), Some(Price(5300)));
        assert_eq!(book.total_bid_quantity(), 15);
        assert_eq!(book.total_ask_quantity(), 3);
    }

    #[test]
    fn parse_null_sides() {
        let json = r#"{
            "venue": "OGEX",
            "symbol": "FAC",
            "bids": null,
            "asks": null,
            "ts": "2015-12-04T09:02:16.680986205Z"
        }"#;
        let book: Orderbook = serde_json::from_str(json).unwrap();
        assert!(book.bids.is_empty());
        assert!(book.asks.is_empty());
        assert!(book.best_bid().is_none());
    }

    #[test]
    fn parse_without_timestamp() {
        let book: Orderbook = serde_json::from_str(r#"{"bids": [], "asks": []}"#).unwrap();
        assert!(book.timestamp.is_none());
        assert!(book.venue.is_empty());
    }
}
