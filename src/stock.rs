//! Tradable symbols and top-of-book quotes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Price, Quantity, Timestamp};

/// A stock listed on a venue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockInfo {
    pub symbol: String,
    pub name: String,
}

impl fmt::Display for StockInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.symbol, self.name)
    }
}

/// Latest quote for a stock.
///
/// The venue omits `bid`/`ask` (and their size/depth) when that side of the
/// book is empty, and `lastTrade` before the first trade. Missing numeric
/// fields decode as zero, missing timestamps as `None`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockQuote {
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub symbol: String,

    #[serde(rename = "bid", default)]
    pub bid_price: Price,
    #[serde(default)]
    pub bid_size: Quantity,
    #[serde(default)]
    pub bid_depth: Quantity,

    #[serde(rename = "ask", default)]
    pub ask_price: Price,
    #[serde(default)]
    pub ask_size: Quantity,
    #[serde(default)]
    pub ask_depth: Quantity,

    #[serde(rename = "last", default)]
    pub last_price: Price,
    #[serde(default)]
    pub last_size: Quantity,
    #[serde(rename = "lastTrade", default)]
    pub last_trade_time: Option<Timestamp>,

    #[serde(default)]
    pub quote_time: Option<Timestamp>,
}

impl StockQuote {
    /// Best bid, if the bid side is populated.
    pub fn best_bid(&self) -> Option<Price> {
        (self.bid_size > 0).then_some(self.bid_price)
    }

    /// Best ask, if the ask side is populated.
    pub fn best_ask(&self) -> Option<Price> {
        (self.ask_size > 0).then_some(self.ask_price)
    }

    /// Ask minus bid in cents, when both sides are present and not crossed.
    pub fn spread(&self) -> Option<u64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => ask.0.checked_sub(bid.0),
            _ => None,
        }
    }
}
