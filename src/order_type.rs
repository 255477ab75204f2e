//! Order types accepted by a venue.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the venue should execute an order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderType {
    /// Rests on the book at the limit price until filled or cancelled.
    #[default]
    Limit,

    /// Executes against whatever is on the book. Price is ignored.
    Market,

    /// Fills the entire quantity immediately or nothing at all.
    FillOrKill,

    /// Fills what it can immediately, the remainder is cancelled.
    ImmediateOrCancel,
}

impl OrderType {
    pub const ALL: [OrderType; 4] = [
        OrderType::Limit,
        OrderType::Market,
        OrderType::FillOrKill,
        OrderType::ImmediateOrCancel,
    ];

    /// Wire form used by the API.
    pub fn as_str(self) -> &'static str {
        match self {
            OrderType::Limit => "limit",
            OrderType::Market => "market",
            OrderType::FillOrKill => "fill-or-kill",
            OrderType::ImmediateOrCancel => "immediate-or-cancel",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "limit" => Ok(OrderType::Limit),
            "market" => Ok(OrderType::Market),
            "fill-or-kill" | "fok" => Ok(OrderType::FillOrKill),
            "immediate-or-cancel" | "ioc" => Ok(OrderType::ImmediateOrCancel),
            other => Err(format!("unknown order type '{other}'")),
        }
    }
}
