//! Core wire types: Price, Quantity, Timestamp, OrderId

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Price in cents, exactly as the venue reports it.
///
/// `Price(5264)` represents $52.64. The API never sends fractional cents,
/// so no floating point is involved until display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(pub u64);

impl Price {
    pub const ZERO: Price = Price(0);

    /// Dollar value as a float, for display only.
    pub fn as_dollars(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Quantity of shares.
pub type Quantity = u64;

/// Wall-clock time reported by the venue (RFC 3339, UTC).
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Order identifier assigned by the venue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The venue sends `null` instead of `[]` for empty book sides and fill lists.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
