//! Response translation: HTTP status + JSON envelope → typed value or typed error.
//!
//! Every endpoint answers with an envelope `{"ok": bool, "error": "...", ...payload}`.
//! Some failure modes (401, 404, and 500 on a venue heartbeat) come back with a
//! body that is empty, not JSON, or shaped differently, so the status code is
//! always classified first and the body is only parsed afterwards:
//!
//! 1. status code against the per-endpoint sentinel table
//! 2. body parsed as JSON ([`Error::Decode`] on failure)
//! 3. `ok: false` → [`Error::Api`] with the envelope's message
//! 4. payload extracted from the envelope ([`Error::Decode`] on mismatch)
//!
//! | Endpoint | 401 | 404 | 500 |
//! |----------|-----|-----|-----|
//! | heartbeat | | | |
//! | venue heartbeat | | venue not found | timeout |
//! | stocks | unauthorized | venue not found | |
//! | orderbook | unauthorized | stock not found | |
//! | place order | unauthorized | stock not found | |
//! | quote | unauthorized | stock not found | |
//! | order status | unauthorized | | |
//! | cancel order | unauthorized | stock not found | |
//! | account orders | unauthorized | | |
//! | account stock orders | unauthorized | | |

use log::warn;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// The API operations, as far as response handling is concerned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Heartbeat,
    VenueHeartbeat,
    Stocks,
    Orderbook,
    PlaceOrder,
    Quote,
    OrderStatus,
    CancelOrder,
    AccountOrders,
    AccountStockOrders,
}

/// A status code the endpoint gives a fixed meaning to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sentinel {
    Unauthorized,
    NotFound,
    Timeout,
}

impl Endpoint {
    pub const ALL: [Endpoint; 10] = [
        Endpoint::Heartbeat,
        Endpoint::VenueHeartbeat,
        Endpoint::Stocks,
        Endpoint::Orderbook,
        Endpoint::PlaceOrder,
        Endpoint::Quote,
        Endpoint::OrderStatus,
        Endpoint::CancelOrder,
        Endpoint::AccountOrders,
        Endpoint::AccountStockOrders,
    ];

    /// Look up `status` in this endpoint's sentinel table.
    ///
    /// `None` means the status carries no special meaning here and the
    /// envelope decides the outcome, whatever the code was.
    pub fn classify(self, status: u16) -> Option<Sentinel> {
        use Endpoint::*;
        match (self, status) {
            (Heartbeat, _) => None,
            (VenueHeartbeat, 404) => Some(Sentinel::NotFound),
            (VenueHeartbeat, 500) => Some(Sentinel::Timeout),
            (VenueHeartbeat, _) => None,
            (_, 401) => Some(Sentinel::Unauthorized),
            // The venue answers 404 on these with an ordinary error envelope.
            (OrderStatus | AccountOrders | AccountStockOrders, 404) => None,
            (_, 404) => Some(Sentinel::NotFound),
            _ => None,
        }
    }

    /// Short name used in log lines.
    pub fn name(self) -> &'static str {
        match self {
            Endpoint::Heartbeat => "heartbeat",
            Endpoint::VenueHeartbeat => "venue heartbeat",
            Endpoint::Stocks => "stocks",
            Endpoint::Orderbook => "orderbook",
            Endpoint::PlaceOrder => "place order",
            Endpoint::Quote => "quote",
            Endpoint::OrderStatus => "order status",
            Endpoint::CancelOrder => "cancel order",
            Endpoint::AccountOrders => "account orders",
            Endpoint::AccountStockOrders => "account stock orders",
        }
    }
}

/// The symbols a request was made for, used to fill in not-found errors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scope<'a> {
    pub venue: Option<&'a str>,
    pub stock: Option<&'a str>,
}

impl<'a> Scope<'a> {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn venue(venue: &'a str) -> Self {
        Self {
            venue: Some(venue),
            stock: None,
        }
    }

    pub fn stock(venue: &'a str, stock: &'a str) -> Self {
        Self {
            venue: Some(venue),
            stock: Some(stock),
        }
    }

    fn not_found(&self) -> Error {
        let venue = self.venue.unwrap_or_default().to_string();
        match self.stock {
            Some(stock) => Error::StockNotFound {
                venue,
                stock: stock.to_string(),
            },
            None => Error::VenueNotFound { venue },
        }
    }
}

/// The part of the envelope every endpoint shares.
#[derive(Debug, Deserialize)]
struct EnvelopeHead {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Turn a raw HTTP exchange into the endpoint's payload type.
pub fn translate<T>(endpoint: Endpoint, scope: Scope<'_>, status: u16, body: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    if let Some(sentinel) = endpoint.classify(status) {
        warn!("{} returned {status}", endpoint.name());
        return Err(match sentinel {
            Sentinel::Unauthorized => Error::Unauthorized,
            Sentinel::NotFound => scope.not_found(),
            Sentinel::Timeout => Error::ApiTimeout,
        });
    }

    let value: serde_json::Value = serde_json::from_slice(body)?;
    let head = EnvelopeHead::deserialize(&value)?;
    if !head.ok {
        let message = head.error.unwrap_or_default();
        warn!("{} failed ({status}): {message}", endpoint.name());
        return Err(Error::Api { message });
    }

    Ok(T::deserialize(value)?)
}

/// Payload for endpoints that return nothing beyond the envelope head.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Empty {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StockInfo;

    #[derive(Debug, Deserialize)]
    struct StockList {
        symbols: Vec<StockInfo>,
    }

    #[test]
    fn sentinel_table() {
        use Endpoint::*;
        use Sentinel::*;

        assert_eq!(Heartbeat.classify(401), None);
        assert_eq!(Heartbeat.classify(404), None);
        assert_eq!(Heartbeat.classify(500), None);

        assert_eq!(VenueHeartbeat.classify(401), None);
        assert_eq!(VenueHeartbeat.classify(404), Some(NotFound));
        assert_eq!(VenueHeartbeat.classify(500), Some(Timeout));

        for ep in [Stocks, Orderbook, PlaceOrder, Quote, CancelOrder] {
            assert_eq!(ep.classify(401), Some(Unauthorized), "{ep:?}");
            assert_eq!(ep.classify(404), Some(NotFound), "{ep:?}");
            assert_eq!(ep.classify(500), None, "{ep:?}");
        }

        for ep in [OrderStatus, AccountOrders, AccountStockOrders] {
            assert_eq!(ep.classify(401), Some(Unauthorized), "{ep:?}");
            assert_eq!(ep.classify(404), None, "{ep:?}");
            assert_eq!(ep.classify(500), None, "{ep:?}");
        }

        for ep in Endpoint::ALL {
            assert_eq!(ep.classify(200), None);
        }
    }

    #[test]
    fn unauthorized_ignores_body() {
        let err = translate::<Empty>(Endpoint::Quote, Scope::stock("V", "S"), 401, b"<html>")
            .unwrap_err();
        assert!(matches!(err, Error::Unauthorized));
    }

    #[test]
    fn not_found_carries_requested_symbols() {
        let err = translate::<Empty>(Endpoint::Stocks, Scope::venue("NOEXIST"), 404, b"")
            .unwrap_err();
        assert!(matches!(err, Error::VenueNotFound { ref venue } if venue == "NOEXIST"));

        let err = translate::<Empty>(
            Endpoint::Orderbook,
            Scope::stock("TESTEX", "NOEXIST"),
            404,
            br#"{"ok": true}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::StockNotFound { ref venue, ref stock } if venue == "TESTEX" && stock == "NOEXIST"
        ));
    }

    #[test]
    fn venue_heartbeat_500_is_timeout() {
        let err = translate::<Empty>(Endpoint::VenueHeartbeat, Scope::venue("V"), 500, b"")
            .unwrap_err();
        assert!(matches!(err, Error::ApiTimeout));
    }

    #[test]
    fn unclassified_status_falls_through_to_envelope() {
        let body = br#"{"ok": false, "error": "No venue exists with the symbol XXXX"}"#;
        let err = translate::<Empty>(Endpoint::Orderbook, Scope::stock("V", "S"), 500, body)
            .unwrap_err();
        let message = "No venue exists with the symbol XXXX";
        assert!(matches!(err, Error::Api { message: ref m } if m == message));

        let err = translate::<Empty>(Endpoint::OrderStatus, Scope::stock("V", "S"), 404, body)
            .unwrap_err();
        assert!(matches!(err, Error::Api { .. }));
    }

    #[test]
    fn ok_false_without_payload_is_api_error() {
        let err = translate::<StockList>(
            Endpoint::Stocks,
            Scope::venue("V"),
            200,
            br#"{"ok": false, "error": "boom"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Api { ref message } if message == "boom"));
    }

    #[test]
    fn ok_false_without_message() {
        let err = translate::<Empty>(Endpoint::Heartbeat, Scope::none(), 200, br#"{"ok": false}"#)
            .unwrap_err();
        assert!(matches!(err, Error::Api { ref message } if message.is_empty()));
    }

    #[test]
    fn malformed_body_is_decode_error() {
        let err = translate::<Empty>(Endpoint::Heartbeat, Scope::none(), 200, b"not json")
            .unwrap_err();
        assert!(matches!(err, Error::Decode(_)));

        let err = translate::<Empty>(Endpoint::Heartbeat, Scope::none(), 200, b"").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));

        // JSON, but no `ok` field.
        let err = translate::<Empty>(Endpoint::Heartbeat, Scope::none(), 200, br#"{"error": ""}"#)
            .unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn payload_mismatch_is_decode_error() {
        let body = br#"{"ok": true}"#;
        let err =
            translate::<StockList>(Endpoint::Stocks, Scope::venue("V"), 200, body).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn success_extracts_payload() {
        let body = br#"{"ok": true, "venue": "TESTEX",
                        "symbols": [{"symbol": "FOOBAR", "name": "Foo"}]}"#;
        let stocks: StockList =
            translate(Endpoint::Stocks, Scope::venue("TESTEX"), 200, body).unwrap();
        assert_eq!(stocks.symbols.len(), 1);
        assert_eq!(stocks.symbols[0].symbol, "FOOBAR");
    }

    #[test]
    fn heartbeat_error_field_may_be_null() {
        let empty: Empty = translate(
            Endpoint::Heartbeat,
            Scope::none(),
            200,
            br#"{"ok": true, "error": null}"#,
        )
        .unwrap();
        assert_eq!(empty, Empty {});
    }
}
