//! The typed API client.

use std::fmt;
use std::time::Duration;

use log::debug;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::order::{NewOrder, OrderStatus};
use crate::orderbook::Orderbook;
use crate::stock::{StockInfo, StockQuote};
use crate::translate::{Empty, Endpoint, Scope, translate};
use crate::transport::{Request, Transport};
use crate::types::{OrderId, null_as_empty};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.stockfighter.io/ob/api";

/// Everything needed to construct a [`Client`].
#[derive(Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    /// Per-request timeout; `None` leaves the HTTP stack's default.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    /// Point the client somewhere other than the production API.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

// Keep the key out of logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Deserialize)]
struct StocksPayload {
    #[serde(default, deserialize_with = "null_as_empty")]
    symbols: Vec<StockInfo>,
}

#[derive(Deserialize)]
struct OrdersPayload {
    #[serde(default, deserialize_with = "null_as_empty")]
    orders: Vec<OrderStatus>,
}

/// Trim an identifier and reject it if nothing is left.
///
/// The result is spliced into the URL path as-is, with no percent-encoding.
/// Venues, stocks and accounts are plain alphanumeric symbols; one holding
/// `/`, `?` or `%` would address a different route.
fn require<'a>(field: &'static str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::InvalidArgument { field });
    }
    Ok(value)
}

/// Stockfighter API client.
///
/// Holds only the API key and a transport, so one instance can be shared
/// across threads and used concurrently.
pub struct Client<T: Transport> {
    transport: T,
    api_key: String,
}

#[cfg(feature = "http")]
impl Client<crate::http::HttpTransport> {
    /// Create a client that talks to `config.base_url` over HTTP.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = crate::http::HttpTransport::new(&config)?;
        Ok(Self {
            transport,
            api_key: config.api_key,
        })
    }
}

impl<T: Transport> Client<T> {
    /// Create a client over any transport.
    pub fn with_transport(api_key: impl Into<String>, transport: T) -> Self {
        Self {
            transport,
            api_key: api_key.into(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn call<R>(&self, endpoint: Endpoint, scope: Scope<'_>, request: Request) -> Result<R>
    where
        R: DeserializeOwned,
    {
        debug!("{}: {} {}", endpoint.name(), request.method, request.path);
        let resp = self.transport.send(&request, &self.api_key)?;
        translate(endpoint, scope, resp.status, &resp.body)
    }

    /// Check that the API is up (GET /heartbeat). Sent without the API key.
    pub fn heartbeat(&self) -> Result<()> {
        let _: Empty = self.call(
            Endpoint::Heartbeat,
            Scope::none(),
            Request::get("/heartbeat").unauthenticated(),
        )?;
        Ok(())
    }

    /// Check that a venue is up (GET /venues/:venue/heartbeat).
    pub fn venue_heartbeat(&self, venue: &str) -> Result<()> {
        let venue = require("venue", venue)?;
        let _: Empty = self.call(
            Endpoint::VenueHeartbeat,
            Scope::venue(venue),
            Request::get(format!("/venues/{venue}/heartbeat")),
        )?;
        Ok(())
    }

    /// List the stocks traded on a venue (GET /venues/:venue/stocks).
    pub fn stocks(&self, venue: &str) -> Result<Vec<StockInfo>> {
        let venue = require("venue", venue)?;
        let payload: StocksPayload = self.call(
            Endpoint::Stocks,
            Scope::venue(venue),
            Request::get(format!("/venues/{venue}/stocks")),
        )?;
        Ok(payload.symbols)
    }

    /// Orderbook snapshot for a stock (GET /venues/:venue/stocks/:stock).
    pub fn orderbook(&self, venue: &str, stock: &str) -> Result<Orderbook> {
        let venue = require("venue", venue)?;
        let stock = require("stock", stock)?;
        self.call(
            Endpoint::Orderbook,
            Scope::stock(venue, stock),
            Request::get(format!("/venues/{venue}/stocks/{stock}")),
        )
    }

    /// Place an order (POST /venues/:venue/stocks/:stock/orders).
    pub fn place_order(&self, order: &NewOrder) -> Result<OrderStatus> {
        let venue = require("venue", &order.venue)?;
        let stock = require("stock", &order.stock)?;
        let account = require("account", &order.account)?;

        let body = NewOrder {
            account: account.to_string(),
            venue: venue.to_string(),
            stock: stock.to_string(),
            ..order.clone()
        };
        let body = serde_json::to_string(&body)?;

        self.call(
            Endpoint::PlaceOrder,
            Scope::stock(venue, stock),
            Request::post(format!("/venues/{venue}/stocks/{stock}/orders"), body),
        )
    }

    /// Latest quote for a stock (GET /venues/:venue/stocks/:stock/quote).
    pub fn quote(&self, venue: &str, stock: &str) -> Result<StockQuote> {
        let venue = require("venue", venue)?;
        let stock = require("stock", stock)?;
        self.call(
            Endpoint::Quote,
            Scope::stock(venue, stock),
            Request::get(format!("/venues/{venue}/stocks/{stock}/quote")),
        )
    }

    /// Status of an existing order (GET /venues/:venue/stocks/:stock/orders/:id).
    pub fn order_status(&self, venue: &str, stock: &str, id: OrderId) -> Result<OrderStatus> {
        let venue = require("venue", venue)?;
        let stock = require("stock", stock)?;
        self.call(
            Endpoint::OrderStatus,
            Scope::stock(venue, stock),
            Request::get(format!("/venues/{venue}/stocks/{stock}/orders/{id}")),
        )
    }

    /// Cancel an order (DELETE /venues/:venue/stocks/:stock/orders/:id).
    ///
    /// Returns the final status, with `open` false.
    pub fn cancel_order(&self, venue: &str, stock: &str, id: OrderId) -> Result<OrderStatus> {
        let venue = require("venue", venue)?;
        let stock = require("stock", stock)?;
        self.call(
            Endpoint::CancelOrder,
            Scope::stock(venue, stock),
            Request::delete(format!("/venues/{venue}/stocks/{stock}/orders/{id}")),
        )
    }

    /// All orders of an account on a venue (GET /venues/:venue/accounts/:account/orders).
    pub fn account_orders(&self, venue: &str, account: &str) -> Result<Vec<OrderStatus>> {
        let venue = require("venue", venue)?;
        let account = require("account", account)?;
        let payload: OrdersPayload = self.call(
            Endpoint::AccountOrders,
            Scope::venue(venue),
            Request::get(format!("/venues/{venue}/accounts/{account}/orders")),
        )?;
        Ok(payload.orders)
    }

    /// Orders of an account for one stock
    /// (GET /venues/:venue/accounts/:account/stocks/:stock/orders).
    pub fn account_stock_orders(
        &self,
        venue: &str,
        account: &str,
        stock: &str,
    ) -> Result<Vec<OrderStatus>> {
        let venue = require("venue", venue)?;
        let account = require("account", account)?;
        let stock = require("stock", stock)?;
        let payload: OrdersPayload = self.call(
            Endpoint::AccountStockOrders,
            Scope::stock(venue, stock),
            Request::get(format!(
                "/venues/{venue}/accounts/{account}/stocks/{stock}/orders"
            )),
        )?;
        Ok(payload.orders)
    }
}
