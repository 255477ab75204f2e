//! # stockfighter
//!
//! A typed, blocking client for the Stockfighter exchange-simulation REST API.
//!
//! Every call is one request/response round trip. The response's status code
//! and JSON envelope are translated into either the endpoint's typed payload
//! or a typed [`Error`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use stockfighter::{Client, ClientConfig, Direction, NewOrder, Price};
//!
//! let client = Client::new(ClientConfig::new("your-api-key"))?;
//! client.heartbeat()?;
//!
//! let book = client.orderbook("TESTEX", "FOOBAR")?;
//! println!("best bid: {:?}", book.best_bid());
//!
//! let order = NewOrder::limit("EXB123456", "TESTEX", "FOOBAR", Direction::Buy, Price(52_64), 100);
//! let status = client.place_order(&order)?;
//! client.cancel_order("TESTEX", "FOOBAR", status.order_id)?;
//! # Ok::<(), stockfighter::Error>(())
//! ```
//!
//! ## Errors
//!
//! | Error | Cause |
//! |-------|-------|
//! | `InvalidArgument` | blank venue/stock/account, checked before sending |
//! | `Transport` | no HTTP response (connection, timeout, unreadable body) |
//! | `Unauthorized` | 401 |
//! | `VenueNotFound` / `StockNotFound` | 404 on venue- or stock-scoped calls |
//! | `ApiTimeout` | 500 on a venue heartbeat |
//! | `Decode` | body is not the expected JSON |
//! | `Api` | envelope `ok: false`, with the server's message |
//!
//! ## Testing
//!
//! [`mock::MockTransport`] answers from a script and records every request,
//! so client code can be tested without network access.
//!
//! ## Prices
//!
//! Prices are integer cents ([`Price`]); `Price(52_64)` displays as `$52.64`.

// Allow our dollar.cents digit grouping convention (e.g., 52_64 = $52.64)
#![allow(clippy::inconsistent_digit_grouping)]

pub mod client;
pub mod direction;
pub mod error;
#[cfg(feature = "http")]
pub mod http;
pub mod mock;
pub mod order;
pub mod order_type;
pub mod orderbook;
pub mod stock;
pub mod translate;
pub mod transport;
pub mod types;

pub use client::{Client, ClientConfig, DEFAULT_BASE_URL};
pub use direction::Direction;
pub use error::{Error, Result};
#[cfg(feature = "http")]
pub use http::HttpTransport;
pub use order::{NewOrder, OrderFillInfo, OrderStatus};
pub use order_type::OrderType;
pub use orderbook::{Orderbook, OrderbookEntry};
pub use stock::{StockInfo, StockQuote};
pub use translate::{Endpoint, Scope, Sentinel};
pub use transport::{Method, Request, Response, Transport};
pub use types::{OrderId, Price, Quantity, Timestamp};
