//! One function per subcommand: call the API, print the result.
//!
//! Output goes to any `Write` so the commands can be tested against a
//! mock transport.

use std::fmt::Display;
use std::io::Write;

use log::info;
use stockfighter::{Client, NewOrder, OrderId, OrderStatus, Orderbook, StockQuote, Transport};

use crate::error::Result;

/// `sf ping [VENUE]`
pub fn ping<T: Transport>(
    client: &Client<T>,
    venue: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    match venue {
        Some(venue) => {
            client.venue_heartbeat(venue)?;
            writeln!(out, "{venue}: up")?;
        }
        None => {
            client.heartbeat()?;
            writeln!(out, "API: up")?;
        }
    }
    Ok(())
}

/// `sf stocks VENUE`
pub fn stocks<T: Transport>(client: &Client<T>, venue: &str, out: &mut impl Write) -> Result<()> {
    let stocks = client.stocks(venue)?;
    info!("{} stocks on {venue}", stocks.len());
    for stock in &stocks {
        writeln!(out, "{stock}")?;
    }
    Ok(())
}

/// `sf book VENUE STOCK [--depth N]`
pub fn book<T: Transport>(
    client: &Client<T>,
    venue: &str,
    stock: &str,
    depth: usize,
    out: &mut impl Write,
) -> Result<()> {
    let book = client.orderbook(venue, stock)?;
    write_book(&book, depth, out)
}

pub fn write_book(book: &Orderbook, depth: usize, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{} {} @ {}", book.venue, book.symbol, or_dash(&book.timestamp))?;
    // Asks printed best-last so the spread sits in the middle.
    for entry in book.asks.iter().take(depth).rev() {
        writeln!(out, "  {entry}")?;
    }
    writeln!(out, "  ----")?;
    for entry in book.bids.iter().take(depth) {
        writeln!(out, "  {entry}")?;
    }
    Ok(())
}

/// `sf quote VENUE STOCK`
pub fn quote<T: Transport>(
    client: &Client<T>,
    venue: &str,
    stock: &str,
    out: &mut impl Write,
) -> Result<()> {
    let quote = client.quote(venue, stock)?;
    write_quote(&quote, out)
}

pub fn write_quote(q: &StockQuote, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{} {} @ {}", q.venue, q.symbol, or_dash(&q.quote_time))?;
    writeln!(out, "  bid  {} x {} (depth {})", q.bid_price, q.bid_size, q.bid_depth)?;
    writeln!(out, "  ask  {} x {} (depth {})", q.ask_price, q.ask_size, q.ask_depth)?;
    match q.last_trade_time {
        Some(ts) => writeln!(out, "  last {} x {} at {ts}", q.last_price, q.last_size)?,
        None => writeln!(out, "  last -")?,
    }
    Ok(())
}

/// `sf order ...` (after confirmation)
pub fn place<T: Transport>(
    client: &Client<T>,
    order: &NewOrder,
    out: &mut impl Write,
) -> Result<OrderStatus> {
    info!(
        "placing {} {} {} x {} @ {} on {}",
        order.order_type, order.direction, order.stock, order.quantity, order.price, order.venue
    );
    let status = client.place_order(order)?;
    write_status(&status, out)?;
    Ok(status)
}

/// `sf status VENUE STOCK ID`
pub fn status<T: Transport>(
    client: &Client<T>,
    venue: &str,
    stock: &str,
    id: OrderId,
    out: &mut impl Write,
) -> Result<()> {
    let status = client.order_status(venue, stock, id)?;
    write_status(&status, out)
}

/// `sf cancel VENUE STOCK ID`
pub fn cancel<T: Transport>(
    client: &Client<T>,
    venue: &str,
    stock: &str,
    id: OrderId,
    out: &mut impl Write,
) -> Result<()> {
    let status = client.cancel_order(venue, stock, id)?;
    write_status(&status, out)
}

/// `sf orders VENUE ACCOUNT [--stock STOCK]`
pub fn orders<T: Transport>(
    client: &Client<T>,
    venue: &str,
    account: &str,
    stock: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let orders = match stock {
        Some(stock) => client.account_stock_orders(venue, account, stock)?,
        None => client.account_orders(venue, account)?,
    };
    if orders.is_empty() {
        writeln!(out, "no orders")?;
    }
    for order in &orders {
        write_status_line(order, out)?;
    }
    Ok(())
}

pub fn write_status(s: &OrderStatus, out: &mut impl Write) -> Result<()> {
    write_status_line(s, out)?;
    for fill in &s.fills {
        let at = or_dash(&fill.timestamp);
        writeln!(out, "    fill {} x {} at {at}", fill.price, fill.quantity)?;
    }
    Ok(())
}

fn write_status_line(s: &OrderStatus, out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "#{} {} {} {} {}/{} @ {} filled {} [{}]",
        s.order_id,
        s.symbol,
        or_dash(&s.direction),
        or_dash(&s.order_type),
        s.quantity,
        s.original_quantity,
        s.price,
        s.total_filled,
        if s.open { "open" } else { "closed" },
    )?;
    Ok(())
}

/// Fields the venue left out print as `-`.
fn or_dash<T: Display>(value: &Option<T>) -> String {
    value.as_ref().map_or_else(|| "-".to_string(), T::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockfighter::mock::MockTransport;

    fn run(
        mock: &MockTransport,
        f: impl FnOnce(&Client<&MockTransport>, &mut Vec<u8>) -> Result<()>,
    ) -> String {
        let client = Client::with_transport("k", mock);
        let mut out = Vec::new();
        f(&client, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn ping_global_and_venue() {
        let mock = MockTransport::always(200, r#"{"ok": true}"#);
        assert_eq!(run(&mock, |c, o| ping(c, None, o)), "API: up\n");
        assert_eq!(run(&mock, |c, o| ping(c, Some("TESTEX"), o)), "TESTEX: up\n");
    }

    #[test]
    fn book_orders_asks_above_bids() {
        let mock = MockTransport::always(
            200,
            r#"{"ok": true, "venue": "V", "symbol": "S",
                "bids": [{"price": 100, "qty": 1, "isBuy": true}],
                "asks": [{"price": 110, "qty": 2, "isBuy": false},
                         {"price": 120, "qty": 3, "isBuy": false}],
                "ts": "2015-12-04T09:02:16Z"}"#,
        );
        let text = run(&mock, |c, o| book(c, "V", "S", 10, o));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "  SELL $1.20 x 3");
        assert_eq!(lines[2], "  SELL $1.10 x 2");
        assert_eq!(lines[3], "  ----");
        assert_eq!(lines[4], "  BUY  $1.00 x 1");
    }

    #[test]
    fn empty_order_listing() {
        let mock = MockTransport::always(200, r#"{"ok": true, "venue": "V", "orders": []}"#);
        assert_eq!(run(&mock, |c, o| orders(c, "V", "A", None, o)), "no orders\n");
    }

    #[test]
    fn sparse_order_prints_dashes() {
        let mock = MockTransport::always(
            200,
            r#"{"ok": true, "id": 12345, "originalQty": 4625, "price": 5264,
                "open": true, "fills": [{"price": 5264, "qty": 25}]}"#,
        );
        let text = run(&mock, |c, o| status(c, "V", "S", OrderId(12345), o));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "#12345  - - 0/4625 @ $52.64 filled 0 [open]");
        assert_eq!(lines[1], "    fill $52.64 x 25 at -");
    }

    #[test]
    fn api_errors_propagate() {
        let mock = MockTransport::always(401, "");
        let client = Client::with_transport("k", &mock);
        let err = stocks(&client, "V", &mut Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Client(stockfighter::Error::Unauthorized)
        ));
    }
}
