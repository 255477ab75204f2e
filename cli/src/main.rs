//! CLI entry point for the Stockfighter client.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use stockfighter::{Client, Direction, NewOrder, OrderId, OrderType, Price};
use stockfighter_cli::commands;
use stockfighter_cli::config::Config;
use stockfighter_cli::error::{Error, Result};

#[derive(Parser)]
#[command(name = "sf")]
#[command(about = "Stockfighter API from the command line")]
#[command(version)]
struct Cli {
    /// Path to config.toml
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check the API, or a single venue, is up
    Ping {
        venue: Option<String>,
    },

    /// List stocks on a venue
    Stocks {
        #[arg(long)]
        venue: Option<String>,
    },

    /// Show the orderbook for a stock
    Book {
        stock: String,
        #[arg(long)]
        venue: Option<String>,
        /// Levels per side to print
        #[arg(long, default_value_t = 10)]
        depth: usize,
    },

    /// Show the latest quote for a stock
    Quote {
        stock: String,
        #[arg(long)]
        venue: Option<String>,
    },

    /// Place an order
    Order {
        /// buy or sell
        direction: Direction,
        stock: String,
        quantity: u64,
        /// Limit price in cents
        price: u64,
        /// limit, market, fill-or-kill (fok), immediate-or-cancel (ioc)
        #[arg(long = "type", default_value = "limit")]
        order_type: OrderType,
        #[arg(long)]
        venue: Option<String>,
        #[arg(long)]
        account: Option<String>,
        /// Skip confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Show the status of an order
    Status {
        stock: String,
        id: u64,
        #[arg(long)]
        venue: Option<String>,
    },

    /// Cancel an order
    Cancel {
        stock: String,
        id: u64,
        #[arg(long)]
        venue: Option<String>,
    },

    /// List an account's orders, optionally for one stock
    Orders {
        #[arg(long)]
        stock: Option<String>,
        #[arg(long)]
        venue: Option<String>,
        #[arg(long)]
        account: Option<String>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let cli = Cli::parse();

    let config = match Config::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = run(&config, cli.command) {
        match &e {
            Error::Aborted(msg) => eprintln!("{msg}"),
            _ => eprintln!("Error: {e}"),
        }
        process::exit(e.exit_code());
    }
}

fn run(config: &Config, command: Command) -> Result<()> {
    let client = Client::new(config.client_config())?;
    let mut out = io::stdout().lock();

    match command {
        Command::Ping { venue } => commands::ping(&client, venue.as_deref(), &mut out),
        Command::Stocks { venue } => commands::stocks(&client, &config.venue(venue)?, &mut out),
        Command::Book {
            stock,
            venue,
            depth,
        } => commands::book(&client, &config.venue(venue)?, &stock, depth, &mut out),
        Command::Quote { stock, venue } => {
            commands::quote(&client, &config.venue(venue)?, &stock, &mut out)
        }
        Command::Order {
            direction,
            stock,
            quantity,
            price,
            order_type,
            venue,
            account,
            yes,
        } => {
            let order = NewOrder::limit(
                config.account(account)?,
                config.venue(venue)?,
                stock,
                direction,
                Price(price),
                quantity,
            )
            .with_order_type(order_type);

            if !yes {
                let confirmed = dialoguer::Confirm::new()
                    .with_prompt(format!(
                        "{} {} {} x {} @ {} on {}?",
                        order.order_type,
                        order.direction,
                        order.stock,
                        order.quantity,
                        order.price,
                        order.venue
                    ))
                    .default(false)
                    .interact()?;

                if !confirmed {
                    return Err(Error::Aborted("Aborted.".into()));
                }
            }

            commands::place(&client, &order, &mut out).map(drop)
        }
        Command::Status { stock, id, venue } => {
            commands::status(&client, &config.venue(venue)?, &stock, OrderId(id), &mut out)
        }
        Command::Cancel { stock, id, venue } => {
            commands::cancel(&client, &config.venue(venue)?, &stock, OrderId(id), &mut out)
        }
        Command::Orders {
            stock,
            venue,
            account,
        } => commands::orders(
            &client,
            &config.venue(venue)?,
            &config.account(account)?,
            stock.as_deref(),
            &mut out,
        ),
    }
}
