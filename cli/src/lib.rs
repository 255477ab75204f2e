//! stockfighter-cli: command-line access to the Stockfighter API.
//!
//! Reads the API key and defaults from a TOML config, builds a
//! [`stockfighter::Client`], and prints the results of single API calls.

pub mod commands;
pub mod config;
pub mod error;
