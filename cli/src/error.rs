//! Error types for the command-line front end.

use std::path::PathBuf;

/// All errors that can occur while running a command.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("missing {0}: pass it on the command line or set it under [defaults]")]
    MissingArgument(&'static str),

    #[error(transparent)]
    Client(#[from] stockfighter::Error),

    #[error("output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("confirmation prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// The user answered "no" at the confirmation prompt.
    #[error("{0}")]
    Aborted(String),
}

impl Error {
    /// Process exit status: 0 when the user declined, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Aborted(_) => 0,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
