//! Client error types.

/// Boxed transport-level cause.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by every client operation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request never produced a usable HTTP response.
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The body was not the JSON shape the endpoint promises.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("not authorized")]
    Unauthorized,

    #[error("venue not found: {venue}")]
    VenueNotFound { venue: String },

    #[error("stock not found: {stock} (venue: {venue})")]
    StockNotFound { venue: String, stock: String },

    /// The venue process did not answer its heartbeat.
    #[error("API timed out")]
    ApiTimeout,

    /// The envelope came back with `ok: false`.
    #[error("API error: {message}")]
    Api { message: String },

    /// A required identifier was blank. Raised before any request is sent.
    #[error("invalid argument: {field} must not be blank")]
    InvalidArgument { field: &'static str },
}

impl Error {
    /// Wrap any error as a transport failure.
    pub fn transport<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        Error::Transport(err.into())
    }

    /// True for failures reported by the venue itself, as opposed to local
    /// argument checks or network problems.
    pub fn is_server_side(&self) -> bool {
        matches!(
            self,
            Error::Unauthorized
                | Error::VenueNotFound { .. }
                | Error::StockNotFound { .. }
                | Error::ApiTimeout
                | Error::Api { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Error::Unauthorized.to_string(), "not authorized");
        assert_eq!(
            Error::VenueNotFound {
                venue: "NOEXIST".into()
            }
            .to_string(),
            "venue not found: NOEXIST"
        );
        assert_eq!(
            Error::StockNotFound {
                venue: "TESTEX".into(),
                stock: "NOEXIST".into()
            }
            .to_string(),
            "stock not found: NOEXIST (venue: TESTEX)"
        );
        assert_eq!(Error::ApiTimeout.to_string(), "API timed out");
        assert_eq!(
            Error::Api {
                message: "boom".into()
            }
            .to_string(),
            "API error: boom"
        );
        assert_eq!(
            Error::InvalidArgument { field: "venue" }.to_string(),
            "invalid argument: venue must not be blank"
        );
    }

    #[test]
    fn transport_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = Error::transport(io);
        assert!(err.to_string().contains("refused"));
        assert!(std::error::Error::source(&err).is_some());
        assert!(!err.is_server_side());
    }

    #[test]
    fn decode_from_serde() {
        let parse_err = serde_json::from_str::<u64>("nope").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn server_side_classification() {
        assert!(Error::Unauthorized.is_server_side());
        assert!(Error::ApiTimeout.is_server_side());
        assert!(!Error::InvalidArgument { field: "stock" }.is_server_side());
    }
}
