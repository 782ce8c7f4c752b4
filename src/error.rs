use thiserror::Error;

/// Unified error type for the Replica API client.
///
/// Every operation fails fast with exactly one of these variants; nothing is
/// retried or recovered internally, and no partial results accompany a
/// failure.
#[derive(Debug, Error)]
pub enum Error {
    /// Endpoint or credential problem detected before any request is made.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Network transport or response-body read failure from the underlying
    /// HTTP client.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body did not match the expected JSON shape for the endpoint.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// HTTP 401 carrying the service's unauthorized shape.
    #[error("{exception} : {}", .reasons.join("; "))]
    Unauthorized {
        exception: String,
        reasons: Vec<String>,
    },

    /// HTTP 400 from the speech endpoint.
    #[error("{code} : {message}")]
    BadRequest { code: i64, message: String },

    /// The call requires a bearer token but none is held yet; no request was
    /// made.
    #[error("authorization token is missing, make sure you authenticate first")]
    MissingAuthorization,

    /// Any status code outside the contract for the endpoint.
    #[error("unknown response (HTTP {status})")]
    UnknownResponse { status: u16 },
}

impl Error {
    /// Create a new configuration error.
    pub(crate) fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
        }
    }
}
