use std::fmt;

/// Result type for airqual-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while querying the feature service
#[derive(Debug)]
pub enum Error {
    /// Non-200 HTTP status from the service
    Transport(u16),

    /// Error payload returned inside an otherwise parseable body
    Service(String),

    /// The query matched no features
    NoData,

    /// Required query constraint was not supplied
    Usage(String),

    /// Request URL could not be constructed
    Url(String),

    /// HTTP client failure (connect, timeout, TLS)
    Http(reqwest::Error),

    /// Response body was not valid JSON
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(status) => write!(f, "transport error: status {}", status),
            Error::Service(payload) => write!(f, "error returned from server: {}", payload),
            Error::NoData => write!(f, "no data found"),
            Error::Usage(msg) => write!(f, "{}", msg),
            Error::Url(msg) => write!(f, "invalid request url: {}", msg),
            Error::Http(err) => write!(f, "http request failed: {}", err),
            Error::Json(err) => write!(f, "malformed response: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Transport(_)
            | Error::Service(_)
            | Error::NoData
            | Error::Usage(_)
            | Error::Url(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
