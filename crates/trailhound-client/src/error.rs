use std::fmt;

/// Result type for trailhound-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the client layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Configuration missing or malformed
    Config(String),

    /// Transport-level HTTP failure (DNS, TLS, connect)
    Http(String),

    /// Backend replied with a non-success status
    Api { status: u16, message: String },

    /// Response body did not match the expected shape
    Json(serde_json::Error),

    /// Invalid backend URL
    Url(url::ParseError),

    /// A data command ran without a stored auth session
    NotSignedIn,

    /// Lookup by code/id matched nothing
    NotFound(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Http(msg) => write!(f, "HTTP error: {}", msg),
            Error::Api { status, message } => {
                write!(f, "Backend error (status {}): {}", status, message)
            }
            Error::Json(err) => write!(f, "Unexpected response shape: {}", err),
            Error::Url(err) => write!(f, "Invalid backend URL: {}", err),
            Error::NotSignedIn => {
                write!(f, "Not signed in; run `trailhound auth login` first")
            }
            Error::NotFound(what) => write!(f, "Not found: {}", what),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Url(err) => Some(err),
            Error::Config(_)
            | Error::Http(_)
            | Error::Api { .. }
            | Error::NotSignedIn
            | Error::NotFound(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Url(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
