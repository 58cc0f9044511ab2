use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("{0}")]
    Http(String),

    #[error("Element not found on page {page:?}: {selector}")]
    MissingElement { page: String, selector: String },

    #[error("Invalid value for {field}: {value:?}")]
    InvalidField { field: &'static str, value: String },

    #[error("Unknown song: {0}")]
    UnknownSong(String),

    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Invalid filter {expr:?}: {reason}")]
    InvalidFilter { expr: String, reason: String },

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_field(field: &'static str, value: impl Into<String>) -> Self {
        Error::InvalidField {
            field,
            value: value.into(),
        }
    }

    pub(crate) fn missing(page: &str, selector: &str) -> Self {
        Error::MissingElement {
            page: page.to_string(),
            selector: selector.to_string(),
        }
    }

    /// Whether retrying the same request could succeed.
    ///
    /// Transport failures, 429 and 5xx are transient; other statuses are not.
    pub fn is_transient(&self) -> bool {
        match self {
            Error::Http(_) => true,
            Error::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParseError(e.to_string())
    }
}

impl From<ureq::Error> for Error {
    fn from(e: ureq::Error) -> Self {
        let message = match &e {
            ureq::Error::Timeout(_) => format!("Request timed out: {}", e),
            ureq::Error::HostNotFound | ureq::Error::ConnectionFailed => {
                format!("Connection failed: {}", e)
            }
            ureq::Error::Io(_) => format!("Transport error: {}", e),
            _ => format!("HTTP error: {}", e),
        };
        Error::Http(message)
    }
}
