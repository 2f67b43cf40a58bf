use std::fmt;

/// Custom error type for report generation
#[derive(Debug)]
pub enum OctoError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned a non-success status code
    Api { status: u16, message: String },
    /// GraphQL response carried an `errors` array
    GraphQl {
        context: String,
        messages: Vec<String>,
    },
    /// A scope lookup (enterprise, organization, team, repository) matched nothing
    NotFound { kind: &'static str, name: String },
    /// Token not found in any source
    TokenNotFound(String),
    /// Configuration error
    Config(String),
    /// JSON parsing error
    Json(String),
    /// Report file could not be created or written
    Output(String),
}

impl fmt::Display for OctoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OctoError::Http(e) => write!(f, "HTTP request failed: {}", e),
            OctoError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            OctoError::GraphQl { context, messages } => {
                write!(
                    f,
                    "GraphQL error fetching {}: {}",
                    context,
                    messages.join("; ")
                )
            }
            OctoError::NotFound { kind, name } => write!(f, "{} '{}' not found", kind, name),
            OctoError::TokenNotFound(msg) => write!(f, "{}", msg),
            OctoError::Config(msg) => write!(f, "Configuration error: {}", msg),
            OctoError::Json(msg) => write!(f, "JSON error: {}", msg),
            OctoError::Output(msg) => write!(f, "Output error: {}", msg),
        }
    }
}

impl std::error::Error for OctoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OctoError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for OctoError {
    fn from(err: reqwest::Error) -> Self {
        OctoError::Http(err)
    }
}

impl From<serde_json::Error> for OctoError {
    fn from(err: serde_json::Error) -> Self {
        OctoError::Json(err.to_string())
    }
}

impl From<serde_yml::Error> for OctoError {
    fn from(err: serde_yml::Error) -> Self {
        OctoError::Config(err.to_string())
    }
}

impl From<csv::Error> for OctoError {
    fn from(err: csv::Error) -> Self {
        OctoError::Output(err.to_string())
    }
}

impl From<std::io::Error> for OctoError {
    fn from(err: std::io::Error) -> Self {
        OctoError::Output(err.to_string())
    }
}

/// Result type alias for report operations
pub type Result<T> = std::result::Result<T, OctoError>;
