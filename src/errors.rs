use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Invalid summarize request: {0}")]
    InvalidRequest(String),

    #[error("Content too short: {actual} characters, at least {min} required")]
    ContentTooShort { min: usize, actual: usize },

    #[error("Content too long: {actual} characters, at most {max} allowed")]
    ContentTooLong { max: usize, actual: usize },

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Failed to decode request body: {0}")]
    DecodeError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl SummaryError {
    /// HTTP status the API answers with for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            SummaryError::InvalidRequest(_) | SummaryError::ContentTooShort { .. } => 400,
            SummaryError::ContentTooLong { .. } => 413,
            SummaryError::MethodNotAllowed(_) => 405,
            SummaryError::DecodeError(_) | SummaryError::ConfigError(_) => 500,
        }
    }

    /// Client errors are reported verbatim; server errors are not.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

impl From<serde_json::Error> for SummaryError {
    fn from(error: serde_json::Error) -> Self {
        SummaryError::DecodeError(format!("invalid JSON: {error}"))
    }
}

impl From<base64::DecodeError> for SummaryError {
    fn from(error: base64::DecodeError) -> Self {
        SummaryError::DecodeError(format!("invalid base64: {error}"))
    }
}

impl From<std::str::Utf8Error> for SummaryError {
    fn from(error: std::str::Utf8Error) -> Self {
        SummaryError::DecodeError(format!("invalid UTF-8: {error}"))
    }
}
