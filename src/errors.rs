use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Request could not be sent or the body stream broke
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Server answered with something other than 200
    #[error("HTTP {status}")]
    HttpStatus { status: u16 },
    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    UrlError(String),
    /// IO operation failed
    #[error("IO error: {0}")]
    IoError(String),
    /// Invalid input format
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::NetworkError(err.to_string())
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::UrlError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

// Custom type alias for Results in this application
pub type AppResult<T> = Result<T, AppError>;
