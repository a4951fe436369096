use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
pub enum AppError {
    #[error("Network Error: {0}")]
    Network(String),

    #[error("Validation Error: {0}")]
    Validation(String),

    #[error("Calculation Error: {0}")]
    Calculation(String),

    #[error("Assistant Error: {0}")]
    Assistant(String),

    #[error("Feature Error: {0}")]
    Feature(String),

    /// Returned by a feature that does not own the requested action so the
    /// dispatcher can keep walking the remaining features.
    #[error("Unsupported action type")]
    UnsupportedAction,

    #[error("Unknown Error: {0}")]
    Unknown(String),
}

// Implement conversion from standard errors
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("Serialization error: {}", err))
    }
}

impl From<String> for AppError {
    fn from(err: String) -> Self {
        AppError::Unknown(err)
    }
}

pub type AppResult<T> = Result<T, AppError>;
