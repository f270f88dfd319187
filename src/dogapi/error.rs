use std::fmt;

/// Custom error types for the breed API client
#[derive(Debug, Clone)]
pub enum DogApiError {
    /// Error when the breed request cannot be sent or completed
    RequestFailed(String),
    /// Error when the API answers with a non-success status
    Status(u16),
    /// Error when the response body is not a valid breed list
    Decode(String),
}

impl fmt::Display for DogApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DogApiError::RequestFailed(msg) => write!(f, "Breed request failed: {}", msg),
            DogApiError::Status(code) => write!(f, "Breed request returned status {}", code),
            DogApiError::Decode(msg) => write!(f, "Invalid breed payload: {}", msg),
        }
    }
}

impl std::error::Error for DogApiError {}

impl From<reqwest::Error> for DogApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            DogApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            DogApiError::Status(status.as_u16())
        } else {
            DogApiError::RequestFailed(err.to_string())
        }
    }
}

/// Result type for breed API operations
pub type DogApiResult<T> = Result<T, DogApiError>;
