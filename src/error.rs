use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("configuration error: {0}")]
    Configuration(String),
    /// Any non-2xx answer from Harvest. `message` is whatever the error body carried.
    #[error("Server response code: {status}")]
    Status { status: u16, message: Option<String> },
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl HarvestError {
    pub fn status(&self) -> Option<u16> {
        match self {
            HarvestError::Status { status, .. } => Some(*status),
            HarvestError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, HarvestError>;
