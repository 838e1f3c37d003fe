use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Failed to parse document change event: {0}")]
    EventError(String),

    #[error("Failed to access push delivery API: {0}")]
    DeliveryError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to access notification ledger: {0}")]
    LedgerError(String),
}

impl From<reqwest::Error> for RelayError {
    fn from(error: reqwest::Error) -> Self {
        RelayError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(error: serde_json::Error) -> Self {
        RelayError::EventError(error.to_string())
    }
}

impl From<anyhow::Error> for RelayError {
    fn from(error: anyhow::Error) -> Self {
        RelayError::DeliveryError(error.to_string())
    }
}
