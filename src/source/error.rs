//! Error handling for the alarm source module

use thiserror::Error;

/// The single refresh-failure kind: transport trouble, a non-2xx status, or
/// a payload that does not decode as a snapshot.
#[derive(Debug, Error)]
pub enum AlarmSourceError {
    /// Failed to decode the JSON snapshot from the server
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// An error occurred while processing the request.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },
}

impl AlarmSourceError {
    pub async fn from_response(response: reqwest::Response) -> AlarmSourceError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        AlarmSourceError::Http { status, message }
    }
}
