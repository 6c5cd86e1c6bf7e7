//! Error handling for the plant status API

use crate::consts::cli_consts::display::GENERIC_FETCH_ERROR;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The request did not complete within the request timeout.
    #[error("Request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// Connection refused, DNS failure, offline, or a broken transfer.
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP error with status {status}: {body}")]
    Http {
        status: u16,
        /// The `error` field of a JSON error body, if present.
        error: Option<String>,
        body: String,
    },

    /// A 2xx response whose body is not a plant status document.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            FetchError::Timeout(error)
        } else {
            FetchError::Network(error)
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl FetchError {
    pub async fn from_response(response: reqwest::Response) -> FetchError {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());
        Self::from_status_and_body(status, body)
    }

    pub fn from_status_and_body(status: u16, body: String) -> FetchError {
        let error = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.error)
            .filter(|e| !e.is_empty());
        FetchError::Http {
            status,
            error,
            body,
        }
    }

    /// Message shown in the error view: the server's `error` field when
    /// present, the generic failure text otherwise.
    pub fn display_message(&self) -> String {
        match self {
            FetchError::Http {
                error: Some(error), ..
            } => error.clone(),
            _ => GENERIC_FETCH_ERROR.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Failure to load the captured image. Only affects the image block.
#[derive(Debug, Error)]
pub enum ImageLoadError {
    #[error("Image request timed out")]
    Timeout,

    #[error("Image request failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Image request returned status {0}")]
    Status(u16),

    #[error("Unexpected image content type: {0}")]
    NotAnImage(String),
}

impl From<reqwest::Error> for ImageLoadError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            ImageLoadError::Timeout
        } else {
            ImageLoadError::Network(error)
        }
    }
}
