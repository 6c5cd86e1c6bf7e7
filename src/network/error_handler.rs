//! Centralized error classification

use crate::api::error::{FetchError, ImageLoadError};
use crate::logging::LogLevel;

/// Maps fetch failures to the log level of their activity event
#[derive(Debug, Clone, Default)]
pub struct ErrorHandler;

impl ErrorHandler {
    pub fn new() -> Self {
        Self
    }

    /// Classify error and determine appropriate log level
    pub fn classify_error(&self, error: &FetchError) -> LogLevel {
        match (error, error.status()) {
            // Rate limiting - low priority
            (_, Some(429)) => LogLevel::Debug,

            // Server errors - temporary issues
            (_, Some(status)) if (500..=599).contains(&status) => LogLevel::Warn,

            // Authentication errors - critical
            (_, Some(401 | 403)) => LogLevel::Error,

            // Wrong plant ID or endpoint
            (_, Some(404)) => LogLevel::Error,

            // Network issues - usually temporary
            (FetchError::Timeout(_) | FetchError::Network(_), _) => LogLevel::Warn,

            // Payload contract mismatch
            (FetchError::Decode(_), _) => LogLevel::Error,

            _ => LogLevel::Warn,
        }
    }

    /// Image failures are handled in place, so they never rise above a warning
    pub fn classify_image_error(&self, error: &ImageLoadError) -> LogLevel {
        match error {
            ImageLoadError::Status(403) => LogLevel::Warn, // expired pre-signed URL
            ImageLoadError::Timeout | ImageLoadError::Network(_) => LogLevel::Warn,
            _ => LogLevel::Debug,
        }
    }
}
