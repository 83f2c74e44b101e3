//! Core types for the HTTP callback library
//!
//! This module defines the error type shared by every callback layer. Errors
//! raised by a completion handler travel through adapters and requests
//! unchanged, so there is exactly one error type for the whole chain.

/// Result type for callback operations
pub type Result<T> = std::result::Result<T, CallbackError>;

/// Failures a completion callback can signal
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CallbackError {
    /// The result payload could not be decoded into the expected structure
    #[error("Failed to decode result payload: {0}")]
    Format(String),

    /// The operation was cancelled or the waiting thread was interrupted
    #[error("Operation interrupted before completion")]
    Interrupted,
}

impl CallbackError {
    /// Create a format error from any message
    pub fn format(message: impl Into<String>) -> Self {
        CallbackError::Format(message.into())
    }

    /// True if this is a payload decoding failure
    pub fn is_format(&self) -> bool {
        matches!(self, CallbackError::Format(_))
    }

    /// True if this is an interruption/cancellation failure
    pub fn is_interrupted(&self) -> bool {
        matches!(self, CallbackError::Interrupted)
    }
}

impl From<serde_json::Error> for CallbackError {
    fn from(err: serde_json::Error) -> Self {
        CallbackError::Format(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let format = CallbackError::format("unexpected token");
        assert!(format.is_format());
        assert!(!format.is_interrupted());
        assert_eq!(
            format.to_string(),
            "Failed to decode result payload: unexpected token"
        );

        let interrupted = CallbackError::Interrupted;
        assert!(interrupted.is_interrupted());
        assert!(!interrupted.is_format());
    }

    #[test]
    fn test_json_error_is_format() {
        let err = serde_json::from_str::<serde_json::Value>("{\"status\":").unwrap_err();
        let converted: CallbackError = err.into();
        assert!(converted.is_format());
    }
}
