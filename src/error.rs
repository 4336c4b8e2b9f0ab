//! Submission errors

use thiserror::Error;

/// Fallback shown to the user when a failure carries no message
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Failure reported by a [`crate::submit::Submitter`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SubmitError {
    message: String,
}

impl SubmitError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Text forwarded to the form's error callback
    pub fn user_message(&self) -> String {
        if self.message.trim().is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            self.message.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_uses_service_text() {
        let err = SubmitError::new("Network down");
        assert_eq!(err.user_message(), "Network down");
        assert_eq!(err.to_string(), "Network down");
    }

    #[test]
    fn test_empty_message_falls_back() {
        assert_eq!(SubmitError::new("").user_message(), "An error occurred");
        assert_eq!(SubmitError::new("  ").user_message(), "An error occurred");
    }
}
