use crate::mode::MediaKind;
use thiserror::Error;

/// Client-side precondition failures. These never reach the network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter at least {min} characters for text analysis.")]
    TextTooShort { min: usize, actual: usize },

    #[error("Please enter at least {min} characters for accurate AI detection.")]
    AiContentTooShort { min: usize, actual: usize },

    #[error("Please upload a {0} file first.")]
    MissingFile(MediaKind),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Server Error: {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to build request: {0}")]
    Request(String),

    #[error("Failed to parse response: {0}")]
    Malformed(String),
}

/// Everything a dispatch can fail with. The display string is what the
/// user sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// 2xx response that still encodes a logical failure.
    #[error("{0}")]
    Api(String),
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        TransportError::Malformed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_surfaced_verbatim() {
        let err: DispatchError = ValidationError::MissingFile(MediaKind::Audio).into();
        assert_eq!(err.to_string(), "Please upload a audio file first.");

        let err: DispatchError = TransportError::Status(502).into();
        assert_eq!(err.to_string(), "Server Error: 502");

        let err = DispatchError::Api("No text provided".into());
        assert_eq!(err.to_string(), "No text provided");
    }

    #[test]
    fn test_length_errors_name_the_minimum() {
        let err = ValidationError::TextTooShort { min: 20, actual: 3 };
        assert_eq!(
            err.to_string(),
            "Please enter at least 20 characters for text analysis."
        );
    }
}
