//! Error types for the windsock pipeline

use thiserror::Error;

/// Main error type for the windsock library
///
/// Every variant is caught at the dashboard boundary and converted into
/// degraded but structurally valid output; none of them reach the consumer
/// as a failed response.
#[derive(Error, Debug)]
pub enum WindsockError {
    /// The source ranking step could not run
    #[error("source selection unavailable: {reason}")]
    SelectionUnavailable { reason: String },

    /// The live provider request failed (transport error or bad status)
    #[error("provider fetch failed: {reason}")]
    ProviderFetchFailed { reason: String },

    /// The provider answered, but the payload is missing required sections
    /// or has the wrong shape
    #[error("malformed provider payload: {reason}")]
    MalformedPayload { reason: String },
}

impl WindsockError {
    /// Create a new selection error
    pub fn selection_unavailable<S: Into<String>>(reason: S) -> Self {
        Self::SelectionUnavailable {
            reason: reason.into(),
        }
    }

    /// Create a new fetch error
    pub fn fetch_failed<S: Into<String>>(reason: S) -> Self {
        Self::ProviderFetchFailed {
            reason: reason.into(),
        }
    }

    /// Create a new payload error
    pub fn malformed<S: Into<String>>(reason: S) -> Self {
        Self::MalformedPayload {
            reason: reason.into(),
        }
    }
}

impl From<reqwest::Error> for WindsockError {
    fn from(err: reqwest::Error) -> Self {
        WindsockError::ProviderFetchFailed {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let selection_err = WindsockError::selection_unavailable("ranking service down");
        assert!(matches!(
            selection_err,
            WindsockError::SelectionUnavailable { .. }
        ));

        let fetch_err = WindsockError::fetch_failed("status 503");
        assert!(matches!(fetch_err, WindsockError::ProviderFetchFailed { .. }));

        let payload_err = WindsockError::malformed("missing hourly section");
        assert!(matches!(payload_err, WindsockError::MalformedPayload { .. }));
    }

    #[test]
    fn test_error_messages() {
        let err = WindsockError::malformed("missing current section");
        assert!(err.to_string().contains("missing current section"));
        assert!(err.to_string().contains("malformed"));
    }
}
