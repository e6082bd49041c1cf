use thiserror::Error;

/// Failure reported by the external sentiment-classification capability.
///
/// The `Display` text is surfaced verbatim in the 500 response body, so the
/// service and transport variants carry the description unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectionError {
    #[error("{0}")]
    Service(String),

    #[error("{0}")]
    Transport(String),

    #[error("Malformed sentiment response: missing {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Missing required field: text")]
    MissingText,

    #[error("Empty text provided")]
    EmptyText,

    #[error("Invalid type for field: text")]
    InvalidTextType,

    #[error(transparent)]
    Detection(#[from] DetectionError),
}

impl AnalysisError {
    /// HTTP status for the response envelope.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            AnalysisError::MissingText
            | AnalysisError::EmptyText
            | AnalysisError::InvalidTextType => 400,
            AnalysisError::Detection(_) => 500,
        }
    }

    /// Envelope `message` accompanying the `error` description.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            AnalysisError::MissingText => "Error: No text provided in event",
            AnalysisError::EmptyText => "Error: Text cannot be empty",
            AnalysisError::InvalidTextType => "Error: Text must be a string",
            AnalysisError::Detection(_) => "Error analyzing sentiment",
        }
    }
}
