//! Validate → detect → report.
//!
//! The result type keeps client input errors apart from failures of the
//! external call; turning either into an envelope is left to the handler.

use serde_json::Value;

use crate::clients::SentimentDetector;
use crate::core::diagnostics::AnalysisLog;
use crate::core::interpretation::{SCORE_DECIMAL_PLACES, interpret};
use crate::core::models::SentimentReport;
use crate::errors::AnalysisError;

/// Language sent with every classification request.
pub const LANGUAGE_CODE: &str = "en";

/// Pulls the `text` field out of an invocation payload.
///
/// `null` counts as empty. Payloads that are not objects have no `text` field.
///
/// # Errors
///
/// Returns a client error if the field is missing, blank, or not a string.
pub fn extract_text(payload: &Value) -> Result<&str, AnalysisError> {
    let Some(field) = payload.as_object().and_then(|obj| obj.get("text")) else {
        return Err(AnalysisError::MissingText);
    };

    match field {
        Value::Null => Err(AnalysisError::EmptyText),
        Value::String(text) if text.trim().is_empty() => Err(AnalysisError::EmptyText),
        Value::String(text) => Ok(text),
        _ => Err(AnalysisError::InvalidTextType),
    }
}

/// Runs one analysis for `payload`.
///
/// The detector is only called once the text has passed validation, and it
/// receives the trimmed text. The report echoes the text as it was sent.
///
/// # Errors
///
/// Returns a client error for invalid input and `AnalysisError::Detection`
/// when the classification call fails.
pub async fn analyze<D, L>(
    payload: &Value,
    detector: &D,
    log: &L,
) -> Result<SentimentReport, AnalysisError>
where
    D: SentimentDetector + ?Sized,
    L: AnalysisLog + ?Sized,
{
    let text = extract_text(payload)?;
    log.analyzing(text);

    let result = match detector.detect_sentiment(text.trim(), LANGUAGE_CODE).await {
        Ok(result) => result,
        Err(e) => {
            log.failed(&e.to_string());
            return Err(e.into());
        }
    };
    log.detected(&result);

    Ok(SentimentReport {
        text: text.to_string(),
        interpretation: interpret(&result.label, &result.scores),
        confidence_scores: result.scores.rounded(SCORE_DECIMAL_PLACES),
        sentiment: result.label,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extract_text_accepts_padded_text() {
        let payload = json!({ "text": "  fine  " });
        assert_eq!(extract_text(&payload).unwrap(), "  fine  ");
    }

    #[test]
    fn extract_text_classifies_bad_input() {
        assert_eq!(extract_text(&json!({})), Err(AnalysisError::MissingText));
        assert_eq!(extract_text(&json!("text")), Err(AnalysisError::MissingText));
        assert_eq!(extract_text(&json!({ "text": null })), Err(AnalysisError::EmptyText));
        assert_eq!(extract_text(&json!({ "text": "\n\t " })), Err(AnalysisError::EmptyText));
        assert_eq!(
            extract_text(&json!({ "text": 42 })),
            Err(AnalysisError::InvalidTextType)
        );
        assert_eq!(
            extract_text(&json!({ "text": ["a"] })),
            Err(AnalysisError::InvalidTextType)
        );
    }
}
