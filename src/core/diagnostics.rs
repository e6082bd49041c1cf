//! Diagnostic logging for the analysis flow.
//!
//! The analysis core reports what it is doing through [`AnalysisLog`] instead
//! of calling `tracing` directly, so tests can inspect the events.

use tracing::{error, info};

use super::models::SentimentResult;

pub trait AnalysisLog: Send + Sync {
    /// Called once the text passed validation, before the external call.
    fn analyzing(&self, text: &str);

    /// Called with the classification result.
    fn detected(&self, result: &SentimentResult);

    /// Called with the description of a failed external call.
    fn failed(&self, description: &str);
}

/// One-line summary of a result, every score as a percentage with two decimals.
#[must_use]
pub fn detected_summary(result: &SentimentResult) -> String {
    let scores = &result.scores;
    format!(
        "Sentiment detected: {} (Positive: {:.2}%, Negative: {:.2}%, \
         Neutral: {:.2}%, Mixed: {:.2}%)",
        result.label,
        scores.positive * 100.0,
        scores.negative * 100.0,
        scores.neutral * 100.0,
        scores.mixed * 100.0,
    )
}

/// Emits every event through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl AnalysisLog for TracingLog {
    fn analyzing(&self, text: &str) {
        info!("Analyzing sentiment for text: \"{}\"", text);
    }

    fn detected(&self, result: &SentimentResult) {
        info!(sentiment = %result.label, "{}", detected_summary(result));
    }

    fn failed(&self, description: &str) {
        error!("Error analyzing sentiment: {}", description);
    }
}
