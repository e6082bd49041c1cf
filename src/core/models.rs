use std::fmt;

use serde::Serialize;

/// Sentiment label produced by the classification service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
    Mixed,
    /// A label this crate does not know; kept verbatim.
    Other(String),
}

impl SentimentLabel {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            SentimentLabel::Positive => "POSITIVE",
            SentimentLabel::Negative => "NEGATIVE",
            SentimentLabel::Neutral => "NEUTRAL",
            SentimentLabel::Mixed => "MIXED",
            SentimentLabel::Other(raw) => raw,
        }
    }
}

impl From<&str> for SentimentLabel {
    fn from(raw: &str) -> Self {
        match raw {
            "POSITIVE" => SentimentLabel::Positive,
            "NEGATIVE" => SentimentLabel::Negative,
            "NEUTRAL" => SentimentLabel::Neutral,
            "MIXED" => SentimentLabel::Mixed,
            other => SentimentLabel::Other(other.to_string()),
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SentimentLabel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Per-label confidence scores in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfidenceScores {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub mixed: f64,
}

impl ConfidenceScores {
    #[must_use]
    pub fn max(&self) -> f64 {
        [self.negative, self.neutral, self.mixed]
            .into_iter()
            .fold(self.positive, f64::max)
    }

    /// Rounds every score to `places` decimal places.
    #[must_use]
    pub fn rounded(&self, places: i32) -> Self {
        let round = |v: f64| round_to(v, places);
        Self {
            positive: round(self.positive),
            negative: round(self.negative),
            neutral: round(self.neutral),
            mixed: round(self.mixed),
        }
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// What the classification service returned for one text.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    pub scores: ConfidenceScores,
}

/// Successful outcome of one analysis, ready to be put in a 200 body.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentReport {
    pub text: String,
    pub sentiment: SentimentLabel,
    pub confidence_scores: ConfidenceScores,
    pub interpretation: String,
}
