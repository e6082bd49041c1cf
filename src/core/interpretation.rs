//! Human-readable interpretation of a classification result.

use super::models::{ConfidenceScores, SentimentLabel};

/// Returned for labels without a template.
pub const FALLBACK_INTERPRETATION: &str = "Unable to interpret sentiment";

/// Decimal places kept for confidence scores in response bodies.
pub const SCORE_DECIMAL_PLACES: i32 = 4;

struct Template {
    tone: &'static str,
    description: &'static str,
}

const POSITIVE: Template = Template {
    tone: "positive",
    description: "The content indicates satisfaction, happiness, or approval.",
};

const NEGATIVE: Template = Template {
    tone: "negative",
    description: "The content indicates dissatisfaction, disappointment, or disapproval.",
};

const NEUTRAL: Template = Template {
    tone: "neutral",
    description: "The content is factual or objective without strong positive or negative emotion.",
};

const MIXED: Template = Template {
    tone: "mixed",
    description: "The content contains both positive and negative elements.",
};

fn template_for(label: &SentimentLabel) -> Option<&'static Template> {
    match label {
        SentimentLabel::Positive => Some(&POSITIVE),
        SentimentLabel::Negative => Some(&NEGATIVE),
        SentimentLabel::Neutral => Some(&NEUTRAL),
        SentimentLabel::Mixed => Some(&MIXED),
        SentimentLabel::Other(_) => None,
    }
}

/// Describes `label` using the highest of `scores` as the confidence.
///
/// The confidence is printed as a percentage with one decimal place.
///
/// ```
/// use sentiment_lambda::core::interpretation::interpret;
/// use sentiment_lambda::core::models::{ConfidenceScores, SentimentLabel};
///
/// let scores = ConfidenceScores { positive: 0.02, negative: 0.9, neutral: 0.05, mixed: 0.03 };
/// let text = interpret(&SentimentLabel::Negative, &scores);
/// assert!(text.contains("negative sentiment with 90.0% confidence"));
/// ```
#[must_use]
pub fn interpret(label: &SentimentLabel, scores: &ConfidenceScores) -> String {
    let Some(template) = template_for(label) else {
        return FALLBACK_INTERPRETATION.to_string();
    };

    let confidence = scores.max() * 100.0;
    format!(
        "This text expresses {} sentiment with {confidence:.1}% confidence. {}",
        template.tone, template.description
    )
}
