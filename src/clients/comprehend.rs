//! Amazon Comprehend sentiment client
//!
//! Wraps `DetectSentiment` behind the [`SentimentDetector`] trait so the
//! handler can be exercised without AWS.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_comprehend::Client as ComprehendClient;
use aws_sdk_comprehend::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_comprehend::operation::detect_sentiment::{
    DetectSentimentError, DetectSentimentOutput,
};
use aws_sdk_comprehend::types::LanguageCode;
use tracing::debug;

use crate::core::config::AppConfig;
use crate::core::models::{ConfidenceScores, SentimentLabel, SentimentResult};
use crate::errors::DetectionError;

/// Classifies the sentiment of a single text.
#[async_trait]
pub trait SentimentDetector: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the service call fails or its response is incomplete.
    async fn detect_sentiment(
        &self,
        text: &str,
        language: &str,
    ) -> Result<SentimentResult, DetectionError>;
}

pub struct ComprehendDetector {
    client: ComprehendClient,
}

impl ComprehendDetector {
    #[must_use]
    pub fn new(client: ComprehendClient) -> Self {
        Self { client }
    }

    /// Loads the shared AWS config, applying any overrides from `config`.
    pub async fn from_config(config: &AppConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &config.comprehend_region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint) = &config.comprehend_endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }
        let shared = loader.load().await;
        Self::new(ComprehendClient::new(&shared))
    }
}

#[async_trait]
impl SentimentDetector for ComprehendDetector {
    async fn detect_sentiment(
        &self,
        text: &str,
        language: &str,
    ) -> Result<SentimentResult, DetectionError> {
        debug!(
            language,
            chars = text.chars().count(),
            "Calling Comprehend DetectSentiment"
        );

        let output = self
            .client
            .detect_sentiment()
            .text(text)
            .language_code(LanguageCode::from(language))
            .send()
            .await
            .map_err(describe_sdk_error)?;

        into_result(&output)
    }
}

fn describe_sdk_error<R>(err: SdkError<DetectSentimentError, R>) -> DetectionError
where
    R: std::fmt::Debug + 'static,
{
    match err.as_service_error() {
        Some(service_err) => DetectionError::Service(describe_service_error(service_err)),
        None => DetectionError::Transport(DisplayErrorContext(&err).to_string()),
    }
}

/// `"<code>: <message>"` from the AWS error metadata, or the bare code.
fn describe_service_error<E>(err: &E) -> String
where
    E: ProvideErrorMetadata + std::fmt::Display,
{
    match (err.code(), err.message()) {
        (Some(code), Some(message)) => format!("{code}: {message}"),
        (Some(code), None) => code.to_string(),
        _ => err.to_string(),
    }
}

fn into_result(output: &DetectSentimentOutput) -> Result<SentimentResult, DetectionError> {
    let missing = |field: &str| DetectionError::MalformedResponse(field.to_string());

    let label = output.sentiment().ok_or_else(|| missing("Sentiment"))?;
    let score = output
        .sentiment_score()
        .ok_or_else(|| missing("SentimentScore"))?;

    let scores = ConfidenceScores {
        positive: f64::from(
            score
                .positive()
                .ok_or_else(|| missing("SentimentScore.Positive"))?,
        ),
        negative: f64::from(
            score
                .negative()
                .ok_or_else(|| missing("SentimentScore.Negative"))?,
        ),
        neutral: f64::from(
            score
                .neutral()
                .ok_or_else(|| missing("SentimentScore.Neutral"))?,
        ),
        mixed: f64::from(score.mixed().ok_or_else(|| missing("SentimentScore.Mixed"))?),
    };

    Ok(SentimentResult {
        label: SentimentLabel::from(label.as_str()),
        scores,
    })
}
