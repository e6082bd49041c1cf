/// Sentiment Lambda - classifies the sentiment of a text with Amazon Comprehend.
///
/// The function receives an event such as `{"text": "I love it"}`, validates
/// the text, calls Comprehend `DetectSentiment` and answers with an HTTP-style
/// envelope (`statusCode` + JSON `body`) holding the label, the rounded
/// confidence scores and a human-readable interpretation.
///
/// # Architecture
///
/// - `api` validates the request, runs the analysis and builds the envelope
/// - `clients` wraps Comprehend behind the `SentimentDetector` trait
/// - `core` holds configuration, models, interpretation and diagnostics
///
/// # Example
///
/// ```no_run
/// use sentiment_lambda::api::handler::respond;
/// use sentiment_lambda::clients::ComprehendDetector;
/// use sentiment_lambda::core::config::AppConfig;
/// use sentiment_lambda::core::diagnostics::TracingLog;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = AppConfig::from_env()?;
///     sentiment_lambda::setup_logging(config.log_format);
///
///     let detector = ComprehendDetector::from_config(&config).await;
///     let payload = serde_json::json!({ "text": "This product is amazing!" });
///     let response = respond(&payload, &detector, &TracingLog).await;
///
///     println!("{}: {}", response.status_code, response.body);
///     Ok(())
/// }
/// ```
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;

use crate::core::config::LogFormat;

/// Configure structured logging for AWS Lambda environments.
///
/// `LogFormat::Json` emits one JSON object per event for `CloudWatch` Logs;
/// `LogFormat::Text` is meant for local runs. The max level is INFO, or DEBUG
/// with the `debug-logs` feature.
///
/// # Example
///
/// ```
/// sentiment_lambda::setup_logging(sentiment_lambda::core::config::LogFormat::Json);
/// ```
pub fn setup_logging(format: LogFormat) {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::prelude::*;

    let level = if cfg!(feature = "debug-logs") {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let fmt_layer = match format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .boxed(),
        LogFormat::Text => tracing_subscriber::fmt::layer()
            .without_time()
            .with_target(true)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(level))
        .init();
}
