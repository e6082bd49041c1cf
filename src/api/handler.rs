//! Lambda handler for sentiment analysis requests.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{Instrument, info_span};

use super::{analyze, helpers};
use crate::clients::SentimentDetector;
use crate::core::diagnostics::{AnalysisLog, TracingLog};
use helpers::ApiResponse;

pub use self::function_handler as handler;

/// Lambda handler for the analysis entrypoint.
///
/// Always produces a response envelope: client errors become 400s and any
/// failure of the classification call becomes a 500.
///
/// # Errors
///
/// Never returns `Err`; the signature matches what `lambda_runtime` expects.
pub async fn function_handler<D>(
    detector: &D,
    event: LambdaEvent<Value>,
) -> Result<ApiResponse, Error>
where
    D: SentimentDetector + ?Sized,
{
    let span = info_span!("analyze_sentiment", request_id = %event.context.request_id);
    Ok(respond(&event.payload, detector, &TracingLog)
        .instrument(span)
        .await)
}

/// Runs one analysis and converts the outcome into an envelope.
pub async fn respond<D, L>(payload: &Value, detector: &D, log: &L) -> ApiResponse
where
    D: SentimentDetector + ?Sized,
    L: AnalysisLog + ?Sized,
{
    let outcome = analyze::analyze(payload, detector, log).await;
    helpers::into_response(&outcome)
}
