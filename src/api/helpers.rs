//! Response envelope builders.
//!
//! Every response is `{ "statusCode": <u16>, "body": <JSON string> }`.

use serde::Serialize;
use serde_json::json;

use crate::core::models::SentimentReport;
use crate::errors::AnalysisError;

pub const SUCCESS_MESSAGE: &str = "Sentiment analysis completed successfully";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

/// Returns a 200 response carrying the analysis report.
#[must_use]
pub fn ok_report(report: &SentimentReport) -> ApiResponse {
    ApiResponse {
        status_code: 200,
        body: json!({
            "message": SUCCESS_MESSAGE,
            "text": report.text,
            "sentiment": report.sentiment,
            "confidence_scores": report.confidence_scores,
            "interpretation": report.interpretation,
        })
        .to_string(),
    }
}

/// Returns an error response with the given status code, message and error.
#[must_use]
pub fn err_response(status_code: u16, message: &str, error: &str) -> ApiResponse {
    ApiResponse {
        status_code,
        body: json!({ "message": message, "error": error }).to_string(),
    }
}

/// Maps an analysis failure onto its envelope.
#[must_use]
pub fn from_error(err: &AnalysisError) -> ApiResponse {
    err_response(err.status_code(), err.message(), &err.to_string())
}

/// Maps an analysis outcome onto its envelope.
#[must_use]
pub fn into_response(outcome: &Result<SentimentReport, AnalysisError>) -> ApiResponse {
    match outcome {
        Ok(report) => ok_report(report),
        Err(e) => from_error(e),
    }
}
