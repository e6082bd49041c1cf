// This is the Lambda bootstrap entry point for the sentiment analyzer

use anyhow::Context;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use tracing::info;

use sentiment_lambda::api::handler;
use sentiment_lambda::clients::ComprehendDetector;
use sentiment_lambda::core::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = AppConfig::from_env()
        .map_err(anyhow::Error::msg)
        .context("Config error")?;
    sentiment_lambda::setup_logging(config.log_format);

    // Built once per cold start, shared by every invocation
    let detector = ComprehendDetector::from_config(&config).await;
    info!(
        region = ?config.comprehend_region,
        endpoint = ?config.comprehend_endpoint_url,
        "Comprehend client ready"
    );

    let detector = &detector;
    run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(detector, event).await
    }))
    .await
}
