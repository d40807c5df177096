/// blogforge - an AWS Lambda that generates short blog posts with Amazon
/// Bedrock and stores them in S3.
///
/// One HTTP-triggered invocation carries a JSON body with a `blog_topic`
/// string. The handler asks Titan Text Lite for a 200-word blog on that
/// topic and uploads the result to a bucket under a timestamped key.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - Amazon Bedrock (`InvokeModel`) for text generation
/// - S3 for artifact storage
/// - Tokio for async runtime
///
/// Orchestration goes through the [`ai::TextGenerator`] and
/// [`storage::ArtifactStore`] traits, so the response contract can be
/// exercised in tests without AWS credentials.
// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod prompt;
pub mod storage;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called at the start of the
/// Lambda entrypoint, before the first invocation is served.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
