//! Lambda handler - parses the inbound event, generates a blog, and stores it.
//!
//! The response contract is invariant: exactly one `{statusCode, body}`
//! payload per invocation. A missing or empty topic is the only 400;
//! generation and storage failures are logged and swallowed so the
//! invocation still reports success; anything that prevents the event from
//! being understood at all becomes the generic 500.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};

use super::{helpers, parsing};
use crate::ai::TextGenerator;
use crate::core::config::AppConfig;
use crate::errors::BlogError;
use crate::storage::{self, ArtifactStore};

/// Lambda handler for the blog-generation entrypoint.
///
/// # Errors
///
/// Never returns `Err`; every failure mode is folded into the response
/// payload so the platform does not retry the invocation.
#[tracing::instrument(level = "info", skip_all)]
pub async fn function_handler(
    event: LambdaEvent<Value>,
    config: &AppConfig,
    generator: &dyn TextGenerator,
    store: &dyn ArtifactStore,
) -> Result<Value, Error> {
    info!("Received blog generation request");
    Ok(handle_request(&event.payload, config, generator, store).await)
}

/// Orchestrates one invocation and always produces a response payload.
pub async fn handle_request(
    payload: &Value,
    config: &AppConfig,
    generator: &dyn TextGenerator,
    store: &dyn ArtifactStore,
) -> Value {
    match process(payload, config, generator, store).await {
        Ok(response) => response,
        Err(e) => {
            error!("Invocation failed: {e}");
            helpers::err_response(500, helpers::MSG_INTERNAL_ERROR)
        }
    }
}

async fn process(
    payload: &Value,
    config: &AppConfig,
    generator: &dyn TextGenerator,
    store: &dyn ArtifactStore,
) -> Result<Value, BlogError> {
    let body = parsing::extract_body(payload)?;

    let Some(topic) = parsing::extract_topic(body)? else {
        warn!("Missing 'blog_topic' in request");
        return Ok(helpers::err_response(400, helpers::MSG_MISSING_TOPIC));
    };

    info!(topic = %topic, "Received blog topic");

    match generator.generate(&topic).await {
        Ok(blog) if !blog.is_empty() => {
            let key = storage::artifact_key(&config.output_prefix);
            match store.put_text(&key, &blog).await {
                Ok(()) => info!(key = %key, "Blog saved to S3"),
                Err(e) => error!("Error saving blog to S3: {e}"),
            }
        }
        Ok(_) => warn!("No blog was generated"),
        Err(e) => error!("Error generating the blog: {e}"),
    }

    Ok(helpers::ok_response(helpers::MSG_COMPLETED))
}
