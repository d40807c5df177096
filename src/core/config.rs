use std::env;

/// Bucket the original deployment writes to; overridable per environment.
pub const DEFAULT_BUCKET: &str = "awsbedrockhardik";

/// On-demand Titan model used for generation.
pub const DEFAULT_MODEL_ID: &str = "amazon.titan-text-lite-v1";

/// Key prefix for stored blog artifacts.
pub const DEFAULT_OUTPUT_PREFIX: &str = "blog-output";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bucket: String,
    pub model_id: String,
    pub output_prefix: String,
}

impl AppConfig {
    /// Every setting has a deployment default, so reading the environment
    /// cannot fail; unset variables fall back to the constants above.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            bucket: env::var("BLOG_BUCKET_NAME").unwrap_or_else(|_| DEFAULT_BUCKET.to_string()),
            model_id: env::var("BEDROCK_MODEL_ID").unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string()),
            output_prefix: env::var("BLOG_OUTPUT_PREFIX")
                .unwrap_or_else(|_| DEFAULT_OUTPUT_PREFIX.to_string()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bucket: DEFAULT_BUCKET.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
        }
    }
}
