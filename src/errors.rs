use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlogError {
    #[error("Failed to parse request: {0}")]
    ParseError(String),

    #[error("Failed to invoke Bedrock model: {0}")]
    BedrockError(String),

    #[error("Failed to write artifact to S3: {0}")]
    StorageError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<serde_json::Error> for BlogError {
    fn from(error: serde_json::Error) -> Self {
        BlogError::ParseError(error.to_string())
    }
}
