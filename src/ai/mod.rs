//! Text generation via Amazon Bedrock.
//!
//! The [`TextGenerator`] trait is the seam between orchestration and the
//! inference service; [`BedrockGenerator`] is the production implementation.

pub mod client;

pub use client::{BedrockGenerator, parse_titan_response};

use async_trait::async_trait;

use crate::errors::BlogError;

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates a short blog passage for the given topic.
    async fn generate(&self, topic: &str) -> Result<String, BlogError>;
}
