//! S3-backed artifact store.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::{Client, primitives::ByteStream};
use tracing::debug;

use super::ArtifactStore;
use crate::errors::BlogError;

pub struct S3ArtifactStore {
    client: Client,
    bucket: String,
}

impl S3ArtifactStore {
    #[must_use]
    pub fn new(shared_config: &SdkConfig, bucket: String) -> Self {
        Self {
            client: Client::new(shared_config),
            bucket,
        }
    }
}

#[async_trait]
impl ArtifactStore for S3ArtifactStore {
    async fn put_text(&self, key: &str, body: &str) -> Result<(), BlogError> {
        debug!(bucket = %self.bucket, key = %key, "Uploading blog to S3");

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body.as_bytes().to_vec()))
            .content_type("text/plain")
            .send()
            .await
            .map_err(|e| BlogError::StorageError(e.to_string()))?;

        Ok(())
    }
}
