//! Artifact persistence.
//!
//! Generated blogs are written once, under a timestamp-derived key; the
//! [`ArtifactStore`] trait keeps the S3 client out of the orchestration
//! path, and [`S3ArtifactStore`] is the production implementation.

pub mod s3;

pub use s3::S3ArtifactStore;

use async_trait::async_trait;
use chrono::{DateTime, Local};

use crate::errors::BlogError;

#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Writes the text payload as a new object under the given key.
    async fn put_text(&self, key: &str, body: &str) -> Result<(), BlogError>;
}

/// Storage key for a blog generated now: `<prefix>/<HHMMSS>.txt`.
#[must_use]
pub fn artifact_key(prefix: &str) -> String {
    artifact_key_at(prefix, Local::now())
}

/// Storage key for a blog generated at the given time.
#[must_use]
pub fn artifact_key_at(prefix: &str, time: DateTime<Local>) -> String {
    format!("{prefix}/{}.txt", time.format("%H%M%S"))
}
