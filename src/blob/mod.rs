//! Blob-storage client abstraction.
//!
//! Uploaded images are written to an `object_store` backend selected by URL
//! (`file://` for local disk, `s3://` for bucket storage). The application only
//! ever talks to the [`BlobStore`] trait so the ingestion pipeline stays
//! backend-agnostic and tests can substitute a scripted mock.

#[cfg(test)]
pub mod mock;
pub mod store;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

pub use store::ObjectStoreBlobStore;

/// Error returned by blob-store operations.
///
/// The transient/permanent split drives the retry policy in the upload
/// orchestrator: transient errors are retried up to the attempt budget,
/// permanent errors (and retry exhaustion) propagate to the caller.
#[derive(Error, Debug)]
pub enum BlobError {
    #[error("transient blob store error: {0}")]
    Transient(String),

    #[error("blob store error: {0}")]
    Permanent(String),
}

impl BlobError {
    pub fn is_transient(&self) -> bool {
        matches!(self, BlobError::Transient(_))
    }
}

impl From<object_store::Error> for BlobError {
    fn from(err: object_store::Error) -> Self {
        match err {
            // Generic covers I/O and request failures surfaced by the backend
            // (connection resets, 5xx responses); those are worth retrying.
            object_store::Error::Generic { .. } | object_store::Error::JoinError { .. } => {
                BlobError::Transient(err.to_string())
            }
            _ => BlobError::Permanent(err.to_string()),
        }
    }
}

/// Storage client for uploaded images.
///
/// `put` returns a locator (URL or opaque key) identifying the stored object;
/// the same locator is accepted by `delete` for compensating cleanup.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Stores `bytes` under `key` and returns the locator of the stored object.
    async fn put(&self, key: &str, bytes: Bytes, content_type: &str) -> Result<String, BlobError>;

    /// Deletes the object identified by `locator`.
    async fn delete(&self, locator: &str) -> Result<(), BlobError>;
}
