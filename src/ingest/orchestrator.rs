//! Concurrent page upload with bounded retry and compensating rollback.

use std::{sync::Arc, time::Duration};

use futures::future::join_all;
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    blob::{BlobError, BlobStore},
    ingest::PageFile,
};

/// A page upload that failed after exhausting its retry budget.
#[derive(Error, Debug)]
#[error("failed to upload '{filename}': {source}")]
pub struct UploadError {
    /// Filename of the page whose upload failed.
    pub filename: String,
    #[source]
    pub source: BlobError,
}

/// Retry policy for individual page uploads.
///
/// Attempt `n` (1-based) waits `n * backoff_unit` before the next attempt when
/// the store reports a transient error. Permanent errors are never retried.
#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff_unit: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_unit: Duration::from_secs(1),
        }
    }
}

/// Uploads an ordered page batch to the blob store as a unit.
///
/// All files transfer concurrently; the returned locator list is positionally
/// matched to the input batch, so reading order survives arbitrary completion
/// order. If any file fails permanently the orchestrator deletes whatever did
/// upload (best effort) and reports the original upload error.
pub struct UploadOrchestrator {
    store: Arc<dyn BlobStore>,
    policy: RetryPolicy,
}

impl UploadOrchestrator {
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self {
            store,
            policy: RetryPolicy::default(),
        }
    }

    pub fn with_policy(store: Arc<dyn BlobStore>, policy: RetryPolicy) -> Self {
        Self { store, policy }
    }

    /// Uploads every file under `namespace` and returns their locators in
    /// input order, or the first (by input order) permanent failure.
    ///
    /// In-flight uploads are not cancelled when a sibling fails; the batch is
    /// awaited to completion so every successful locator is known before
    /// compensation runs.
    pub async fn upload_batch(
        &self,
        namespace: &str,
        files: &[PageFile],
    ) -> Result<Vec<String>, UploadError> {
        let uploads = files
            .iter()
            .map(|file| self.upload_with_retry(namespace, file));

        // join_all preserves input order in its output.
        let results = join_all(uploads).await;

        let mut locators = Vec::with_capacity(results.len());
        let mut failure = None;

        for (index, result) in results.into_iter().enumerate() {
            match result {
                Ok(locator) => locators.push(locator),
                Err(source) if failure.is_none() => {
                    failure = Some(UploadError {
                        filename: files[index].filename.clone(),
                        source,
                    });
                }
                Err(_) => {}
            }
        }

        match failure {
            None => Ok(locators),
            Some(err) => {
                self.compensate(&locators).await;
                Err(err)
            }
        }
    }

    async fn upload_with_retry(&self, namespace: &str, file: &PageFile) -> Result<String, BlobError> {
        let key = format!("{namespace}/{}", file.filename);
        let mut attempt = 1;

        loop {
            match self
                .store
                .put(&key, file.bytes.clone(), &file.content_type)
                .await
            {
                Ok(locator) => return Ok(locator),
                Err(err) if err.is_transient() && attempt < self.policy.max_attempts => {
                    info!(
                        key,
                        attempt,
                        max_attempts = self.policy.max_attempts,
                        "retrying page upload: {err}"
                    );
                    tokio::time::sleep(self.policy.backoff_unit * attempt).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Best-effort deletion of partially uploaded pages.
    ///
    /// A failed delete leaves an orphaned blob behind; that is logged and
    /// accepted so the caller still sees the upload failure that triggered
    /// the rollback.
    async fn compensate(&self, locators: &[String]) {
        for locator in locators {
            if let Err(err) = self.store.delete(locator).await {
                warn!(locator, "failed to clean up partially uploaded page: {err}");
            }
        }
    }
}
