//! Chapter image ingestion pipeline.
//!
//! Turns an uploaded batch of page images into an ordered list of blob-store
//! locators: [`page_order`] sorts the batch into reading order by the number
//! embedded in each filename, and [`orchestrator`] uploads the batch
//! concurrently with bounded retry, rolling back partial uploads when any file
//! fails permanently.

pub mod orchestrator;
pub mod page_order;


use bytes::Bytes;

pub use orchestrator::{RetryPolicy, UploadError, UploadOrchestrator};

/// One page image extracted from a multipart upload.
#[derive(Clone, Debug)]
pub struct PageFile {
    /// Original filename supplied by the client, e.g. `"12.png"`.
    pub filename: String,
    pub content_type: String,
    pub bytes: Bytes,
}
