//! Application state shared across all request handlers.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::blob::BlobStore;

/// Shared resources cloned into every request handler.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a connection pool
/// and the blob store is reference-counted. The blob store is injected here
/// (rather than living in a module-level singleton) so services and the
/// upload orchestrator can be exercised against a fake store in tests.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Blob-storage client used for cover and page image uploads.
    pub blob: Arc<dyn BlobStore>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, blob: Arc<dyn BlobStore>) -> Self {
        Self { db, blob }
    }
}
