use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use object_store::{
    path::Path, Attribute, Attributes, ObjectStore, PutOptions,
};
use tracing::info;
use url::Url;

use crate::blob::{BlobError, BlobStore};

/// Blob store backed by an `object_store` implementation.
///
/// The backend is chosen from the configured URL scheme: `file:///var/blobs`
/// stores objects on local disk, `s3://bucket/prefix` stores them in S3. AWS
/// credentials are picked up from the environment by the S3 builder.
pub struct ObjectStoreBlobStore {
    store: Arc<dyn ObjectStore>,
    base: Path,
}

impl ObjectStoreBlobStore {
    pub fn new(url_str: &str) -> Result<Self, BlobError> {
        let url = url_str
            .parse::<Url>()
            .map_err(|e| BlobError::Permanent(format!("invalid blob store url '{url_str}': {e}")))?;
        let (store, base) = object_store::parse_url(&url)?;

        info!(url = url_str, "initialized blob store");

        Ok(Self {
            store: Arc::from(store),
            base,
        })
    }
}

#[async_trait]
impl BlobStore for ObjectStoreBlobStore {
    async fn put(&self, key: &str, bytes: Bytes, content_type: &str) -> Result<String, BlobError> {
        let path = key
            .split('/')
            .filter(|part| !part.is_empty())
            .fold(self.base.clone(), |path, part| path.child(part));

        let mut attributes = Attributes::new();
        attributes.insert(Attribute::ContentType, content_type.to_string().into());
        let opts = PutOptions {
            attributes,
            ..Default::default()
        };

        self.store.put_opts(&path, bytes.into(), opts).await?;

        Ok(path.to_string())
    }

    async fn delete(&self, locator: &str) -> Result<(), BlobError> {
        self.store.delete(&Path::from(locator)).await?;
        Ok(())
    }
}
