use std::sync::Arc;

use bytes::Bytes;

use crate::{
    blob::{mock::MockBlobStore, BlobStore},
    ingest::PageFile,
};

mod chapter;

fn page_file(name: &str) -> PageFile {
    PageFile {
        filename: name.to_string(),
        content_type: "image/png".to_string(),
        bytes: Bytes::from_static(b"png bytes"),
    }
}

fn store() -> (Arc<MockBlobStore>, Arc<dyn BlobStore>) {
    let mock = Arc::new(MockBlobStore::new());
    let store = Arc::clone(&mock) as Arc<dyn BlobStore>;
    (mock, store)
}
