//! Scripted in-memory blob store for tests.
//!
//! Failure behavior is scripted per filename so tests can drive the retry and
//! compensation paths deterministically: a file can fail a fixed number of
//! times with a transient error, fail every attempt permanently, or resolve
//! after a simulated delay (combine with `start_paused` tokio tests to permute
//! completion order without real waiting).

use std::{
    collections::HashMap,
    sync::Mutex,
    time::Duration,
};

use async_trait::async_trait;
use bytes::Bytes;

use crate::blob::{BlobError, BlobStore};

#[derive(Default)]
struct Script {
    transient_failures: u32,
    fail_permanently: bool,
    delay: Option<Duration>,
}

/// In-memory [`BlobStore`] recording every call it receives.
#[derive(Default)]
pub struct MockBlobStore {
    scripts: Mutex<HashMap<String, Script>>,
    failing_deletes: Mutex<Vec<String>>,
    puts: Mutex<Vec<String>>,
    deletes: Mutex<Vec<String>>,
}

impl MockBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the next `times` put attempts for `filename` to fail with a
    /// transient error; attempts after that succeed.
    pub fn fail_transient(&self, filename: &str, times: u32) {
        self.scripts
            .lock()
            .unwrap()
            .entry(filename.to_string())
            .or_default()
            .transient_failures = times;
    }

    /// Scripts every put attempt for `filename` to fail permanently.
    pub fn fail_permanent(&self, filename: &str) {
        self.scripts
            .lock()
            .unwrap()
            .entry(filename.to_string())
            .or_default()
            .fail_permanently = true;
    }

    /// Delays the put for `filename`, simulating a slow transfer.
    pub fn delay(&self, filename: &str, delay: Duration) {
        self.scripts
            .lock()
            .unwrap()
            .entry(filename.to_string())
            .or_default()
            .delay = Some(delay);
    }

    /// Scripts `delete` to fail for the given locator.
    pub fn fail_delete(&self, locator: &str) {
        self.failing_deletes.lock().unwrap().push(locator.to_string());
    }

    /// Keys of every put attempt, in the order the store observed them.
    pub fn put_attempts(&self) -> Vec<String> {
        self.puts.lock().unwrap().clone()
    }

    pub fn put_attempt_count(&self) -> usize {
        self.puts.lock().unwrap().len()
    }

    /// Locators passed to `delete`, in call order.
    pub fn deleted(&self) -> Vec<String> {
        self.deletes.lock().unwrap().clone()
    }

    pub fn locator_for(key: &str) -> String {
        format!("mock://{key}")
    }

    fn filename_of(key: &str) -> &str {
        key.rsplit('/').next().unwrap_or(key)
    }
}

#[async_trait]
impl BlobStore for MockBlobStore {
    async fn put(&self, key: &str, _bytes: Bytes, _content_type: &str) -> Result<String, BlobError> {
        self.puts.lock().unwrap().push(key.to_string());

        let filename = Self::filename_of(key).to_string();
        let (delay, outcome) = {
            let mut scripts = self.scripts.lock().unwrap();
            let script = scripts.entry(filename.clone()).or_default();
            let outcome = if script.fail_permanently {
                Some(BlobError::Permanent(format!("scripted failure for {filename}")))
            } else if script.transient_failures > 0 {
                script.transient_failures -= 1;
                Some(BlobError::Transient(format!(
                    "scripted transient failure for {filename}"
                )))
            } else {
                None
            };
            (script.delay, outcome)
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match outcome {
            Some(err) => Err(err),
            None => Ok(Self::locator_for(key)),
        }
    }

    async fn delete(&self, locator: &str) -> Result<(), BlobError> {
        self.deletes.lock().unwrap().push(locator.to_string());

        if self
            .failing_deletes
            .lock()
            .unwrap()
            .iter()
            .any(|l| l == locator)
        {
            return Err(BlobError::Permanent(format!(
                "scripted delete failure for {locator}"
            )));
        }

        Ok(())
    }
}
