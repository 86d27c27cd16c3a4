use crate::error::{config::ConfigError, AppError};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    /// Blob store location; the URL scheme selects the backend
    /// (`file:///var/blobs` or `s3://bucket/prefix`).
    pub blob_store_url: String,

    pub listen_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            blob_store_url: std::env::var("BLOB_STORE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("BLOB_STORE_URL".to_string()))?,
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string()),
        })
    }
}
