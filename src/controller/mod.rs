//! HTTP request handlers.
//!
//! Controllers extract and validate request data (path, query, JSON, and
//! multipart bodies), call into the service layer, and convert the results to
//! response DTOs. All error mapping to status codes lives in `AppError`.

pub mod chapter;
pub mod comic;

use axum::extract::multipart::Field;
use serde::Deserialize;

use crate::{error::AppError, ingest::PageFile};

#[derive(Deserialize)]
pub struct PaginationParams {
    /// 1-based page number.
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    10
}

/// Reads a multipart file field into a [`PageFile`].
async fn read_file_field(field: Field<'_>) -> Result<PageFile, AppError> {
    let filename = field
        .file_name()
        .map(str::to_string)
        .ok_or_else(|| AppError::BadRequest("Uploaded file is missing a filename".to_string()))?;
    let content_type = field
        .content_type()
        .map(str::to_string)
        .unwrap_or_else(|| "application/octet-stream".to_string());
    let bytes = field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read uploaded file: {e}")))?;

    Ok(PageFile {
        filename,
        content_type,
        bytes,
    })
}

/// Reads a multipart text field, naming the field in the error on failure.
async fn read_text_field(field: Field<'_>, name: &str) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read field '{name}': {e}")))
}

fn require_field(value: Option<String>, name: &str) -> Result<String, AppError> {
    value.ok_or_else(|| AppError::BadRequest(format!("Missing required field '{name}'")))
}
