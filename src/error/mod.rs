//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type returned by services and
//! controllers. It implements `IntoResponse`, so handlers can use `?` and get
//! the right status code and JSON body. Internal detail is logged server-side;
//! clients only ever see generic messages for 500s.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::{error::config::ConfigError, ingest::UploadError, model::api::ErrorDto};

#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with detail logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// A page upload that failed permanently after retries, with compensation
    /// already attempted.
    ///
    /// Results in 500 Internal Server Error; the response names the upload
    /// failure generically, the per-file detail is logged.
    #[error(transparent)]
    Upload(#[from] UploadError),

    /// Resource not found. Results in 404 with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request. Results in 400 with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Duplicate slug. Results in 409 with the provided message.
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with custom message. The message is logged but a
    /// generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Upload(err) => {
                error!("chapter image upload failed: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Failed to upload images".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// Logs the full error and returns a generic message so internal detail never
/// leaks to clients.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
