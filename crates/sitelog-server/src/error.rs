//! Error types for the upload endpoint.

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors returned from `POST /upload`. Every variant renders as a JSON body
/// of the form `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum UploadError {
    /// No part with the configured file field name, or no multipart body.
    #[error("No file uploaded.")]
    MissingFile,

    /// The multipart stream was malformed or exceeded the body limit.
    #[error("invalid upload: {0}")]
    Multipart(#[from] MultipartError),

    /// The extraction task panicked or was cancelled.
    #[error("internal error: {0}")]
    Internal(String),
}

impl UploadError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingFile => StatusCode::BAD_REQUEST,
            Self::Multipart(err) => err.status(),
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            Self::MissingFile => self.to_string(),
            Self::Multipart(err) => err.body_text(),
            // Internal details stay in the server log
            Self::Internal(_) => "Internal server error".to_string(),
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

/// Errors that stop the server from starting or running.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
