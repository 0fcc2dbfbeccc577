//! HTTP error responses.

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use sinv_core::SinvError;

/// Errors surfaced by the extraction endpoint.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The uploaded filename does not end in ".pdf".
    #[error("unsupported file: {0}")]
    UnsupportedFile(String),

    /// The request carried no file field.
    #[error("no file uploaded")]
    MissingFile,

    /// The multipart body could not be read.
    #[error("multipart error: {0}")]
    Multipart(#[from] MultipartError),

    /// Writing the temporary upload failed.
    #[error("temporary file error: {0}")]
    Io(#[from] std::io::Error),

    /// The document could not be opened or read.
    #[error("extraction failed: {0}")]
    Extraction(#[from] SinvError),

    /// The blocking extraction task did not complete.
    #[error("extraction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ApiError {
    fn status_and_detail(&self) -> (StatusCode, String) {
        match self {
            ApiError::UnsupportedFile(_) => {
                (StatusCode::BAD_REQUEST, "Only PDF files supported".to_string())
            }
            ApiError::MissingFile => (StatusCode::BAD_REQUEST, "No file uploaded".to_string()),
            ApiError::Multipart(e) => (e.status(), e.body_text()),
            ApiError::Io(_) | ApiError::Extraction(_) | ApiError::Task(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error".to_string(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_detail();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        }
        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}
