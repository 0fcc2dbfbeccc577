//! HTTP routes for the extraction service.
//!
//! ## Endpoints
//! - `POST /extract_sample_invoice` - multipart upload of one PDF
//! - `GET /` - usage hint

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use sinv_core::{FieldRecord, ServerConfig};

use crate::error::ApiError;
use crate::upload::{is_pdf_filename, TempUpload};

/// Service title.
pub const SERVICE_TITLE: &str = "Sample Invoice Extractor API";

/// Upload endpoint path.
pub const EXTRACT_PATH: &str = "/extract_sample_invoice";

/// Usage hint returned by `GET /`.
pub const USAGE_HINT: &str = "Upload a Sample Invoice PDF at /extract_sample_invoice";

/// Successful extraction response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub success: bool,
    pub fields: FieldRecord,
}

impl ExtractResponse {
    pub fn new(fields: FieldRecord) -> Self {
        Self {
            success: true,
            fields,
        }
    }
}

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoResponse {
    pub info: String,
}

/// Shared, read-only handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Where temporary uploads are written.
    pub upload_dir: Option<PathBuf>,
}

/// Build the service router.
pub fn router(config: &ServerConfig) -> Router {
    let state = Arc::new(AppState {
        upload_dir: config.upload_dir.clone(),
    });

    Router::new()
        .route("/", get(root))
        .route(EXTRACT_PATH, post(extract_sample_invoice))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<InfoResponse> {
    Json(InfoResponse {
        info: USAGE_HINT.to_string(),
    })
}

/// Accept one PDF upload and return its extracted fields.
async fn extract_sample_invoice(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<ExtractResponse>, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        // Only the first field carrying a filename is the upload
        let Some(filename) = field.file_name().map(str::to_string) else {
            debug!("Skipping non-file field {:?}", field.name());
            continue;
        };

        if !is_pdf_filename(&filename) {
            info!("Rejected upload {:?}: not a PDF", filename);
            return Err(ApiError::UnsupportedFile(filename));
        }

        let data = field.bytes().await?;
        info!("Received {} ({} bytes)", filename, data.len());

        let upload = TempUpload::write(state.upload_dir.as_deref(), &data)?;

        // The guard moves into the task so deletion follows extraction even if
        // this request future is dropped first.
        let fields = tokio::task::spawn_blocking(move || upload.extract()).await??;

        info!(
            "Extracted fields from {} ({} line items)",
            filename,
            fields.line_items.len()
        );
        return Ok(Json(ExtractResponse::new(fields)));
    }

    Err(ApiError::MissingFile)
}
