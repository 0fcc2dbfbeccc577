//! HTTP service for sample invoice field extraction.

pub mod error;
pub mod routes;
pub mod upload;

pub use error::ApiError;
pub use routes::{router, AppState, ExtractResponse, InfoResponse, EXTRACT_PATH, USAGE_HINT};
pub use upload::{is_pdf_filename, TempUpload};

use sinv_core::ServerConfig;
use tokio::net::TcpListener;
use tracing::info;

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(config: &ServerConfig) -> std::io::Result<()> {
    let listener = TcpListener::bind(config.bind_address()).await?;
    info!(
        "{} listening on http://{}",
        routes::SERVICE_TITLE,
        listener.local_addr()?
    );

    axum::serve(listener, router(config))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down");
        })
        .await
}
