//! Serve command - run the HTTP extraction service.

use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use sinv_core::SinvConfig;

/// Arguments for the serve command.
#[derive(Args)]
pub struct ServeArgs {
    /// Interface to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to bind
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory for temporary upload files
    #[arg(long)]
    upload_dir: Option<PathBuf>,

    /// Largest accepted request body in bytes
    #[arg(long)]
    max_upload_bytes: Option<usize>,
}

pub async fn run(args: ServeArgs, mut config: SinvConfig) -> anyhow::Result<()> {
    let server = &mut config.server;
    if let Some(host) = args.host {
        server.host = host;
    }
    if let Some(port) = args.port {
        server.port = port;
    }
    if let Some(dir) = args.upload_dir {
        if !dir.is_dir() {
            anyhow::bail!("Upload directory not found: {}", dir.display());
        }
        server.upload_dir = Some(dir);
    }
    if let Some(limit) = args.max_upload_bytes {
        server.max_upload_bytes = limit;
    }

    debug!("Server configuration: {:?}", config.server);
    sinv_server::serve(&config.server).await?;
    Ok(())
}
