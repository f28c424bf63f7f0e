// image-describer - Hyper-detail image descriptions from the OpenAI vision API
// Author: kelexine (https://github.com/kelexine)

use anyhow::{bail, Result};
use clap::Parser;
use image_describer::cli::{read_image, Args};
use image_describer::config::AppConfig;
use image_describer::openai::DescriptionRequester;
use image_describer::server::create_router;
use image_describer::utils::logging;
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Phase 1: Load configuration
    let config = AppConfig::load()?;

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting image-describer v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Resolve the credential. Without one no request is ever built.
    let Some(credential) = args.credential() else {
        bail!("OPENAI_API_KEY is not set; pass --api-key or export it");
    };

    let requester = DescriptionRequester::new(&config.openai)?;

    // One-shot mode: describe a single file and exit
    if let Some(path) = args.image {
        info!("Describing {}", path.display());
        let image = read_image(&path)?;
        let description = requester.describe(&image, Some(&credential)).await?;
        println!("{}", description);
        return Ok(());
    }

    // Phase 4: Build and start HTTP server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let app = create_router(config, requester, credential)?;

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Phase 5: Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
