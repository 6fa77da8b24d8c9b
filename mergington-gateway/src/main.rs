//! Entry point for the `mergington-gateway` HTTP server.

use std::sync::Arc;

use mergington_core::ActivityDirectory;
use mergington_gateway::{create_router, GatewayConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "mergington_gateway=info,mergington_core=info,tower_http=info";

#[tokio::main]
async fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = GatewayConfig::from_env();
    let directory = Arc::new(ActivityDirectory::seeded());
    info!(activities = directory.len(), "activity directory seeded");

    let app = create_router(directory, &config);

    let listener = match tokio::net::TcpListener::bind(&config.listen_addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %config.listen_addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(
        addr = %config.listen_addr,
        static_dir = %config.static_dir.display(),
        "mergington-gateway listening"
    );

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
