//! Upload service: serves the form on `/` and converts uploads on `/upload`.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rs_feedposts::server::{self, AppState, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("rs_feedposts=info".parse()?))
        .init();

    let config = ServerConfig::from_env()?;
    let state = Arc::new(AppState {
        options: config.options.clone(),
    });
    let app = server::router(state, config.max_upload_bytes);

    let addr = config.bind_addr();
    info!("Feed post extractor listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
