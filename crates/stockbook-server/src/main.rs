use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use stockbook_server::{app, Config};
use stockbook_store::WorkbookStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = Config::from_env();
    let store = WorkbookStore::new(config.data_path.clone());
    store.ensure_initialized()?;

    let addr: SocketAddr = config.bind_addr.parse()?;
    info!(workbook = %config.data_path.display(), "stockbook listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(store)).await?;
    Ok(())
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stockbook=info")),
        )
        .init();
}
