pub mod server;
pub mod shared;

use std::net::SocketAddr;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shared::telemetry::init_tracing()?;

    let config = shared::config::load_config()?;
    let dist_dir = shared::config::get_dist_dir(&config);
    if !dist_dir.join("index.html").exists() {
        tracing::warn!(
            "index.html not found in {}, run `trunk build` in crates/frontend first",
            dist_dir.display()
        );
    }

    let app = server::build_router(&dist_dir);

    let addr: SocketAddr = config.socket_addr()?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!(
                "Serving {} on http://{}",
                dist_dir.display(),
                addr
            );
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
