use std::net::SocketAddr;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let bind = std::env::var("MVPCOACH_BIND").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("MVPCOACH_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    let addr = SocketAddr::new(bind.parse()?, port);
    let listener = TcpListener::bind(addr).await?;
    info!("mvpcoach-server listening on http://{addr}");

    mvpcoach_server::serve(listener).await
}
