mod routes;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;

use anyhow::Result;
use mvpcoach_service::LocalService;
use tokio::net::TcpListener;

pub async fn serve(listener: TcpListener) -> Result<()> {
    let app = routes::build_router(LocalService::new());
    axum::serve(listener, app).await?;
    Ok(())
}
