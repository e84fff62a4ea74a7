use std::future::Future;
use std::sync::Arc;

use content_variation::ContentPools;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::router;
use crate::time::{FixedTime, SystemTime};

pub async fn serve<F>(config: Config, listener: TcpListener, shutdown: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    // Pool registration is where misconfigured copy is caught; refuse to serve without it.
    let pools = match ContentPools::standard() {
        Ok(pools) => Arc::new(pools),
        Err(e) => {
            tracing::error!("failed to register content pools: {}", e);
            return;
        }
    };

    let app = match config.reference_date {
        Some(reference) => {
            tracing::info!("review dates pinned to {}", reference.0);
            router::router(FixedTime { date: reference.0 }, pools, &config)
        }
        None => router::router(SystemTime {}, pools, &config),
    };

    match listener.local_addr() {
        Ok(addr) => tracing::info!("listening on {:?}", addr),
        Err(e) => tracing::warn!("listening on an unknown address: {}", e),
    }
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
    {
        tracing::error!("content-server http server failed: {}", e);
    }
}
