use std::future::ready;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use content_variation::ContentPools;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::content;
use crate::prometheus::{setup_metrics_recorder, track_metrics};
use crate::time::TimeSource;

#[derive(Clone)]
pub struct State {
    pub pools: Arc<ContentPools>,
    pub timesource: Arc<dyn TimeSource + Send + Sync>,
    pub max_batch_size: usize,
    pub max_identifier_length: usize,
}

async fn index() -> &'static str {
    "content-server"
}

// The pools are validated before the router exists, so being up means being ready.
async fn ok() -> &'static str {
    "ok"
}

pub fn router<TZ: TimeSource + Send + Sync + 'static>(
    timesource: TZ,
    pools: Arc<ContentPools>,
    config: &Config,
) -> Router {
    let state = State {
        pools,
        timesource: Arc::new(timesource),
        max_batch_size: config.max_batch_size,
        max_identifier_length: config.max_identifier_length,
    };

    let router = Router::new()
        .route("/", get(index))
        .route("/_liveness", get(ok))
        .route("/_readiness", get(ok))
        .route("/content/location/:city", get(content::location))
        .route(
            "/content/location/:city/:service",
            get(content::location_service),
        )
        .route("/content/reviews/:city", get(content::reviews))
        .route("/content/batch", post(content::batch))
        .layer(ConcurrencyLimitLayer::new(config.max_concurrency))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Don't install metrics unless asked to
    // Installing a global recorder when the server is used as a library (during tests etc)
    // does not work well.
    if !config.export_prometheus {
        return router;
    }
    match setup_metrics_recorder() {
        Ok(recorder_handle) => router
            .route("/metrics", get(move || ready(recorder_handle.render())))
            .layer(axum::middleware::from_fn(track_metrics)),
        Err(e) => {
            tracing::warn!("failed to install prometheus recorder, serving without /metrics: {}", e);
            router
        }
    }
}
