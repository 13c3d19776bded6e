use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use copydesk::config::AppConfig;
use copydesk::error::AppError;
use copydesk::telemetry;
use copydesk::workflows::originality::{HttpSearchClient, OriginalityService, SearchGateway};
use copydesk::workflows::review::ReviewEngine;
use tracing::{info, warn};

use crate::cli::ServeArgs;
use crate::infra::{scoring_config, AppState, DisabledSearchGateway};
use crate::routes::with_review_routes;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let engine = Arc::new(ReviewEngine::new(scoring_config(&config.review)));
    let gateway: Arc<dyn SearchGateway> = match config.review.search_base_url.as_deref() {
        Some(base_url) => Arc::new(HttpSearchClient::new(base_url)?),
        None => {
            warn!("SEARCH_BASE_URL unset, originality checks will report no matches");
            Arc::new(DisabledSearchGateway)
        }
    };
    let originality = Arc::new(OriginalityService::new(gateway));

    let app = with_review_routes(engine, originality)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "editorial review gate ready");

    axum::serve(listener, app).await?;
    Ok(())
}
