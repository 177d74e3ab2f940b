use crate::cli::ServeArgs;
use crate::infra::{advising_service, AppState};
use crate::routes::with_advising_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use minor_progress::config::AppConfig;
use minor_progress::error::AppError;
use minor_progress::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(catalog) = args.catalog.take() {
        config.catalog.path = catalog;
    }

    telemetry::init(&config.telemetry)?;

    if !config.catalog.path.exists() {
        warn!(path = %config.catalog.path.display(), "course catalog not found; catalog endpoints will return 404");
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let service = Arc::new(advising_service(&config)?);

    let app = with_advising_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, catalog = %config.catalog.path.display(), "minor progress service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
