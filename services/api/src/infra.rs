use metrics_exporter_prometheus::PrometheusHandle;
use minor_progress::advising::AdvisingService;
use minor_progress::config::{AppConfig, JobsConfig};
use minor_progress::error::AppError;
use minor_progress::insights::provider_from_config;
use minor_progress::jobs::{HttpJobListings, JobListingProvider, UnconfiguredJobListings};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn job_listings(config: &JobsConfig) -> Result<Arc<dyn JobListingProvider>, AppError> {
    match config.endpoint.as_deref() {
        Some(endpoint) => {
            info!(%endpoint, "job recommendations forwarded to listing service");
            let provider = HttpJobListings::new(endpoint.to_string(), config.timeout)?;
            Ok(Arc::new(provider))
        }
        None => {
            info!("no job listing service configured; recommendations will fail");
            Ok(Arc::new(UnconfiguredJobListings))
        }
    }
}

pub(crate) fn advising_service(config: &AppConfig) -> Result<AdvisingService, AppError> {
    let insights = provider_from_config(&config.insights)?;
    let jobs = job_listings(&config.jobs)?;
    Ok(AdvisingService::new(config.catalog.path.clone(), insights, jobs))
}
