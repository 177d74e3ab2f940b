//! Job recommendations from an external career-listing service.
//!
//! The listing service is opaque: the request carries the major/minor pair
//! and pagination cursor, and the reply is passed through unchanged.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

pub const SEARCH_LOCATION: &str = "gb";
pub const RESULTS_PER_PAGE: u32 = 5;
pub const MAX_PAGES: u32 = 10;
pub const JOBS_PER_BATCH: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSearchRequest {
    pub major: String,
    pub minor: String,
    pub current_keyword_index: u32,
    pub current_page: u32,
}

#[derive(Debug, Serialize)]
struct ListingQuery<'a> {
    major: &'a str,
    minor: &'a str,
    location: &'static str,
    results_per_page: u32,
    max_pages: u32,
    jobs_per_batch: u32,
    current_keyword_index: u32,
    current_page: u32,
}

impl<'a> From<&'a JobSearchRequest> for ListingQuery<'a> {
    fn from(request: &'a JobSearchRequest) -> Self {
        Self {
            major: &request.major,
            minor: &request.minor,
            location: SEARCH_LOCATION,
            results_per_page: RESULTS_PER_PAGE,
            max_pages: MAX_PAGES,
            jobs_per_batch: JOBS_PER_BATCH,
            current_keyword_index: request.current_keyword_index,
            current_page: request.current_page,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum JobListingError {
    #[error("job listing service is not configured")]
    Unconfigured,
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("job listing request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("job listing service returned status {0}")]
    Status(u16),
}

#[async_trait]
pub trait JobListingProvider: Send + Sync {
    async fn recommend(&self, request: &JobSearchRequest) -> Result<Value, JobListingError>;
}

/// Used when no listing endpoint is configured; every lookup fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredJobListings;

#[async_trait]
impl JobListingProvider for UnconfiguredJobListings {
    async fn recommend(&self, _request: &JobSearchRequest) -> Result<Value, JobListingError> {
        Err(JobListingError::Unconfigured)
    }
}

/// Forwards searches to an HTTP listing service as query parameters.
#[derive(Clone)]
pub struct HttpJobListings {
    client: Client,
    endpoint: String,
}

impl HttpJobListings {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, JobListingError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(JobListingError::Client)?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl JobListingProvider for HttpJobListings {
    async fn recommend(&self, request: &JobSearchRequest) -> Result<Value, JobListingError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&ListingQuery::from(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(JobListingError::Status(status.as_u16()));
        }

        let jobs = response.json::<Value>().await?;
        debug!(
            major = %request.major,
            minor = %request.minor,
            page = request.current_page,
            "job listings fetched"
        );
        Ok(jobs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> JobSearchRequest {
        JobSearchRequest {
            major: "Computer Science".to_string(),
            minor: "Statistics".to_string(),
            current_keyword_index: 2,
            current_page: 3,
        }
    }

    #[test]
    fn query_carries_fixed_search_window() {
        let request = request();
        let query = serde_json::to_value(ListingQuery::from(&request)).expect("serializes");

        assert_eq!(query["location"], "gb");
        assert_eq!(query["results_per_page"], 5);
        assert_eq!(query["max_pages"], 10);
        assert_eq!(query["jobs_per_batch"], 5);
        assert_eq!(query["current_keyword_index"], 2);
        assert_eq!(query["current_page"], 3);
    }

    #[tokio::test]
    async fn unconfigured_provider_always_fails() {
        let err = UnconfiguredJobListings
            .recommend(&request())
            .await
            .expect_err("lookup fails");
        assert!(matches!(err, JobListingError::Unconfigured));
    }

    #[tokio::test]
    async fn unreachable_service_reports_http_error() {
        let provider = HttpJobListings::new(
            "http://127.0.0.1:9/jobs".to_string(),
            Duration::from_secs(2),
        )
        .expect("client builds");

        let err = provider.recommend(&request()).await.expect_err("lookup fails");
        assert!(matches!(err, JobListingError::Http(_)));
    }
}
