//! Career insights for a major/minor pair.
//!
//! Insights come from an [`InsightsProvider`]. The remote provider asks a
//! generative model for a structured record and degrades to the static table
//! on any failure; the static provider always answers from the table.

mod fallback;
mod gemini;

pub use fallback::{basic_insights, major_category, StaticInsightsProvider};
pub use gemini::{GeminiInsightsProvider, InsightsError, DEFAULT_API_BASE, DEFAULT_MODEL};

use crate::config::InsightsConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub entry: String,
    pub mid: String,
    pub senior: String,
}

/// Structured career outlook. Every field is required when parsing remote
/// responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsRecord {
    pub job_types: Vec<String>,
    pub salary_range: SalaryRange,
    pub top_locations: Vec<String>,
    pub top_companies: Vec<String>,
    pub growth_outlook: String,
    pub key_skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightSource {
    GeminiApi,
    BasicInsights,
}

/// Insights payload returned to callers, tagged with where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerInsights {
    pub major: String,
    pub minor: String,
    pub insights: InsightsRecord,
    pub source: InsightSource,
}

impl CareerInsights {
    pub fn basic(major: &str, minor: &str) -> Self {
        Self {
            major: major.to_string(),
            minor: minor.to_string(),
            insights: basic_insights(major),
            source: InsightSource::BasicInsights,
        }
    }
}

/// Produces career insights. Implementations never fail: remote errors are
/// absorbed into the static record.
#[async_trait]
pub trait InsightsProvider: Send + Sync {
    async fn insights(&self, major: &str, minor: &str) -> CareerInsights;
}

/// Picks the remote provider when an API key is configured, the static table
/// otherwise.
pub fn provider_from_config(
    config: &InsightsConfig,
) -> Result<Arc<dyn InsightsProvider>, InsightsError> {
    match config.gemini_api_key.as_deref() {
        Some(api_key) => {
            let provider = GeminiInsightsProvider::new(
                api_key.to_string(),
                config.model.clone(),
                config.timeout,
            )?
            .with_api_base(config.api_base.clone());
            info!(model = %config.model, "career insights served by generative model");
            Ok(Arc::new(provider))
        }
        None => {
            info!("no generative API key configured; serving static career insights");
            Ok(Arc::new(StaticInsightsProvider))
        }
    }
}
