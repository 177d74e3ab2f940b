use super::{CareerInsights, InsightSource, InsightsProvider, InsightsRecord};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, thiserror::Error)]
pub enum InsightsError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
    #[error("model returned empty content")]
    EmptyContent,
    #[error("model returned invalid insights: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    fn text(&self) -> Option<&str> {
        self.candidates
            .iter()
            .filter_map(|candidate| candidate.content.as_ref())
            .flat_map(|content| content.parts.iter())
            .find_map(|part| part.text.as_deref())
    }
}

/// Insights generated by a hosted Gemini model, one request per call and no
/// retries.
#[derive(Clone)]
pub struct GeminiInsightsProvider {
    client: Client,
    api_key: String,
    model: String,
    api_base: String,
}

impl GeminiInsightsProvider {
    pub fn new(api_key: String, model: String, timeout: Duration) -> Result<Self, InsightsError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(InsightsError::Client)?;

        Ok(Self {
            client,
            api_key,
            model,
            api_base: DEFAULT_API_BASE.to_string(),
        })
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }

    pub async fn generate(&self, major: &str, minor: &str) -> Result<InsightsRecord, InsightsError> {
        let prompt = insights_prompt(major, minor);
        let request = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: &prompt }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(InsightsError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateResponse = response.json().await?;
        let text = body.text().ok_or(InsightsError::EmptyContent)?;
        let record = parse_insights(text)?;

        debug!(%major, %minor, model = %self.model, "generated career insights");
        Ok(record)
    }
}

#[async_trait]
impl InsightsProvider for GeminiInsightsProvider {
    async fn insights(&self, major: &str, minor: &str) -> CareerInsights {
        match self.generate(major, minor).await {
            Ok(insights) => CareerInsights {
                major: major.to_string(),
                minor: minor.to_string(),
                insights,
                source: InsightSource::GeminiApi,
            },
            Err(err) => {
                warn!(%major, %minor, error = %err, "generative insights unavailable; using static table");
                CareerInsights::basic(major, minor)
            }
        }
    }
}

fn insights_prompt(major: &str, minor: &str) -> String {
    format!(
        "Generate career insights for a student with a {major} major and a {minor} minor.\n\
         Respond with JSON only, using exactly these fields:\n\
         {{\"jobTypes\": [5 job titles], \
         \"salaryRange\": {{\"entry\": \"$X,XXX\", \"mid\": \"$XX,XXX\", \"senior\": \"$XXX,XXX+\"}}, \
         \"topLocations\": [5 \"City, ST\" entries], \
         \"topCompanies\": [5 employers], \
         \"growthOutlook\": \"one sentence on industry growth\", \
         \"keySkills\": [5 skills]}}\n\
         Keep salaries realistic for recent graduates and specific to the {major} + {minor} combination."
    )
}

/// Parses a model reply into a record, tolerating Markdown code fences.
pub(crate) fn parse_insights(text: &str) -> Result<InsightsRecord, InsightsError> {
    let cleaned = strip_json_fences(text);
    if cleaned.is_empty() {
        return Err(InsightsError::EmptyContent);
    }
    Ok(serde_json::from_str(cleaned)?)
}

fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));

    match inner {
        Some(stripped) => {
            let stripped = stripped.trim_start();
            stripped
                .strip_suffix("```")
                .map(str::trim)
                .unwrap_or(stripped)
        }
        None => text,
    }
}
