use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use crate::catalog::CourseCatalog;
use crate::error::AppError;
use crate::insights::{CareerInsights, InsightsProvider};
use crate::jobs::{JobListingProvider, JobSearchRequest};
use crate::progress::{MinorProgressReport, ProgressEvaluator};

pub const MISSING_PROGRESS_FIELDS: &str = "Missing required fields: 'classes' and 'major'";
pub const MISSING_CAREER_FIELDS: &str = "Missing required fields: 'major' and 'minor'";

/// Service composing the course catalog, progress evaluator, and career
/// collaborators behind the advising endpoints.
pub struct AdvisingService {
    catalog_path: PathBuf,
    evaluator: ProgressEvaluator,
    insights: Arc<dyn InsightsProvider>,
    jobs: Arc<dyn JobListingProvider>,
}

impl AdvisingService {
    pub fn new(
        catalog_path: impl Into<PathBuf>,
        insights: Arc<dyn InsightsProvider>,
        jobs: Arc<dyn JobListingProvider>,
    ) -> Self {
        Self {
            catalog_path: catalog_path.into(),
            evaluator: ProgressEvaluator::default(),
            insights,
            jobs,
        }
    }

    pub fn with_evaluator(mut self, evaluator: ProgressEvaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }

    /// Reads the catalog fresh so edits to the export are picked up without a
    /// restart.
    pub fn load_catalog(&self) -> Result<CourseCatalog, AppError> {
        Ok(CourseCatalog::from_path(&self.catalog_path)?)
    }

    pub fn course_names(&self) -> Result<Vec<String>, AppError> {
        Ok(self.load_catalog()?.course_names())
    }

    pub fn subjects(&self) -> Result<Vec<String>, AppError> {
        Ok(self.load_catalog()?.subjects())
    }

    /// Evaluate completed courses against every minor. The major is only
    /// validated; it does not influence the result.
    pub fn minor_progress(
        &self,
        classes: &[String],
        major: &str,
    ) -> Result<MinorProgressReport, AppError> {
        if classes.is_empty() || major.is_empty() {
            return Err(AppError::Validation(MISSING_PROGRESS_FIELDS.to_string()));
        }

        let catalog = self.load_catalog()?;
        let report = self.evaluator.evaluate(classes, &catalog);
        info!(
            %major,
            classes = classes.len(),
            leading = report.entries().first().map(|entry| entry.minor.name()),
            "evaluated minor progress"
        );
        Ok(report)
    }

    pub async fn career_insights(
        &self,
        major: &str,
        minor: &str,
    ) -> Result<CareerInsights, AppError> {
        if major.is_empty() || minor.is_empty() {
            return Err(AppError::Validation(MISSING_CAREER_FIELDS.to_string()));
        }

        Ok(self.insights.insights(major, minor).await)
    }

    pub async fn job_recommendations(&self, request: &JobSearchRequest) -> Result<Value, AppError> {
        if request.major.is_empty() || request.minor.is_empty() {
            return Err(AppError::Validation(MISSING_CAREER_FIELDS.to_string()));
        }

        self.jobs.recommend(request).await.map_err(|err| {
            warn!(major = %request.major, minor = %request.minor, error = %err, "job recommendations failed");
            AppError::from(err)
        })
    }
}
