use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::service::{AdvisingService, MISSING_CAREER_FIELDS, MISSING_PROGRESS_FIELDS};
use crate::error::AppError;
use crate::jobs::JobSearchRequest;

pub const WELCOME_MESSAGE: &str = "Welcome to the Minor Progress API! Available endpoints: /api/classNames/, /api/minor_progress/";

/// Absent and `null` fields both read as missing.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProgressRequest {
    pub classes: Option<Vec<String>>,
    pub major: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CareerRequest {
    pub major: Option<String>,
    pub minor: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct JobRecommendationRequest {
    pub major: Option<String>,
    pub minor: Option<String>,
    pub current_keyword_index: Option<u32>,
    pub current_page: Option<u32>,
}

impl From<JobRecommendationRequest> for JobSearchRequest {
    fn from(request: JobRecommendationRequest) -> Self {
        Self {
            major: request.major.unwrap_or_default(),
            minor: request.minor.unwrap_or_default(),
            current_keyword_index: request.current_keyword_index.unwrap_or(0),
            current_page: request.current_page.unwrap_or(1),
        }
    }
}

/// Unwraps a JSON body, turning any rejection into a validation error with
/// the endpoint's missing-fields message.
fn json_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    missing_fields: &str,
) -> Result<T, AppError> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        debug!(reason = %rejection.body_text(), "rejected request body");
        AppError::Validation(missing_fields.to_string())
    })
}

/// Router builder exposing the catalog, progress, and career endpoints.
pub fn advising_router(service: Arc<AdvisingService>) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route(
            "/api/classNames/",
            get(class_names_handler).post(class_names_handler),
        )
        .route(
            "/api/subjectNames/",
            get(subject_names_handler).post(subject_names_handler),
        )
        .route("/api/minor_progress/", post(minor_progress_handler))
        .route("/api/career_insights/", post(career_insights_handler))
        .route("/api/job_recommendations/", post(job_recommendations_handler))
        .with_state(service)
}

pub(crate) async fn home_handler() -> Json<serde_json::Value> {
    Json(json!({ "message": WELCOME_MESSAGE }))
}

pub(crate) async fn class_names_handler(
    State(service): State<Arc<AdvisingService>>,
) -> Result<Json<Vec<String>>, AppError> {
    service.course_names().map(Json)
}

pub(crate) async fn subject_names_handler(
    State(service): State<Arc<AdvisingService>>,
) -> Result<Json<Vec<String>>, AppError> {
    service.subjects().map(Json)
}

pub(crate) async fn minor_progress_handler(
    State(service): State<Arc<AdvisingService>>,
    payload: Result<Json<ProgressRequest>, JsonRejection>,
) -> Response {
    let request = match json_body(payload, MISSING_PROGRESS_FIELDS) {
        Ok(request) => request,
        Err(err) => return err.into_response(),
    };
    let classes = request.classes.unwrap_or_default();
    let major = request.major.unwrap_or_default();

    match service.minor_progress(&classes, &major) {
        Ok(report) => {
            let payload = json!({ "percentages": report.percentages() });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn career_insights_handler(
    State(service): State<Arc<AdvisingService>>,
    payload: Result<Json<CareerRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let request = json_body(payload, MISSING_CAREER_FIELDS)?;
    let major = request.major.unwrap_or_default();
    let minor = request.minor.unwrap_or_default();

    let insights = service.career_insights(&major, &minor).await?;
    Ok((StatusCode::OK, Json(insights)).into_response())
}

pub(crate) async fn job_recommendations_handler(
    State(service): State<Arc<AdvisingService>>,
    payload: Result<Json<JobRecommendationRequest>, JsonRejection>,
) -> Response {
    let result = match json_body(payload, MISSING_CAREER_FIELDS) {
        Ok(request) => {
            let request = JobSearchRequest::from(request);
            service.job_recommendations(&request).await
        }
        Err(err) => Err(err),
    };

    match result {
        Ok(jobs) => (StatusCode::OK, Json(jobs)).into_response(),
        Err(AppError::Validation(message)) => {
            let payload = json!({
                "error": message,
                "jobs": [],
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        Err(_) => {
            let payload = json!({
                "error": "Failed to fetch job recommendations",
                "jobs": [],
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
