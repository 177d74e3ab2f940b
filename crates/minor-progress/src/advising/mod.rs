//! HTTP-facing advising surface: catalog listings, minor progress, and career
//! guidance composed into one service and exposed through an axum router.

pub mod router;
pub mod service;


pub use router::{
    advising_router, CareerRequest, JobRecommendationRequest, ProgressRequest, WELCOME_MESSAGE,
};
pub use service::{AdvisingService, MISSING_CAREER_FIELDS, MISSING_PROGRESS_FIELDS};
