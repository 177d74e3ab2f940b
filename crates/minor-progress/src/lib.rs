pub mod advising;
pub mod catalog;
pub mod config;
pub mod error;
pub mod insights;
pub mod jobs;
pub mod minors;
pub mod progress;
pub mod telemetry;
