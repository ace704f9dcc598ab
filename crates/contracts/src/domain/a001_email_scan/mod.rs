//! Email scan: wire contract of the `/predict_email` resource
//!
//! - `prediction.rs`: response DTOs and decoding into `ScanOutcome`
//! - `error.rs`: `ScanError` kinds of the network step
//! - `format.rs`: display text of JSON values (browser number conventions)
//! - `features.rs`: human-readable descriptions of model features
//! - `health.rs`: `GET /health` DTO

pub mod error;
pub mod features;
pub mod format;
pub mod health;
pub mod prediction;

pub use error::ScanError;
pub use health::HealthResponse;
pub use prediction::{Confidence, Prediction, PredictionResponse, Reason, ScanOutcome};
