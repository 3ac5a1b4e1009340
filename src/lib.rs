//! heartscore — heart-disease risk scoring for a pre-trained logistic model.
//!
//! Modular structure:
//! - [`model`] — Artifact loading and the standardize/sigmoid scorer
//! - [`features`] — Request record → fixed-order feature vector
//! - [`risk`] — Decision threshold, risk buckets, confidence
//! - [`media`] — `application/json` content negotiation
//! - [`response`] — Prediction result serialization
//! - [`invoke`] — One request end to end
//! - [`server`] — `/ping` and `/invocations` over HTTP
//! - [`logging`] — Structured JSON logging

pub mod config;
pub mod error;
pub mod features;
pub mod invoke;
pub mod logging;
pub mod media;
pub mod model;
pub mod response;
pub mod risk;
pub mod server;

pub use config::ServiceConfig;
pub use error::{InvokeError, LoadError, ScoreError, UnsupportedMediaType};
pub use features::{FeatureExtractor, FeatureRecord, FeatureVector};
pub use invoke::{invoke, Invocation};
pub use logging::StructuredLogger;
pub use model::{ModelArtifact, Scorer};
pub use response::ResponseFormatter;
pub use risk::{PredictionResult, RiskEngine, RiskLevel};
