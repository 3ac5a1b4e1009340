//! Probability → decision, risk bucket, and confidence.

mod engine;

pub use engine::{PredictionResult, RiskEngine, RiskLevel, DECISION_THRESHOLD};
