//! Turns a model probability into the reported prediction, using configurable
//! bucket thresholds.

use crate::config::RiskConfig;
use serde::{Deserialize, Serialize};

/// Probability at or above this predicts the positive class.
pub const DECISION_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "LOW RISK")]
    Low,
    #[serde(rename = "MODERATE RISK")]
    Moderate,
    #[serde(rename = "HIGH RISK")]
    High,
}

impl RiskLevel {
    /// Lower bounds are inclusive.
    pub fn from_probability(probability: f64, config: &RiskConfig) -> Self {
        if probability >= config.high_threshold {
            RiskLevel::High
        } else if probability >= config.moderate_threshold {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW RISK",
            RiskLevel::Moderate => "MODERATE RISK",
            RiskLevel::High => "HIGH RISK",
        }
    }
}

/// Scored response for a single request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: u8,
    pub probability: f64,
    pub risk_level: RiskLevel,
    pub confidence: String,
}

#[derive(Debug, Clone, Default)]
pub struct RiskEngine {
    config: RiskConfig,
}

impl RiskEngine {
    pub fn new(config: RiskConfig) -> Self {
        Self { config }
    }

    pub fn classify(&self, probability: f64) -> PredictionResult {
        let prediction = u8::from(probability >= DECISION_THRESHOLD);
        PredictionResult {
            prediction,
            probability,
            risk_level: RiskLevel::from_probability(probability, &self.config),
            confidence: confidence(probability, prediction),
        }
    }

    pub fn config(&self) -> &RiskConfig {
        &self.config
    }
}

/// Certainty in the predicted class, e.g. `"83.4%"`.
fn confidence(probability: f64, prediction: u8) -> String {
    let certainty = if prediction == 1 {
        probability
    } else {
        1.0 - probability
    };
    format!("{:.1}%", certainty * 100.0)
}
