//! Standardize → affine score → sigmoid → risk bucket.
//! Immutable after construction; share it behind an `Arc`.

use super::{ModelArtifact, ModelLoader};
use crate::config::RiskConfig;
use crate::error::{LoadError, ScoreError};
use crate::features::{FeatureVector, FEATURE_NAMES};
use crate::risk::{PredictionResult, RiskEngine};
use ndarray::{Array1, ArrayView1};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Scorer {
    weights: Array1<f64>,
    bias: f64,
    mean: Array1<f64>,
    std: Array1<f64>,
    risk: RiskEngine,
    fingerprint: Option<String>,
}

impl Scorer {
    pub fn new(artifact: ModelArtifact) -> Result<Self, LoadError> {
        artifact.validate()?;
        Ok(Self {
            weights: Array1::from(artifact.weights),
            bias: artifact.bias,
            mean: Array1::from(artifact.mean),
            std: Array1::from(artifact.std),
            risk: RiskEngine::default(),
            fingerprint: None,
        })
    }

    /// Load from a model directory (or artifact path).
    pub fn load(location: &Path, artifact_file: &str) -> Result<Self, LoadError> {
        let loaded = ModelLoader::new(artifact_file).load(location)?;
        let mut scorer = Self::new(loaded.artifact)?;
        scorer.fingerprint = Some(loaded.sha256);
        Ok(scorer)
    }

    pub fn with_risk_config(mut self, config: RiskConfig) -> Self {
        self.risk = RiskEngine::new(config);
        self
    }

    /// SHA-256 of the artifact, when loaded from disk.
    pub fn fingerprint(&self) -> Option<&str> {
        self.fingerprint.as_deref()
    }

    pub fn risk_engine(&self) -> &RiskEngine {
        &self.risk
    }

    /// Fails when any std entry is zero, i.e. no request could be scored.
    pub fn integrity(&self) -> Result<(), ScoreError> {
        match self.std.iter().position(|s| *s == 0.0) {
            Some(i) => Err(ScoreError::DivisionByZero {
                feature: FEATURE_NAMES[i],
            }),
            None => Ok(()),
        }
    }

    /// `(x - mean) / std`, refusing to divide by a zero std.
    pub fn standardize(&self, features: &FeatureVector) -> Result<Array1<f64>, ScoreError> {
        self.integrity()?;
        let x = ArrayView1::from(features.as_slice());
        Ok((&x - &self.mean) / &self.std)
    }

    /// May be infinite for extreme inputs; the sigmoid maps that to 0 or 1.
    pub fn linear_score(&self, features: &FeatureVector) -> Result<f64, ScoreError> {
        let z = self.standardize(features)?.dot(&self.weights) + self.bias;
        if z.is_nan() {
            return Err(ScoreError::UndefinedScore);
        }
        Ok(z)
    }

    pub fn probability(&self, features: &FeatureVector) -> Result<f64, ScoreError> {
        Ok(sigmoid(self.linear_score(features)?))
    }

    pub fn predict(&self, features: &FeatureVector) -> Result<PredictionResult, ScoreError> {
        let probability = self.probability(features)?;
        Ok(self.risk.classify(probability))
    }
}

pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
