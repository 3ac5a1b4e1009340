//! Model artifact: weights, bias, and the training-set standardization
//! statistics. Written offline by training; read once at startup.

use crate::config::DEFAULT_ARTIFACT_FILE;
use crate::error::LoadError;
use crate::features::{FEATURE_COUNT, FEATURE_NAMES};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub weights: Vec<f64>,
    pub bias: f64,
    pub mean: Vec<f64>,
    pub std: Vec<f64>,
}

impl ModelArtifact {
    /// Decode and validate a JSON artifact, including its std entries.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, LoadError> {
        let artifact: ModelArtifact = serde_json::from_slice(bytes)?;
        artifact.validate()?;
        artifact.check_std()?;
        Ok(artifact)
    }

    /// Every vector must match the feature count and hold finite values.
    pub fn validate(&self) -> Result<(), LoadError> {
        for (field, values) in [
            ("weights", &self.weights),
            ("mean", &self.mean),
            ("std", &self.std),
        ] {
            if values.len() != FEATURE_COUNT {
                return Err(LoadError::Dimension {
                    field,
                    expected: FEATURE_COUNT,
                    actual: values.len(),
                });
            }
            if values.iter().any(|v| !v.is_finite()) {
                return Err(LoadError::NonFinite { field });
            }
        }
        if !self.bias.is_finite() {
            return Err(LoadError::NonFinite { field: "bias" });
        }
        Ok(())
    }

    /// A zero std would divide by zero on every request.
    pub fn check_std(&self) -> Result<(), LoadError> {
        match self.std.iter().position(|s| *s == 0.0) {
            Some(i) => Err(LoadError::ZeroStd {
                feature: FEATURE_NAMES.get(i).copied().unwrap_or("std"),
            }),
            None => Ok(()),
        }
    }
}

/// Artifact plus where it came from.
#[derive(Debug, Clone)]
pub struct LoadedModel {
    pub artifact: ModelArtifact,
    pub path: PathBuf,
    /// Hex SHA-256 of the artifact bytes
    pub sha256: String,
}

pub struct ModelLoader {
    artifact_file: String,
}

impl Default for ModelLoader {
    fn default() -> Self {
        Self::new(DEFAULT_ARTIFACT_FILE)
    }
}

impl ModelLoader {
    pub fn new(artifact_file: impl Into<String>) -> Self {
        Self {
            artifact_file: artifact_file.into(),
        }
    }

    /// A directory resolves to the artifact file inside it; anything else is
    /// taken as the artifact path itself.
    pub fn resolve(&self, location: &Path) -> PathBuf {
        if location.is_dir() {
            location.join(&self.artifact_file)
        } else {
            location.to_path_buf()
        }
    }

    pub fn load(&self, location: &Path) -> Result<LoadedModel, LoadError> {
        let path = self.resolve(location);
        let bytes = match std::fs::read(&path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(LoadError::NotFound(path));
            }
            Err(source) => return Err(LoadError::Io { path, source }),
        };

        let artifact = ModelArtifact::from_slice(&bytes)?;
        let sha256 = format!("{:x}", Sha256::digest(&bytes));
        info!(path = %path.display(), sha256 = %sha256, "model artifact loaded");

        Ok(LoadedModel {
            artifact,
            path,
            sha256,
        })
    }
}
