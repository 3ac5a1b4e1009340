//! Service configuration. JSON file with defaults; the hosting platform's
//! model-dir and port variables win over the file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_ARTIFACT_FILE: &str = "model.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Where the model artifact lives
    pub model: ModelConfig,
    /// HTTP listener
    pub server: ServerConfig,
    /// Risk bucket thresholds
    pub risk: RiskConfig,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Directory holding the artifact (or a direct path to it)
    pub model_dir: PathBuf,
    /// Artifact file name inside `model_dir`
    pub artifact_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// Probability at or above this is high risk
    pub high_threshold: f64,
    /// Probability at or above this (and below high) is moderate risk
    pub moderate_threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("/opt/ml/model"),
            artifact_file: DEFAULT_ARTIFACT_FILE.to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            high_threshold: 0.7,
            moderate_threshold: 0.4,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: true,
        }
    }
}

impl ServiceConfig {
    /// Load from JSON file if present; otherwise return default
    pub fn load(path: &std::path::Path) -> Self {
        if path.exists() {
            if let Ok(data) = std::fs::read_to_string(path) {
                if let Ok(c) = serde_json::from_str::<ServiceConfig>(&data) {
                    return c;
                }
            }
        }
        Self::default()
    }

    /// Apply `SM_MODEL_DIR` and `SAGEMAKER_BIND_TO_PORT` when set.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var("SM_MODEL_DIR").ok(),
            std::env::var("SAGEMAKER_BIND_TO_PORT").ok(),
        )
    }

    pub fn with_overrides(mut self, model_dir: Option<String>, port: Option<String>) -> Self {
        if let Some(dir) = model_dir.filter(|d| !d.trim().is_empty()) {
            self.model.model_dir = PathBuf::from(dir);
        }
        if let Some(port) = port.and_then(|p| p.trim().parse().ok()) {
            self.server.port = port;
        }
        self
    }
}
