//! heartscore entrypoint: load the model once, then serve `/ping` and
//! `/invocations` until Ctrl+C. A model that fails to load aborts startup.

use heartscore::{
    config::ServiceConfig,
    logging::StructuredLogger,
    model::Scorer,
    server::{self, AppState},
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = std::env::var("HEARTSCORE_CONFIG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.json"));
    let config = ServiceConfig::load(&config_path).with_env_overrides();

    StructuredLogger::init(config.log.json, &config.log.level);

    info!(
        model_dir = ?config.model.model_dir,
        artifact = %config.model.artifact_file,
        "heartscore starting"
    );

    let scorer = match Scorer::load(&config.model.model_dir, &config.model.artifact_file) {
        Ok(s) => s.with_risk_config(config.risk.clone()),
        Err(e) => {
            error!(error = %e, "model load failed; aborting startup");
            return Err(e.into());
        }
    };

    server::serve(&config.server, AppState::new(Arc::new(scorer))).await?;
    info!("heartscore stopped");

    Ok(())
}
