//! Logistic model: artifact loading and scoring.

mod artifact;
mod scorer;

pub use artifact::{LoadedModel, ModelArtifact, ModelLoader};
pub use scorer::{sigmoid, Scorer};
