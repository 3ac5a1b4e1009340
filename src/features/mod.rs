//! Request features: canonical field order, the parsed record, and the
//! extractor that turns a request body into a model input vector.

mod extract;
mod record;

pub use extract::FeatureExtractor;
pub use record::{FeatureRecord, FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
