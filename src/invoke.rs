//! One invocation end to end: negotiate output, extract features, score,
//! encode. Shared by the HTTP handler and the one-shot CLI.

use crate::error::InvokeError;
use crate::features::FeatureExtractor;
use crate::media::MediaType;
use crate::model::Scorer;
use crate::response::ResponseFormatter;
use crate::risk::PredictionResult;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Invocation {
    pub media_type: MediaType,
    pub body: Vec<u8>,
    pub result: PredictionResult,
}

pub fn invoke(
    scorer: &Scorer,
    body: &[u8],
    content_type: Option<&str>,
    accept: Option<&str>,
) -> Result<Invocation, InvokeError> {
    let formatter = ResponseFormatter::new();
    let media_type = formatter.negotiate(accept)?;
    let features = FeatureExtractor::new().extract(body, content_type)?;
    let result = scorer.predict(&features)?;
    let body = formatter.encode(&result, media_type)?;

    debug!(
        prediction = result.prediction,
        probability = result.probability,
        risk_level = result.risk_level.as_str(),
        "scored"
    );

    Ok(Invocation {
        media_type,
        body,
        result,
    })
}
