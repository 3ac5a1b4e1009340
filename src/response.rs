//! Prediction result → response body.

use crate::error::{FormatError, UnsupportedMediaType};
use crate::media::MediaType;
use crate::risk::PredictionResult;

#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseFormatter;

impl ResponseFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Pick the output media type from an `Accept` value before any work is done.
    pub fn negotiate(&self, accept: Option<&str>) -> Result<MediaType, UnsupportedMediaType> {
        MediaType::from_accept(accept)
    }

    pub fn encode(
        &self,
        result: &PredictionResult,
        media_type: MediaType,
    ) -> Result<Vec<u8>, FormatError> {
        match media_type {
            MediaType::Json => Ok(serde_json::to_vec(result)?),
        }
    }

    pub fn format(
        &self,
        result: &PredictionResult,
        accept: Option<&str>,
    ) -> Result<Vec<u8>, FormatError> {
        let media_type = self.negotiate(accept)?;
        self.encode(result, media_type)
    }
}
