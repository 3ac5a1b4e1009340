//! Request body → canonical feature vector.

use super::{FeatureRecord, FeatureVector, FEATURE_NAMES};
use crate::error::ExtractError;
use crate::media::MediaType;
use serde_json::Value;

/// Parses request payloads. Unknown keys are ignored and missing keys default
/// to 0; neither is reported as an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureExtractor;

impl FeatureExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(
        &self,
        body: &[u8],
        content_type: Option<&str>,
    ) -> Result<FeatureVector, ExtractError> {
        Ok(self.parse_record(body, content_type)?.to_vector())
    }

    /// The media type is checked before the body is touched.
    pub fn parse_record(
        &self,
        body: &[u8],
        content_type: Option<&str>,
    ) -> Result<FeatureRecord, ExtractError> {
        match MediaType::from_content_type(content_type)? {
            MediaType::Json => self.parse_json(body),
        }
    }

    fn parse_json(&self, body: &[u8]) -> Result<FeatureRecord, ExtractError> {
        let Value::Object(map) = serde_json::from_slice::<Value>(body)? else {
            return Err(ExtractError::NotAnObject);
        };

        let mut record = FeatureRecord::default();
        for name in FEATURE_NAMES {
            let Some(raw) = map.get(name) else {
                continue;
            };
            let value = numeric(raw).ok_or(ExtractError::NonNumeric { field: name })?;
            if let Some(slot) = record.slot_mut(name) {
                *slot = Some(value);
            }
        }
        Ok(record)
    }
}

/// Numbers as-is, booleans as 1/0.
fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_are_ignored() {
        let v = FeatureExtractor::new()
            .extract(br#"{"Age":50,"Sex":"M","Chest_pain":[1,2]}"#, None)
            .unwrap();
        assert_eq!(v.values, [50.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn record_keeps_only_present_fields() {
        let record = FeatureExtractor::new()
            .parse_record(br#"{"Cholesterol":233.5,"ST_depression":0}"#, None)
            .unwrap();
        assert_eq!(record.age, None);
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            serde_json::json!({"Cholesterol": 233.5, "ST_depression": 0.0})
        );
        assert_eq!(record.to_vector().values, [0.0, 233.5, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn booleans_count_as_one_and_zero() {
        let v = FeatureExtractor::new()
            .extract(br#"{"FBS_over_120":true,"Vessels_fluro":false}"#, None)
            .unwrap();
        assert_eq!(v.values[2], 1.0);
        assert_eq!(v.values[5], 0.0);
    }

    #[test]
    fn null_in_recognized_field_is_rejected() {
        let err = FeatureExtractor::new()
            .extract(br#"{"Max_HR":null}"#, None)
            .unwrap_err();
        assert!(matches!(err, ExtractError::NonNumeric { field: "Max_HR" }));
    }

    #[test]
    fn unsupported_type_rejected_before_parsing() {
        let err = FeatureExtractor::new()
            .extract(b"not json at all", Some("text/plain"))
            .unwrap_err();
        assert!(matches!(err, ExtractError::Media(_)));
    }
}
