//! Named-field patient record and the fixed-order vector the model consumes.

use serde::Serialize;

/// Number of features the model was trained on.
pub const FEATURE_COUNT: usize = 6;

/// Training column order. The vector is positional, so reordering this list
/// silently corrupts every prediction.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "Age",
    "Cholesterol",
    "FBS_over_120",
    "Max_HR",
    "ST_depression",
    "Vessels_fluro",
];

/// One request's features by name. Absent fields score as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeatureRecord {
    #[serde(rename = "Age", skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
    #[serde(rename = "Cholesterol", skip_serializing_if = "Option::is_none")]
    pub cholesterol: Option<f64>,
    /// Fasting blood sugar over 120 mg/dl (0 or 1)
    #[serde(rename = "FBS_over_120", skip_serializing_if = "Option::is_none")]
    pub fbs_over_120: Option<f64>,
    #[serde(rename = "Max_HR", skip_serializing_if = "Option::is_none")]
    pub max_hr: Option<f64>,
    #[serde(rename = "ST_depression", skip_serializing_if = "Option::is_none")]
    pub st_depression: Option<f64>,
    /// Major vessels colored by fluoroscopy
    #[serde(rename = "Vessels_fluro", skip_serializing_if = "Option::is_none")]
    pub vessels_fluro: Option<f64>,
}

impl FeatureRecord {
    /// Field slot for a canonical feature name; `None` for unrecognized names.
    pub fn slot_mut(&mut self, name: &str) -> Option<&mut Option<f64>> {
        match name {
            "Age" => Some(&mut self.age),
            "Cholesterol" => Some(&mut self.cholesterol),
            "FBS_over_120" => Some(&mut self.fbs_over_120),
            "Max_HR" => Some(&mut self.max_hr),
            "ST_depression" => Some(&mut self.st_depression),
            "Vessels_fluro" => Some(&mut self.vessels_fluro),
            _ => None,
        }
    }

    /// Canonical-order vector with missing fields defaulted to 0.
    pub fn to_vector(&self) -> FeatureVector {
        FeatureVector::new([
            self.age.unwrap_or(0.0),
            self.cholesterol.unwrap_or(0.0),
            self.fbs_over_120.unwrap_or(0.0),
            self.max_hr.unwrap_or(0.0),
            self.st_depression.unwrap_or(0.0),
            self.vessels_fluro.unwrap_or(0.0),
        ])
    }
}

/// Fixed-size model input, in `FEATURE_NAMES` order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector {
    pub values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    pub fn zeros() -> Self {
        Self::new([0.0; FEATURE_COUNT])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}
