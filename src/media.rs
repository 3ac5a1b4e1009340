//! Content-type negotiation. `application/json` is the only media type spoken
//! in either direction.

use crate::error::UnsupportedMediaType;

pub const APPLICATION_JSON: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Json,
}

impl MediaType {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Json => APPLICATION_JSON,
        }
    }

    /// Resolve a request `Content-Type`. An absent header means JSON.
    pub fn from_content_type(value: Option<&str>) -> Result<Self, UnsupportedMediaType> {
        let Some(raw) = value else {
            return Ok(MediaType::Json);
        };
        if essence(raw) == APPLICATION_JSON {
            Ok(MediaType::Json)
        } else {
            Err(UnsupportedMediaType::Request(raw.trim().to_string()))
        }
    }

    /// Resolve an `Accept` header. Absent, blank, or wildcard means JSON;
    /// entries with `q=0` are refusals and never match.
    pub fn from_accept(value: Option<&str>) -> Result<Self, UnsupportedMediaType> {
        let Some(raw) = value else {
            return Ok(MediaType::Json);
        };
        if raw.trim().is_empty() {
            return Ok(MediaType::Json);
        }
        let acceptable = raw
            .split(',')
            .filter(|entry| !refused(entry))
            .map(essence)
            .any(|e| matches!(e.as_str(), APPLICATION_JSON | "application/*" | "*/*"));
        if acceptable {
            Ok(MediaType::Json)
        } else {
            Err(UnsupportedMediaType::Response(raw.trim().to_string()))
        }
    }
}

/// An Accept entry carrying `q=0` (or `0.0`, `0.000`).
fn refused(entry: &str) -> bool {
    entry.split(';').skip(1).any(|param| {
        let Some((key, value)) = param.split_once('=') else {
            return false;
        };
        key.trim().eq_ignore_ascii_case("q")
            && value.trim().parse::<f32>().map_or(false, |q| q == 0.0)
    })
}

/// `type/subtype` without parameters, lowercased.
fn essence(raw: &str) -> String {
    raw.split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}
