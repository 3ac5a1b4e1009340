//! Error taxonomy. Load errors are fatal at startup; everything else rejects
//! a single request.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::path::PathBuf;
use thiserror::Error;

/// Model artifact could not be turned into a scorer. Aborts startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("model artifact not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read model artifact {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupt model artifact: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("model field `{field}` has {actual} entries, expected {expected}")]
    Dimension {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("model field `{field}` contains a non-finite value")]
    NonFinite { field: &'static str },

    #[error("std of feature `{feature}` is 0; standardization would divide by zero")]
    ZeroStd { feature: &'static str },
}

/// Media type outside what the service speaks (`application/json`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnsupportedMediaType {
    #[error("unsupported content type: {0}")]
    Request(String),

    #[error("unsupported response content type: {0}")]
    Response(String),
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error(transparent)]
    Media(#[from] UnsupportedMediaType),

    #[error("request body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("request body must be a JSON object")]
    NotAnObject,

    #[error("field `{field}` must be numeric")]
    NonNumeric { field: &'static str },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    /// A zero standard deviation means the artifact is corrupt.
    #[error("division by zero: std of feature `{feature}` is 0")]
    DivisionByZero { feature: &'static str },

    /// NaN score, e.g. opposing infinities after standardization.
    #[error("linear score is undefined (NaN)")]
    UndefinedScore,
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error(transparent)]
    Media(#[from] UnsupportedMediaType),

    #[error("failed to encode response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Anything that can reject one invocation.
#[derive(Debug, Error)]
pub enum InvokeError {
    #[error(transparent)]
    Media(#[from] UnsupportedMediaType),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Score(#[from] ScoreError),

    #[error(transparent)]
    Format(#[from] FormatError),
}

impl InvokeError {
    pub fn status(&self) -> StatusCode {
        match self {
            InvokeError::Media(m)
            | InvokeError::Extract(ExtractError::Media(m))
            | InvokeError::Format(FormatError::Media(m)) => match m {
                UnsupportedMediaType::Request(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
                UnsupportedMediaType::Response(_) => StatusCode::NOT_ACCEPTABLE,
            },
            InvokeError::Extract(_) => StatusCode::BAD_REQUEST,
            InvokeError::Score(ScoreError::UndefinedScore) => StatusCode::UNPROCESSABLE_ENTITY,
            InvokeError::Score(ScoreError::DivisionByZero { .. }) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            InvokeError::Format(FormatError::Json(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for InvokeError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "model integrity failure");
            "Internal server error".to_string()
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "invocation rejected");
            self.to_string()
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}
