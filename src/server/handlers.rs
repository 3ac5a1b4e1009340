use super::AppState;
use crate::error::{InvokeError, UnsupportedMediaType};
use crate::invoke::invoke;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::info_span;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_sha256: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub version: &'static str,
    pub timestamp: i64,
}

/// 500 when the model cannot score anything, so the host recycles the container.
pub async fn ping(State(state): State<AppState>) -> Response {
    let (status, health, error) = match state.scorer.integrity() {
        Ok(()) => (StatusCode::OK, "healthy", None),
        Err(e) => {
            tracing::error!(error = %e, "model integrity check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "unhealthy",
                Some(e.to_string()),
            )
        }
    };

    let body = Json(PingResponse {
        status: health,
        model_sha256: state.scorer.fingerprint().map(str::to_string),
        error,
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().timestamp(),
    });
    (status, body).into_response()
}

pub async fn invocations(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, InvokeError> {
    let request_id = Uuid::new_v4();
    let span = info_span!("invocation", %request_id);
    let content_type = header_str(&headers, CONTENT_TYPE, UnsupportedMediaType::Request)?;
    let accept = header_str(&headers, ACCEPT, UnsupportedMediaType::Response)?;

    let out = span.in_scope(|| invoke(&state.scorer, &body, content_type, accept))?;
    Ok(([(CONTENT_TYPE, out.media_type.as_str())], out.body).into_response())
}

/// Absent headers are `None`; a present value that is not visible ASCII is
/// rejected instead of falling back to the JSON default.
fn header_str(
    headers: &HeaderMap,
    name: HeaderName,
    unsupported: fn(String) -> UnsupportedMediaType,
) -> Result<Option<&str>, UnsupportedMediaType> {
    match headers.get(name) {
        None => Ok(None),
        Some(v) => v
            .to_str()
            .map(Some)
            .map_err(|_| unsupported(String::from_utf8_lossy(v.as_bytes()).into_owned())),
    }
}
