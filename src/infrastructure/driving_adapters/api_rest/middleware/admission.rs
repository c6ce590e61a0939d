//! Admission Control Extractor
//!
//! Decides whether the caller's network address is authorized to perform a
//! mutating operation, by checking it against the current trusted range
//! snapshot. Reads are public and never pass through this extractor.

use std::net::{IpAddr, SocketAddr};

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::{ErrorDetail, ErrorResponse};

/// Header consulted before the socket peer address, mirroring the
/// reverse-proxy deployment the service runs behind
const FORWARDED_FOR: &str = "x-forwarded-for";

/// Extractor admitting the caller of a mutating request.
///
/// Carries the resolved caller address. Rejection is a client-visible
/// forbidden signal; it is not retried and not treated as transient.
pub struct AdmissionGuard(pub IpAddr);

/// Error type for admission failures
pub struct AdmissionError {
    message: String,
}

impl AdmissionError {
    fn denied() -> Self {
        Self {
            message: "Access denied".to_string(),
        }
    }
}

impl IntoResponse for AdmissionError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: ErrorDetail {
                code: "FORBIDDEN".to_string(),
                message: self.message,
                details: None,
            },
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (StatusCode::FORBIDDEN, Json(body)).into_response()
    }
}

/// Resolve the caller address: first X-Forwarded-For entry when the header
/// is present, otherwise the socket peer address. A header that fails to
/// parse yields `None` (fail closed), never a fallback to the peer address.
fn client_ip(parts: &Parts) -> Option<IpAddr> {
    if let Some(forwarded) = parts.headers.get(FORWARDED_FOR) {
        return forwarded
            .to_str()
            .ok()
            .and_then(|value| value.split(',').next())
            .and_then(|first| first.trim().parse().ok());
    }

    parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|connect_info| connect_info.0.ip())
}

impl FromRequestParts<AppState> for AdmissionGuard {
    type Rejection = AdmissionError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // An unresolvable or unparsable caller address is never allowed.
        let Some(ip) = client_ip(parts) else {
            tracing::warn!("Rejecting write: caller address missing or unparsable");
            return Err(AdmissionError::denied());
        };

        let snapshot = state.allowlist.current();
        if snapshot.allows(ip) {
            Ok(Self(ip))
        } else {
            tracing::warn!(caller = %ip, "Rejecting write: address outside trusted ranges");
            Err(AdmissionError::denied())
        }
    }
}
