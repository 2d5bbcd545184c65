use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use subtle::ConstantTimeEq;

use crate::presentation::handlers::ApiError;

pub const ACCESS_HEADER: &str = "x-internal-access";

/// Paths reachable without the shared secret.
const PUBLIC_PATHS: &[&str] = &["/health"];

/// Static shared-secret check. Grants no identity beyond "caller knows the secret".
#[derive(Clone)]
pub struct AccessGate {
    secret: Arc<[u8]>,
}

impl AccessGate {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: Arc::from(secret.as_ref()),
        }
    }

    pub fn permits(&self, presented: Option<&[u8]>) -> bool {
        match presented {
            Some(value) => value.ct_eq(&self.secret).into(),
            None => false,
        }
    }

    pub fn is_public(path: &str) -> bool {
        PUBLIC_PATHS.contains(&path)
    }
}

pub async fn access_gate_middleware(
    State(gate): State<AccessGate>,
    request: Request,
    next: Next,
) -> Response {
    if AccessGate::is_public(request.uri().path()) {
        return next.run(request).await;
    }

    let presented = request
        .headers()
        .get(ACCESS_HEADER)
        .map(|value| value.as_bytes());

    if !gate.permits(presented) {
        tracing::warn!(
            path = %request.uri().path(),
            header_present = presented.is_some(),
            "Rejected request with invalid internal access code"
        );
        return ApiError::Forbidden.into_response();
    }

    next.run(request).await
}
