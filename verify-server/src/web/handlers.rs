//! HTTP endpoint handlers.
//!
//! `POST /verify` goes through these steps, each ending the request on failure:
//! 1. Check that an API token is configured
//! 2. Parse and validate the JSON body
//! 3. Run the verification pipeline and map its outcome

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::pocketsign::VerificationApi;
use crate::verify::{run_verification, VerifyRequestBody, VerifyResponseBody};
use crate::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub verifier: Arc<dyn VerificationApi>,
}

impl AppState {
    pub fn new(config: Config, verifier: Arc<dyn VerificationApi>) -> Self {
        Self {
            config: Arc::new(config),
            verifier,
        }
    }
}

/// Build the router with all routes and tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/verify", post(verify))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// Health Check
// =============================================================================

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// =============================================================================
// Signature Verification
// =============================================================================

/// Signature verification endpoint.
///
/// The body is read as raw bytes so that malformed JSON and schema
/// mismatches produce the same 400 response, after the token check.
pub async fn verify(
    State(state): State<AppState>,
    body: Bytes,
) -> (StatusCode, Json<VerifyResponseBody>) {
    info!(body_length = body.len(), "verify_request_received");

    let Some(token) = state.config.api_token() else {
        error!("verify_missing_token");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(VerifyResponseBody::failure("Missing token")),
        );
    };

    let request: VerifyRequestBody = match serde_json::from_slice(&body) {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "verify_invalid_request_body");
            return (
                StatusCode::BAD_REQUEST,
                Json(VerifyResponseBody::failure("Invalid request body")),
            );
        }
    };

    info!(
        signature_length = request.signature.len(),
        digest_length = request.digest.len(),
        certificate_length = request.certificate.len(),
        has_document = request.document.is_some(),
        "verify_request_parsed"
    );

    let (status, response) = run_verification(state.verifier.as_ref(), &request, token)
        .await
        .into_response_parts();

    info!(
        status_code = status.as_u16(),
        success = response.success,
        "verify_request_complete"
    );

    (status, Json(response))
}
