//! Connect-protocol client for `pocketsign.verify.v2.VerificationService`.
//!
//! Unary calls are plain HTTP POSTs carrying binary protobuf. Errors come
//! back as a JSON `{code, message}` body on a non-200 status.

use std::time::Duration;

use async_trait::async_trait;
use prost::Message;
use reqwest::{header, Client, StatusCode};
use serde::Deserialize;
use tracing::{info, warn};
use url::Url;

use super::types::{VerifyRequest, VerifyResponse};
use crate::error::VerifyError;

/// Route of the unary `Verify` procedure.
pub const VERIFY_PROCEDURE: &str = "pocketsign.verify.v2.VerificationService/Verify";

const CONTENT_TYPE_PROTO: &str = "application/proto";
const CONNECT_PROTOCOL_VERSION: &str = "1";

/// The remote verification call.
///
/// Implemented by [`ConnectClient`] in production and by mocks in tests.
#[async_trait]
pub trait VerificationApi: Send + Sync {
    /// Invoke `Verify`, authenticating with `token`.
    async fn verify(&self, request: VerifyRequest, token: &str)
        -> Result<VerifyResponse, VerifyError>;
}

/// HTTP client speaking the Connect unary protocol with binary encoding.
#[derive(Clone)]
pub struct ConnectClient {
    client: Client,
    verify_url: Url,
}

impl ConnectClient {
    /// Create a client for the service at `base_url`.
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).gzip(true).build()?;
        Self::with_client(client, base_url)
    }

    /// Create a client reusing an existing `reqwest::Client`.
    pub fn with_client(client: Client, base_url: &str) -> anyhow::Result<Self> {
        let base = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))?;
        let verify_url = base.join(VERIFY_PROCEDURE)?;

        Ok(Self { client, verify_url })
    }

    /// Full URL of the `Verify` procedure.
    pub fn verify_url(&self) -> &Url {
        &self.verify_url
    }
}

#[async_trait]
impl VerificationApi for ConnectClient {
    async fn verify(
        &self,
        request: VerifyRequest,
        token: &str,
    ) -> Result<VerifyResponse, VerifyError> {
        info!(
            url = %self.verify_url,
            certificate_length = request.certificate.len(),
            digest_length = request.digest.len(),
            signature_length = request.signature.len(),
            "pocketsign_verify_starting"
        );

        let response = self
            .client
            .post(self.verify_url.clone())
            .header(header::CONTENT_TYPE, CONTENT_TYPE_PROTO)
            .header("Connect-Protocol-Version", CONNECT_PROTOCOL_VERSION)
            .bearer_auth(token)
            .body(request.encode_to_vec())
            .send()
            .await
            .map_err(|e| {
                warn!(
                    error = %e,
                    is_timeout = e.is_timeout(),
                    is_connect = e.is_connect(),
                    "pocketsign_verify_transport_error"
                );
                VerifyError::Transport(e)
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            warn!(error = %e, status_code = status.as_u16(), "pocketsign_verify_body_error");
            VerifyError::Transport(e)
        })?;

        if status != StatusCode::OK {
            let err = connect_error(status, &body);
            warn!(status_code = status.as_u16(), error = %err, "pocketsign_verify_rpc_error");
            return Err(err);
        }

        let decoded = VerifyResponse::decode(body.as_ref()).map_err(|e| {
            warn!(error = %e, body_length = body.len(), "pocketsign_verify_decode_error");
            VerifyError::Decode(e)
        })?;

        info!(
            has_certificate_content = decoded.certificate_content.is_some(),
            "pocketsign_verify_complete"
        );

        Ok(decoded)
    }
}

/// JSON error body of the Connect protocol.
#[derive(Debug, Deserialize)]
struct ConnectErrorBody {
    code: Option<String>,
    message: Option<String>,
}

/// Build an RPC error from a non-200 response.
///
/// Falls back to the HTTP status when the body is not a Connect error.
fn connect_error(status: StatusCode, body: &[u8]) -> VerifyError {
    let parsed: Option<ConnectErrorBody> = serde_json::from_slice(body).ok();
    let (code, message) = match parsed {
        Some(ConnectErrorBody { code, message }) => (code, message),
        None => (None, None),
    };

    VerifyError::Rpc {
        code: code.unwrap_or_else(|| code_from_http_status(status).to_string()),
        message: message.unwrap_or_else(|| status.to_string()),
    }
}

/// Connect error code implied by an HTTP status.
fn code_from_http_status(status: StatusCode) -> &'static str {
    match status.as_u16() {
        400 => "internal",
        401 => "unauthenticated",
        403 => "permission_denied",
        404 => "unimplemented",
        429 | 502 | 503 | 504 => "unavailable",
        _ => "unknown",
    }
}
