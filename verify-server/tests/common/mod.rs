//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use jpki_verify::pocketsign::certificate_content::{
    JpkiCardDigitalSignatureContent, TypeSpecificContent,
};
use jpki_verify::pocketsign::{CertificateContent, VerifyRequest, VerifyResponse};
use jpki_verify::{router, AppState, Config, VerificationApi, VerifyError};
use tower::ServiceExt; // for `oneshot`

pub const TEST_TOKEN: &str = "test-api-key";

/// Canned behavior of the mock verification service.
pub enum MockReply {
    Response(VerifyResponse),
    RpcError { code: &'static str, message: &'static str },
}

/// Mock service recording every call it receives.
pub struct MockVerificationApi {
    reply: MockReply,
    calls: AtomicUsize,
    last_call: Mutex<Option<(VerifyRequest, String)>>,
}

impl MockVerificationApi {
    pub fn new(reply: MockReply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            last_call: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_call(&self) -> Option<(VerifyRequest, String)> {
        self.last_call.lock().unwrap().clone()
    }
}

#[async_trait]
impl VerificationApi for MockVerificationApi {
    async fn verify(
        &self,
        request: VerifyRequest,
        token: &str,
    ) -> Result<VerifyResponse, VerifyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_call.lock().unwrap() = Some((request, token.to_string()));

        match &self.reply {
            MockReply::Response(r) => Ok(r.clone()),
            MockReply::RpcError { code, message } => Err(VerifyError::Rpc {
                code: code.to_string(),
                message: message.to_string(),
            }),
        }
    }
}

pub fn yamada_taro() -> JpkiCardDigitalSignatureContent {
    JpkiCardDigitalSignatureContent {
        common_name: "山田太郎".to_string(),
        date_of_birth: "19800401".to_string(),
        gender: "男".to_string(),
        address: "東京都千代田区霞が関1-1-1".to_string(),
        substitute_character_of_common_name: "".to_string(),
        substitute_character_of_address: "".to_string(),
    }
}

pub fn response_with(content: Option<TypeSpecificContent>) -> VerifyResponse {
    VerifyResponse {
        certificate_content: Some(CertificateContent {
            type_specific_content: content,
        }),
    }
}

pub fn signature_response() -> VerifyResponse {
    response_with(Some(TypeSpecificContent::JpkiCardDigitalSignatureContent(
        yamada_taro(),
    )))
}

pub fn test_config(token: Option<&str>) -> Config {
    Config {
        pocket_sign_api_key: token.map(str::to_string),
        verify_endpoint: "http://127.0.0.1:1".to_string(),
        request_timeout_ms: 1_000,
        port: 0,
    }
}

pub fn test_app(token: Option<&str>, api: Arc<MockVerificationApi>) -> Router {
    router(AppState::new(test_config(token), api))
}

/// Send a raw body to `POST /verify` and return status and JSON response.
pub async fn post_verify(app: Router, body: impl Into<Body>) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/verify")
                .header("content-type", "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    (status, json)
}
