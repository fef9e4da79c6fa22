//! Certificate content dispatch and the response it produces.

use axum::http::StatusCode;
use serde::Serialize;

use crate::error::VerifyError;
use crate::pocketsign::certificate_content::{JpkiCardDigitalSignatureContent, TypeSpecificContent};
use crate::pocketsign::VerifyResponse;

/// Identity attributes of a JPKI signing certificate, copied verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityAttributes {
    pub common_name: String,
    pub gender: String,
    pub date_of_birth: String,
    pub address: String,
    pub substitute_character_of_address: String,
    pub substitute_character_of_common_name: String,
}

impl From<JpkiCardDigitalSignatureContent> for IdentityAttributes {
    fn from(content: JpkiCardDigitalSignatureContent) -> Self {
        Self {
            common_name: content.common_name,
            gender: content.gender,
            date_of_birth: content.date_of_birth,
            address: content.address,
            substitute_character_of_address: content.substitute_character_of_address,
            substitute_character_of_common_name: content.substitute_character_of_common_name,
        }
    }
}

/// Result of one verification call. Exactly one per request.
#[derive(Debug)]
pub enum VerificationOutcome {
    Success(IdentityAttributes),
    EmptyContent,
    /// Carries the fully qualified type name of the variant
    UnsupportedVariant(String),
    Error(VerifyError),
}

impl VerificationOutcome {
    /// Pick the outcome for a successful `Verify` response.
    pub fn from_response(response: VerifyResponse) -> Self {
        let content = response
            .certificate_content
            .and_then(|c| c.type_specific_content);

        match content {
            None => VerificationOutcome::EmptyContent,
            Some(TypeSpecificContent::JpkiCardDigitalSignatureContent(v)) => {
                VerificationOutcome::Success(v.into())
            }
            Some(other @ TypeSpecificContent::JpkiCardUserAuthenticationContent(_)) => {
                VerificationOutcome::UnsupportedVariant(other.type_name())
            }
        }
    }

    /// Status code and body sent to the caller.
    pub fn into_response_parts(self) -> (StatusCode, VerifyResponseBody) {
        match self {
            VerificationOutcome::Success(attributes) => (
                StatusCode::OK,
                VerifyResponseBody {
                    success: true,
                    result: Some(attributes),
                    message: "success".to_string(),
                },
            ),
            VerificationOutcome::EmptyContent => (
                StatusCode::OK,
                VerifyResponseBody::failure("CertificateContent is unexpectedly empty"),
            ),
            VerificationOutcome::UnsupportedVariant(type_name) => (
                StatusCode::OK,
                VerifyResponseBody::failure(format!(
                    "Unsupported certificate content type: {}",
                    type_name
                )),
            ),
            VerificationOutcome::Error(e) => (
                StatusCode::BAD_REQUEST,
                VerifyResponseBody::failure(format!("Error: {}", e)),
            ),
        }
    }
}

impl From<Result<VerifyResponse, VerifyError>> for VerificationOutcome {
    fn from(result: Result<VerifyResponse, VerifyError>) -> Self {
        match result {
            Ok(response) => VerificationOutcome::from_response(response),
            Err(e) => VerificationOutcome::Error(e),
        }
    }
}

/// JSON body returned by `POST /verify`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyResponseBody {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<IdentityAttributes>,
    pub message: String,
}

impl VerifyResponseBody {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            message: message.into(),
        }
    }
}
