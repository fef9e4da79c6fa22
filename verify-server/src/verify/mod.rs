//! Signature verification pipeline.
//!
//! ## Processing Flow
//!
//! ```text
//! VerifyRequestBody → to_rpc_request() → VerificationApi::verify → VerificationOutcome
//! ```

pub mod outcome;
pub mod request;

use tracing::{info, warn};

use crate::pocketsign::VerificationApi;

pub use outcome::{IdentityAttributes, VerificationOutcome, VerifyResponseBody};
pub use request::VerifyRequestBody;

/// Decode the body, call the verification service once and classify the result.
pub async fn run_verification(
    api: &dyn VerificationApi,
    body: &VerifyRequestBody,
    token: &str,
) -> VerificationOutcome {
    let request = match body.to_rpc_request() {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, kind = e.kind(), "verify_decode_failed");
            return VerificationOutcome::Error(e);
        }
    };

    let outcome = VerificationOutcome::from(api.verify(request, token).await);

    match &outcome {
        VerificationOutcome::Success(_) => info!("verify_identity_extracted"),
        VerificationOutcome::EmptyContent => warn!("verify_certificate_content_empty"),
        VerificationOutcome::UnsupportedVariant(type_name) => {
            warn!(type_name = %type_name, "verify_certificate_content_unsupported")
        }
        VerificationOutcome::Error(e) => {
            warn!(error = ?e, kind = e.kind(), "verify_remote_failed")
        }
    }

    outcome
}
