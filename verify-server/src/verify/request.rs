//! Inbound request body and its translation into an RPC request.

use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};
use serde::Deserialize;

use crate::error::VerifyError;
use crate::pocketsign::{certificate_status::CheckMethod, verification::HashAlgorithm, VerifyRequest};

const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

/// Standard alphabet, padding optional.
const BASE64: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);

/// URL-safe alphabet (`-`, `_`), padding optional.
const BASE64_URL_SAFE: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

/// JSON body of `POST /verify`.
///
/// All values are base64. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyRequestBody {
    pub signature: String,
    pub digest: String,
    pub certificate: String,
    /// Accepted for client compatibility; not forwarded.
    #[serde(default)]
    pub document: Option<String>,
}

impl VerifyRequestBody {
    /// Decode the payload and build the `Verify` call.
    ///
    /// Hash algorithm, check method and user identification are fixed.
    pub fn to_rpc_request(&self) -> Result<VerifyRequest, VerifyError> {
        Ok(VerifyRequest {
            certificate: decode_field("certificate", &self.certificate)?,
            digest: decode_field("digest", &self.digest)?,
            signature: decode_field("signature", &self.signature)?,
            hash_algorithm: HashAlgorithm::Sha256.into(),
            // OCSP would give same-day revocation freshness
            check_method: CheckMethod::Crl.into(),
            identify_user: true,
        })
    }
}

/// Decode a base64 field the way browsers and Node clients produce it.
///
/// Whitespace anywhere in the value is ignored, so line-wrapped PEM bodies
/// decode. The URL-safe alphabet is tried when the standard one fails.
fn decode_field(field: &'static str, value: &str) -> Result<Vec<u8>, VerifyError> {
    let compact: String = value
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    BASE64
        .decode(&compact)
        .or_else(|e| BASE64_URL_SAFE.decode(&compact).map_err(|_| e))
        .map_err(|source| VerifyError::InvalidBase64 { field, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(signature: &str, digest: &str, certificate: &str) -> VerifyRequestBody {
        VerifyRequestBody {
            signature: signature.to_string(),
            digest: digest.to_string(),
            certificate: certificate.to_string(),
            document: None,
        }
    }

    #[test]
    fn test_schema_accepts_required_fields_only() {
        let parsed: VerifyRequestBody = serde_json::from_value(json!({
            "signature": "c2ln",
            "digest": "ZGln",
            "certificate": "Y2VydA=="
        }))
        .unwrap();

        assert_eq!(parsed.signature, "c2ln");
        assert!(parsed.document.is_none());
    }

    #[test]
    fn test_schema_accepts_null_or_string_document() {
        let with_null: VerifyRequestBody = serde_json::from_value(json!({
            "signature": "c2ln", "digest": "ZGln", "certificate": "Y2VydA==", "document": null
        }))
        .unwrap();
        assert!(with_null.document.is_none());

        let with_doc: VerifyRequestBody = serde_json::from_value(json!({
            "signature": "c2ln", "digest": "ZGln", "certificate": "Y2VydA==", "document": "ZG9j"
        }))
        .unwrap();
        assert_eq!(with_doc.document.as_deref(), Some("ZG9j"));
    }

    #[test]
    fn test_schema_ignores_unknown_fields() {
        let parsed = serde_json::from_value::<VerifyRequestBody>(json!({
            "signature": "c2ln", "digest": "ZGln", "certificate": "Y2VydA==", "extra": 1
        }));
        assert!(parsed.is_ok());
    }

    #[test]
    fn test_schema_rejects_missing_or_mistyped_fields() {
        let invalid = [
            json!({ "digest": "ZGln", "certificate": "Y2VydA==" }),
            json!({ "signature": "c2ln", "certificate": "Y2VydA==" }),
            json!({ "signature": "c2ln", "digest": "ZGln" }),
            json!({ "signature": 1, "digest": "ZGln", "certificate": "Y2VydA==" }),
            json!({ "signature": "c2ln", "digest": "ZGln", "certificate": "Y2VydA==", "document": 5 }),
            json!("c2ln"),
        ];

        for value in invalid {
            assert!(
                serde_json::from_value::<VerifyRequestBody>(value.clone()).is_err(),
                "expected rejection for {value}"
            );
        }
    }

    #[test]
    fn test_to_rpc_request_decodes_and_fixes_parameters() {
        let request = body("c2ln", "ZGln", "Y2VydA==").to_rpc_request().unwrap();

        assert_eq!(request.signature, b"sig");
        assert_eq!(request.digest, b"dig");
        assert_eq!(request.certificate, b"cert");
        assert_eq!(request.hash_algorithm(), HashAlgorithm::Sha256);
        assert_eq!(request.check_method(), CheckMethod::Crl);
        assert!(request.identify_user);
    }

    #[test]
    fn test_to_rpc_request_accepts_missing_padding() {
        let request = body("c2ln", "ZGln", "Y2VydA").to_rpc_request().unwrap();
        assert_eq!(request.certificate, b"cert");
    }

    #[test]
    fn test_to_rpc_request_ignores_line_breaks() {
        let request = body("c2ln", "ZGln", "Y2Vy\ndA==").to_rpc_request().unwrap();
        assert_eq!(request.certificate, b"cert");

        let request = body("c2ln", "ZG\r\n ln", "Y2VydA==").to_rpc_request().unwrap();
        assert_eq!(request.digest, b"dig");
    }

    #[test]
    fn test_to_rpc_request_accepts_url_safe_alphabet() {
        let request = body("c2ln", "ZGln", "-_8=").to_rpc_request().unwrap();
        assert_eq!(request.certificate, vec![0xfb, 0xff]);

        let request = body("c2ln", "ZGln", "-_8").to_rpc_request().unwrap();
        assert_eq!(request.certificate, vec![0xfb, 0xff]);
    }

    #[test]
    fn test_to_rpc_request_names_bad_field() {
        let err = body("c2ln", "not base64!", "Y2VydA==")
            .to_rpc_request()
            .unwrap_err();

        assert!(matches!(err, VerifyError::InvalidBase64 { field: "digest", .. }));
        assert_eq!(err.to_string(), "invalid base64 in `digest`");
    }
}
