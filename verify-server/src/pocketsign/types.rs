//! Protobuf messages of the `pocketsign.verify.v2` package.
//!
//! Hand-declared counterparts of `pocketsign/verify/v2/types.proto` and the
//! `VerificationService` definition in the `buf.build/pocketsign/apis` module
//! (the schema behind the `@buf/pocketsign_apis` generated clients). That module
//! is consumed unpinned and the tags below have not been diffed against a
//! recorded commit. Check them against the published schema before pointing at
//! a new environment: they are not validated at build time, and a mismatch
//! shows up as empty or garbled fields. `test_request_wire_tags` pins them.
//!
//! Only the messages and fields this service exchanges are declared. Fields
//! the service does not read are skipped by the decoder.

/// Protobuf package of the verification API.
pub const PACKAGE: &str = "pocketsign.verify.v2";

/// Request for `VerificationService.Verify`.
#[derive(Clone, PartialEq, prost::Message)]
pub struct VerifyRequest {
    /// DER-encoded signer certificate
    #[prost(bytes = "vec", tag = "1")]
    pub certificate: Vec<u8>,
    /// Digest of the signed document
    #[prost(bytes = "vec", tag = "2")]
    pub digest: Vec<u8>,
    /// Signature over the digest
    #[prost(bytes = "vec", tag = "3")]
    pub signature: Vec<u8>,
    #[prost(enumeration = "verification::HashAlgorithm", tag = "4")]
    pub hash_algorithm: i32,
    #[prost(enumeration = "certificate_status::CheckMethod", tag = "5")]
    pub check_method: i32,
    /// Ask the service to return `CertificateContent`
    #[prost(bool, tag = "6")]
    pub identify_user: bool,
}

/// Response of `VerificationService.Verify`.
#[derive(Clone, PartialEq, prost::Message)]
pub struct VerifyResponse {
    /// Present only when `identify_user` was requested
    #[prost(message, optional, tag = "3")]
    pub certificate_content: Option<CertificateContent>,
}

/// Identity data carried by the signer certificate.
#[derive(Clone, PartialEq, prost::Message)]
pub struct CertificateContent {
    #[prost(oneof = "certificate_content::TypeSpecificContent", tags = "1, 2")]
    pub type_specific_content: Option<certificate_content::TypeSpecificContent>,
}

impl prost::Name for CertificateContent {
    const NAME: &'static str = "CertificateContent";
    const PACKAGE: &'static str = PACKAGE;
}

pub mod certificate_content {
    /// Closed set of certificate content variants.
    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum TypeSpecificContent {
        #[prost(message, tag = "1")]
        JpkiCardDigitalSignatureContent(JpkiCardDigitalSignatureContent),
        #[prost(message, tag = "2")]
        JpkiCardUserAuthenticationContent(JpkiCardUserAuthenticationContent),
    }

    impl TypeSpecificContent {
        /// Fully qualified protobuf name of the carried message.
        pub fn type_name(&self) -> String {
            use prost::Name;

            match self {
                Self::JpkiCardDigitalSignatureContent(_) => {
                    JpkiCardDigitalSignatureContent::full_name()
                }
                Self::JpkiCardUserAuthenticationContent(_) => {
                    JpkiCardUserAuthenticationContent::full_name()
                }
            }
        }
    }

    /// Basic four attributes from a My Number card signing certificate.
    #[derive(Clone, PartialEq, prost::Message)]
    pub struct JpkiCardDigitalSignatureContent {
        #[prost(string, tag = "1")]
        pub common_name: String,
        #[prost(string, tag = "2")]
        pub date_of_birth: String,
        #[prost(string, tag = "3")]
        pub gender: String,
        #[prost(string, tag = "4")]
        pub address: String,
        #[prost(string, tag = "5")]
        pub substitute_character_of_common_name: String,
        #[prost(string, tag = "6")]
        pub substitute_character_of_address: String,
    }

    impl prost::Name for JpkiCardDigitalSignatureContent {
        const NAME: &'static str = "CertificateContent.JPKICardDigitalSignatureContent";
        const PACKAGE: &'static str = super::PACKAGE;
    }

    /// User authentication certificates carry no personal attributes.
    #[derive(Clone, PartialEq, prost::Message)]
    pub struct JpkiCardUserAuthenticationContent {}

    impl prost::Name for JpkiCardUserAuthenticationContent {
        const NAME: &'static str = "CertificateContent.JPKICardUserAuthenticationContent";
        const PACKAGE: &'static str = super::PACKAGE;
    }
}

pub mod verification {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
    #[repr(i32)]
    pub enum HashAlgorithm {
        Unspecified = 0,
        Sha256 = 1,
        Sha384 = 2,
        Sha512 = 3,
    }
}

pub mod certificate_status {
    /// Revocation checking strategy.
    ///
    /// CRL is the service default. OCSP gives same-day revocation freshness.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
    #[repr(i32)]
    pub enum CheckMethod {
        Unspecified = 0,
        Crl = 1,
        Ocsp = 2,
    }
}
