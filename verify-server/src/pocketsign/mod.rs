//! PocketSign Verify API client.
//!
//! This module provides:
//! - Protobuf message types of `pocketsign.verify.v2`
//! - A Connect unary client behind the [`VerificationApi`] trait
//!
//! ## Wire Flow
//!
//! ```text
//! VerifyRequest → POST <endpoint>/pocketsign.verify.v2.VerificationService/Verify → VerifyResponse
//! ```

pub mod client;
pub mod types;

pub use client::{ConnectClient, VerificationApi, VERIFY_PROCEDURE};
pub use types::{
    certificate_content, certificate_status, verification, CertificateContent, VerifyRequest,
    VerifyResponse,
};
