//! Error kinds of the verification pipeline.
//!
//! The `Display` text of each kind is what callers see after `Error: `.
//! Low-level detail stays in the `source` chain and goes to the logs.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VerifyError {
    /// A request field was not valid base64.
    #[error("invalid base64 in `{field}`")]
    InvalidBase64 {
        field: &'static str,
        #[source]
        source: base64::DecodeError,
    },

    /// The verification service could not be reached or the exchange broke off.
    #[error("verification service request failed")]
    Transport(#[source] reqwest::Error),

    /// The verification service answered with a Connect error.
    #[error("[{code}] {message}")]
    Rpc { code: String, message: String },

    /// The success body was not a valid `VerifyResponse`.
    #[error("verification service returned a malformed response")]
    Decode(#[source] prost::DecodeError),
}

impl VerifyError {
    /// Short, stable identifier for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            VerifyError::InvalidBase64 { .. } => "invalid_base64",
            VerifyError::Transport(_) => "transport",
            VerifyError::Rpc { .. } => "rpc",
            VerifyError::Decode(_) => "decode",
        }
    }
}
