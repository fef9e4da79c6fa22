//! JPKI Verify - Signature verification gateway for My Number cards.
//!
//! This library provides the modules behind the `jpki-verify-web` binary:
//! - `web`: axum router and handlers
//! - `verify`: request decoding and certificate content dispatch
//! - `pocketsign`: Connect client for the PocketSign Verify API
//!
//! ## Architecture
//!
//! ```text
//! Client → POST /verify → verify pipeline → PocketSign Verify API
//! ```

pub mod config;
pub mod error;
pub mod pocketsign;
pub mod verify;
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use error::VerifyError;
pub use pocketsign::{ConnectClient, VerificationApi};
pub use verify::{IdentityAttributes, VerificationOutcome, VerifyResponseBody};
pub use web::{router, AppState};
