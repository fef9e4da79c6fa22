//! Web server module.
//!
//! This module provides the HTTP surface of the gateway:
//! - `POST /verify` validates a signature verification request
//! - Forwards it to the PocketSign Verify API
//! - Returns the signer's identity attributes as JSON
//!
//! `GET /health` answers liveness probes.

pub mod handlers;

pub use handlers::{health, router, verify, AppState, HealthResponse};
