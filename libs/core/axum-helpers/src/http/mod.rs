//! HTTP middleware module.
//!
//! Cross-cutting HTTP-level middleware applied by the server bootstrap.

pub mod security;

pub use security::security_headers;
