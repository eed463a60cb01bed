//! # Actix API Key
//!
//! API key gate middleware for Actix Web.
//!
//! The gate reads an API key from a request header, resolves it with a
//! caller-supplied lookup and either admits the request (attaching the
//! resolved identity to the request context) or answers `401 Unauthorized`.
//!
//! ## Modules
//!
//! - [`http::security`] - Gate configuration, lookup and middleware
//! - [`http::error`] - Error types

pub mod http;
