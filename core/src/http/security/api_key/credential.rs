//! Reading the API key from request headers.

use actix_web::http::header::{HeaderMap, HeaderName};

use crate::http::error::ConfigError;

/// Header carrying the API key unless configured otherwise.
pub const DEFAULT_HEADER_KEY: &str = "x-api-key";

/// Prefix of header names in CGI/Rack environment form (`HTTP_X_API_KEY`).
const CGI_HEADER_PREFIX: &str = "HTTP_";

/// Turns a configured header name into an Actix `HeaderName`.
///
/// Accepts a regular header name (`X-Api-Key`) or the environment form
/// (`HTTP_X_API_KEY`), which maps to `x-api-key`.
pub fn header_name(name: &str) -> Result<HeaderName, ConfigError> {
    let canonical = match name.strip_prefix(CGI_HEADER_PREFIX) {
        Some(rest) => rest.replace('_', "-"),
        None => name.to_string(),
    };

    HeaderName::from_bytes(canonical.as_bytes()).map_err(|_| ConfigError::InvalidHeaderName {
        name: name.to_string(),
    })
}

/// Returns the raw value of the key header, if any.
///
/// The value is returned as sent: no trimming or decoding. UTF-8 values are
/// passed through; only bytes that are not UTF-8 count as missing.
pub fn extract_api_key<'a>(headers: &'a HeaderMap, name: &HeaderName) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| std::str::from_utf8(value.as_bytes()).ok())
}
