//! Security module providing the API key gate.
//!
//! # Module Structure
//!
//! - `api_key` - Configuration, lookup, path filter and request context
//! - `middleware` - The gate middleware (`ApiKeyGate`)

pub use api_key::{
    ApiKeyConfig, ApiKeyContext, ApiKeyContextExt, ApiKeyLookup, Identity, PathFilter, TryLookup,
};
pub use middleware::{is_valid_api_key, ApiKeyGate, ApiKeyMiddleware};

pub mod api_key;
pub mod middleware;
