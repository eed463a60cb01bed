//! API Key gate building blocks.
//!
//! # Overview
//!
//! The gate admits a request when the key header carries a value that the
//! configured lookup resolves to a non-empty identity. Everything else about
//! keys (storage, issuance, rotation) belongs to the application and sits
//! behind [`ApiKeyLookup`].
//!
//! # Usage
//!
//! ```ignore
//! use actix_api_key_core::http::security::api_key::{ApiKeyConfig, ApiKeyContext};
//!
//! let gate = ApiKeyConfig::new()
//!     .lookup(|key: Option<&str>| key.and_then(|k| accounts.find_by_api_key(k)))
//!     .exclude("^/health$")
//!     .build()
//!     .expect("API key gate configuration");
//!
//! App::new()
//!     .wrap(gate)
//!     .service(my_api_endpoint)
//! ```
//!
//! A handler reads the identity back from the context:
//!
//! ```ignore
//! #[get("/api/me")]
//! async fn me(context: ApiKeyContext<Account>) -> impl Responder {
//!     let account = context.get("rack_api_key").expect("gated route");
//!     HttpResponse::Ok().body(account.name.clone())
//! }
//! ```
//!
//! # Components
//!
//! | Component | Type |
//! |-----------|------|
//! | Path filter | [`PathFilter`] |
//! | Credential extractor | [`extract_api_key`] |
//! | Lookup & decision | [`ApiKeyLookup`], [`is_valid_api_key`](crate::http::security::middleware::is_valid_api_key) |
//! | Configuration | [`ApiKeyConfig`] |

mod config;
mod context;
mod credential;
mod identity;
mod lookup;
mod path_filter;

pub use config::ApiKeyConfig;
pub use context::{ApiKeyContext, ApiKeyContextExt, DEFAULT_CONTEXT_KEY};
pub use credential::{extract_api_key, header_name, DEFAULT_HEADER_KEY};
pub use identity::Identity;
pub use lookup::{ApiKeyLookup, TryLookup};
pub use path_filter::PathFilter;
