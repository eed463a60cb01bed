//! Request context holding resolved identities.
//!
//! The gate stores identities in the request extensions under a named
//! context key, so handlers (and further middleware) can read them back.

use std::collections::HashMap;
use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

/// Context key used when none is configured.
pub const DEFAULT_CONTEXT_KEY: &str = "rack_api_key";

/// Identities attached to a request, by context key.
///
/// A request passing a single gate carries exactly one entry. Gates with
/// different context keys can be stacked and each adds its own entry.
///
/// # Usage
/// ```ignore
/// use actix_api_key_core::http::security::api_key::ApiKeyContext;
///
/// async fn handler(context: ApiKeyContext<Account>) -> impl Responder {
///     match context.get("rack_api_key") {
///         Some(account) => format!("Hello, {}!", account.name),
///         None => "Hello, guest!".to_string(),
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiKeyContext<I> {
    entries: HashMap<String, I>,
}

impl<I> Default for ApiKeyContext<I> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<I> ApiKeyContext<I> {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the identity stored under `key`.
    pub fn get(&self, key: &str) -> Option<&I> {
        self.entries.get(key)
    }

    /// Returns true if an identity is stored under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of stored identities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no identity is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stores `identity` under `key`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, identity: I) -> Option<I> {
        self.entries.insert(key.into(), identity)
    }
}

impl<I: 'static> ApiKeyContext<I> {
    /// Attaches `identity` to the request under `key`.
    pub fn attach<R: HttpMessage>(req: &R, key: &str, identity: I) {
        let mut extensions = req.extensions_mut();
        match extensions.get_mut::<ApiKeyContext<I>>() {
            Some(context) => {
                context.insert(key, identity);
            }
            None => {
                let mut context = ApiKeyContext::new();
                context.insert(key, identity);
                extensions.insert(context);
            }
        }
    }
}

impl<I: Clone + 'static> FromRequest for ApiKeyContext<I> {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let context = req
            .extensions()
            .get::<ApiKeyContext<I>>()
            .cloned()
            .unwrap_or_default();
        ready(Ok(context))
    }
}

/// Extension trait for reading identities from a request.
pub trait ApiKeyContextExt {
    /// Returns a clone of the identity stored under `key`.
    fn api_key_identity<I: Clone + 'static>(&self, key: &str) -> Option<I>;

    /// Returns true if an identity of type `I` is stored under `key`.
    fn has_api_key_identity<I: 'static>(&self, key: &str) -> bool;
}

impl<T: HttpMessage> ApiKeyContextExt for T {
    fn api_key_identity<I: Clone + 'static>(&self, key: &str) -> Option<I> {
        self.extensions()
            .get::<ApiKeyContext<I>>()
            .and_then(|context| context.get(key).cloned())
    }

    fn has_api_key_identity<I: 'static>(&self, key: &str) -> bool {
        self.extensions()
            .get::<ApiKeyContext<I>>()
            .map_or(false, |context| context.contains_key(key))
    }
}
