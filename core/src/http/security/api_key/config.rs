//! API key gate configuration.

use std::fmt;
use std::sync::Arc;

use actix_web::Error;

use super::context::DEFAULT_CONTEXT_KEY;
use super::credential::{self, DEFAULT_HEADER_KEY};
use super::identity::Identity;
use super::lookup::{ApiKeyLookup, TryLookup};
use super::path_filter::PathFilter;
use crate::http::error::ConfigError;
use crate::http::security::middleware::ApiKeyGate;

/// Builder for an [`ApiKeyGate`].
///
/// Only the lookup is required. Everything else has a default:
///
/// | Option | Default |
/// |--------|---------|
/// | `header_key` | `x-api-key` |
/// | `context_key` | `rack_api_key` |
/// | `include` | none, every path is gated |
/// | `exclude` | none |
///
/// # Example
/// ```ignore
/// use actix_api_key_core::http::security::api_key::ApiKeyConfig;
///
/// let gate = ApiKeyConfig::new()
///     .header_key("X-Custom-Api-Header")
///     .context_key("account.api.key")
///     .include("^/api/")
///     .exclude("^/api/health$")
///     .lookup(|key: Option<&str>| key.and_then(find_account))
///     .build()?;
///
/// App::new().wrap(gate)
/// ```
pub struct ApiKeyConfig<I> {
    header_key: String,
    context_key: String,
    lookup: Option<Arc<dyn ApiKeyLookup<Identity = I>>>,
    include: Vec<String>,
    exclude: Vec<String>,
}

impl<I> Default for ApiKeyConfig<I> {
    fn default() -> Self {
        Self {
            header_key: DEFAULT_HEADER_KEY.to_string(),
            context_key: DEFAULT_CONTEXT_KEY.to_string(),
            lookup: None,
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

impl<I> ApiKeyConfig<I> {
    /// Creates a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the header carrying the API key.
    ///
    /// Accepts a header name (`X-Secret-Api-Key`) or its environment form
    /// (`HTTP_X_SECRET_API_KEY`).
    pub fn header_key(mut self, name: impl Into<String>) -> Self {
        self.header_key = name.into();
        self
    }

    /// Sets the context key the resolved identity is stored under.
    pub fn context_key(mut self, key: impl Into<String>) -> Self {
        self.context_key = key.into();
        self
    }

    /// Sets the lookup from a closure.
    ///
    /// The closure receives the raw header value, or `None` if the header is
    /// missing.
    pub fn lookup<F>(self, lookup: F) -> Self
    where
        F: Fn(Option<&str>) -> Option<I> + Send + Sync + 'static,
    {
        self.lookup_with(lookup)
    }

    /// Sets the lookup from a closure that can fail.
    ///
    /// Errors are returned to Actix as-is instead of producing a `401`.
    pub fn try_lookup<F, E>(self, lookup: F) -> Self
    where
        F: Fn(Option<&str>) -> Result<Option<I>, E> + Send + Sync + 'static,
        E: Into<Error> + 'static,
        I: 'static,
    {
        self.lookup_with(TryLookup::new(lookup))
    }

    /// Sets the lookup from any [`ApiKeyLookup`] implementation.
    pub fn lookup_with<L>(mut self, lookup: L) -> Self
    where
        L: ApiKeyLookup<Identity = I> + 'static,
    {
        self.lookup = Some(Arc::new(lookup));
        self
    }

    /// Sets a lookup shared with other parts of the application.
    pub fn shared_lookup(mut self, lookup: Arc<dyn ApiKeyLookup<Identity = I>>) -> Self {
        self.lookup = Some(lookup);
        self
    }

    /// Adds a pattern restricting the gate to matching paths.
    ///
    /// # Example
    /// ```ignore
    /// let config = ApiKeyConfig::new()
    ///     .include("^/api/")      // gate the API
    ///     .include("^/admin/");   // and the admin area
    /// ```
    pub fn include(mut self, pattern: impl Into<String>) -> Self {
        self.include.push(pattern.into());
        self
    }

    /// Adds a pattern exempting matching paths from the gate.
    ///
    /// Exclusion is checked first and wins over any include pattern.
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude.push(pattern.into());
        self
    }

    /// Replaces the include patterns.
    pub fn url_restriction<P>(mut self, patterns: P) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
    {
        self.include = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the exclude patterns.
    pub fn url_exclusion<P>(mut self, patterns: P) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
    {
        self.exclude = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the configured header key as given.
    pub fn get_header_key(&self) -> &str {
        &self.header_key
    }

    /// Returns the configured context key.
    pub fn get_context_key(&self) -> &str {
        &self.context_key
    }

    /// Returns true if a lookup has been set.
    pub fn has_lookup(&self) -> bool {
        self.lookup.is_some()
    }
}

impl<I: Identity + 'static> ApiKeyConfig<I> {
    /// Validates the configuration and builds the gate.
    ///
    /// # Errors
    /// - [`ConfigError::MissingLookup`] if no lookup was set
    /// - [`ConfigError::InvalidHeaderName`] if the header key is not a valid header name
    /// - [`ConfigError::InvalidPattern`] if an include or exclude pattern does not compile
    pub fn build(self) -> Result<ApiKeyGate<I>, ConfigError> {
        let lookup = self.lookup.ok_or(ConfigError::MissingLookup)?;
        let header_name = credential::header_name(&self.header_key)?;
        let path_filter = PathFilter::compile(&self.include, &self.exclude)?;

        Ok(ApiKeyGate::new(
            header_name,
            self.context_key,
            lookup,
            path_filter,
        ))
    }
}

impl<I> fmt::Debug for ApiKeyConfig<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyConfig")
            .field("header_key", &self.header_key)
            .field("context_key", &self.context_key)
            .field("lookup", &self.lookup.is_some())
            .field("include", &self.include)
            .field("exclude", &self.exclude)
            .finish()
    }
}
