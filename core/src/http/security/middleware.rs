//! API key gate middleware for Actix Web.
//!
//! For every request the gate:
//!
//! 1. checks the path against the include/exclude patterns, and passes
//!    ungated requests straight through;
//! 2. reads the key header;
//! 3. calls the lookup with the header value (also when it is missing);
//! 4. either stores the identity in [`ApiKeyContext`] and calls the next
//!    service, or answers with the fixed `401`.

use std::fmt;
use std::sync::Arc;

use actix_service::{Service, Transform};
use actix_web::body::EitherBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::header::HeaderName;
use actix_web::{Error, ResponseError};
use futures_util::future::{err, ok, LocalBoxFuture, Ready};
use log::{debug, trace};

use crate::http::error::AuthError;
use crate::http::security::api_key::{
    extract_api_key, ApiKeyConfig, ApiKeyContext, ApiKeyLookup, Identity, PathFilter,
};

/// Returns true if both the header value and the resolved identity are
/// present and non-empty.
pub fn is_valid_api_key<I: Identity>(api_key: Option<&str>, identity: Option<&I>) -> bool {
    let has_key = api_key.map_or(false, |key| !key.is_empty());
    let has_identity = identity.map_or(false, |identity| !Identity::is_empty(identity));
    has_key && has_identity
}

/// API key gate middleware factory.
///
/// Built with [`ApiKeyConfig`]. The gate is immutable and cheap to clone, so
/// one value can be shared by every worker.
///
/// # Example
/// ```ignore
/// let gate = ApiKeyGate::builder()
///     .lookup(|key: Option<&str>| key.and_then(|k| accounts.find(k)))
///     .build()?;
///
/// HttpServer::new(move || App::new().wrap(gate.clone()).service(api))
/// ```
pub struct ApiKeyGate<I> {
    inner: Arc<GateInner<I>>,
}

struct GateInner<I> {
    header_name: HeaderName,
    context_key: String,
    lookup: Arc<dyn ApiKeyLookup<Identity = I>>,
    path_filter: PathFilter,
}

impl<I> ApiKeyGate<I> {
    pub(crate) fn new(
        header_name: HeaderName,
        context_key: String,
        lookup: Arc<dyn ApiKeyLookup<Identity = I>>,
        path_filter: PathFilter,
    ) -> Self {
        ApiKeyGate {
            inner: Arc::new(GateInner {
                header_name,
                context_key,
                lookup,
                path_filter,
            }),
        }
    }

    /// Starts a new [`ApiKeyConfig`].
    pub fn builder() -> ApiKeyConfig<I> {
        ApiKeyConfig::new()
    }

    /// Returns the header the key is read from.
    pub fn header_name(&self) -> &HeaderName {
        &self.inner.header_name
    }

    /// Returns the context key identities are stored under.
    pub fn context_key(&self) -> &str {
        &self.inner.context_key
    }

    /// Returns the path filter.
    pub fn path_filter(&self) -> &PathFilter {
        &self.inner.path_filter
    }
}

impl<I> fmt::Debug for ApiKeyGate<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyGate")
            .field("header_name", &self.inner.header_name)
            .field("context_key", &self.inner.context_key)
            .field("path_filter", &self.inner.path_filter)
            .finish_non_exhaustive()
    }
}

impl<I> Clone for ApiKeyGate<I> {
    fn clone(&self) -> Self {
        ApiKeyGate {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, B, I> Transform<S, ServiceRequest> for ApiKeyGate<I>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    I: Identity + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = ApiKeyMiddleware<S, I>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(ApiKeyMiddleware {
            service,
            gate: Arc::clone(&self.inner),
        })
    }
}

/// API key gate middleware service.
pub struct ApiKeyMiddleware<S, I> {
    service: S,
    gate: Arc<GateInner<I>>,
}

impl<S, B, I> Service<ServiceRequest> for ApiKeyMiddleware<S, I>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    I: Identity + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let gate = &self.gate;

        if !gate.path_filter.is_request_gated(req.path(), full_path(&req)) {
            trace!("API key check skipped for {}", req.path());
            return self.forward(req);
        }

        // The header borrow ends here, before `req` is moved on.
        let resolved = {
            let api_key = extract_api_key(req.headers(), &gate.header_name);
            gate.lookup
                .lookup(api_key)
                .map(|found| found.filter(|identity| is_valid_api_key(api_key, Some(identity))))
        };

        match resolved {
            Ok(Some(identity)) => {
                ApiKeyContext::attach(&req, &gate.context_key, identity);
                trace!(
                    "API key accepted for {} {}, identity stored under {:?}",
                    req.method(),
                    req.path(),
                    gate.context_key
                );
                self.forward(req)
            }
            Ok(None) => {
                debug!("API key rejected for {} {}", req.method(), req.path());
                let response = AuthError::Unauthorized
                    .error_response()
                    .map_into_right_body();
                Box::pin(ok(req.into_response(response)))
            }
            Err(e) => {
                debug!("API key lookup failed for {} {}: {}", req.method(), req.path(), e);
                Box::pin(err(e))
            }
        }
    }
}

impl<S, B, I> ApiKeyMiddleware<S, I>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    fn forward(
        &self,
        req: ServiceRequest,
    ) -> LocalBoxFuture<'static, Result<ServiceResponse<EitherBody<B>>, Error>> {
        let fut = self.service.call(req);
        Box::pin(async move {
            let res = fut.await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// Path plus query string, as matched by the include patterns.
fn full_path(req: &ServiceRequest) -> &str {
    req.uri()
        .path_and_query()
        .map_or_else(|| req.path(), |path_and_query| path_and_query.as_str())
}
