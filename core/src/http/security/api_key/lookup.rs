//! API key lookup trait and adapters.

use actix_web::Error;

/// Resolves the raw value of the API key header to an identity.
///
/// The lookup owns all knowledge of where keys live (database, cache,
/// external service). It is called once per gated request, also when the
/// header is missing, in which case it receives `None` and should report
/// "not found".
///
/// Plain closures implement this trait:
///
/// ```ignore
/// let lookup = |key: Option<&str>| key.and_then(|k| accounts.find_by_api_key(k));
/// ```
///
/// Implement it directly for a lookup backed by a shared store:
///
/// ```ignore
/// use actix_api_key_core::http::security::api_key::ApiKeyLookup;
///
/// struct DatabaseLookup {
///     pool: DbPool,
/// }
///
/// impl ApiKeyLookup for DatabaseLookup {
///     type Identity = Account;
///
///     fn lookup(&self, api_key: Option<&str>) -> Result<Option<Account>, actix_web::Error> {
///         let Some(key) = api_key else { return Ok(None) };
///         self.pool
///             .query_one("SELECT * FROM accounts WHERE api_key = ?", &[key])
///             .map_err(actix_web::error::ErrorInternalServerError)
///     }
/// }
/// ```
pub trait ApiKeyLookup: Send + Sync {
    /// Identity type the key resolves to.
    type Identity;

    /// Looks up the identity for `api_key`.
    ///
    /// `Ok(None)` means the key is unknown and the request is rejected with
    /// `401`. An `Err` is returned to Actix unchanged.
    fn lookup(&self, api_key: Option<&str>) -> Result<Option<Self::Identity>, Error>;
}

impl<F, I> ApiKeyLookup for F
where
    F: Fn(Option<&str>) -> Option<I> + Send + Sync,
{
    type Identity = I;

    fn lookup(&self, api_key: Option<&str>) -> Result<Option<I>, Error> {
        Ok(self(api_key))
    }
}

/// Adapter for closures that can fail.
///
/// # Example
///
/// ```ignore
/// let lookup = TryLookup::new(|key: Option<&str>| -> Result<Option<Account>, MyDbError> {
///     match key {
///         Some(key) => store.find(key),
///         None => Ok(None),
///     }
/// });
/// ```
pub struct TryLookup<F>(F);

impl<F> TryLookup<F> {
    /// Wraps a fallible lookup closure.
    pub fn new(lookup: F) -> Self {
        TryLookup(lookup)
    }
}

impl<F, I, E> ApiKeyLookup for TryLookup<F>
where
    F: Fn(Option<&str>) -> Result<Option<I>, E> + Send + Sync,
    E: Into<Error>,
{
    type Identity = I;

    fn lookup(&self, api_key: Option<&str>) -> Result<Option<I>, Error> {
        (self.0)(api_key).map_err(Into::into)
    }
}
