//! Identity values returned by an API key lookup.

use std::rc::Rc;
use std::sync::Arc;

/// Value a lookup resolves an API key to.
///
/// The gate never looks inside an identity. It only asks whether the value is
/// empty, so a lookup that returns `Some(String::new())` is treated the same
/// as one that returns `None`.
///
/// Most application types only need the default implementation:
///
/// ```ignore
/// use actix_api_key_core::http::security::api_key::Identity;
///
/// #[derive(Clone)]
/// struct Account {
///     id: u64,
/// }
///
/// impl Identity for Account {}
/// ```
pub trait Identity {
    /// Returns true if this value should count as "no identity".
    fn is_empty(&self) -> bool {
        false
    }
}

impl Identity for String {
    fn is_empty(&self) -> bool {
        String::is_empty(self)
    }
}

impl Identity for &'static str {
    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }
}

impl<T> Identity for Vec<T> {
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

impl<T: Identity> Identity for Option<T> {
    fn is_empty(&self) -> bool {
        self.as_ref().map_or(true, Identity::is_empty)
    }
}

impl<T: Identity + ?Sized> Identity for Box<T> {
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

impl<T: Identity + ?Sized> Identity for Rc<T> {
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

impl<T: Identity + ?Sized> Identity for Arc<T> {
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}
