//! Error types.
//!
//! - `AuthError` - request-time rejection, rendered as a `401` response
//! - `ConfigError` - gate construction failures

mod auth_error;
mod config_error;

pub use auth_error::{AuthError, UNAUTHORIZED_MESSAGE};
pub use config_error::ConfigError;
