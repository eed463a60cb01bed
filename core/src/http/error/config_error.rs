use derive_more::{Display, Error};

/// Errors raised while building an `ApiKeyGate`.
///
/// These point at a wiring mistake in the application and are reported at
/// startup. They are never turned into a `401`.
#[derive(Debug, Display, Error)]
pub enum ConfigError {
    /// No lookup was configured.
    #[display("Caller must implement a way to lookup an API key.")]
    MissingLookup,

    /// The key header name is not a valid HTTP header name.
    #[display("invalid API key header name {name:?}")]
    InvalidHeaderName { name: String },

    /// An include or exclude pattern failed to compile.
    #[display("invalid path pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}
