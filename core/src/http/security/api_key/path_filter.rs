//! Path-based selection of the requests the gate applies to.

use regex::Regex;

use crate::http::error::ConfigError;

/// Decides from the request path whether the API key check applies.
///
/// Patterns are regular expressions matched anywhere in the path
/// (`Regex::is_match`, not anchored). Evaluation order:
///
/// 1. a path matching any exclude pattern is never gated;
/// 2. with include patterns configured, only matching paths are gated;
/// 3. with no include patterns, every path is gated.
///
/// For a request, exclude patterns see the path alone while include patterns
/// see the path with its query string (see [`PathFilter::is_request_gated`]).
/// A query string can therefore widen gating but never grant an exemption.
#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    include: Vec<Regex>,
    exclude: Vec<Regex>,
}

impl PathFilter {
    /// Creates a filter that gates every path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles include and exclude patterns, keeping their order.
    pub fn compile<I, E>(include: I, exclude: E) -> Result<Self, ConfigError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        Ok(PathFilter {
            include: compile_all(include)?,
            exclude: compile_all(exclude)?,
        })
    }

    /// Returns true if the API key check applies to `path`.
    pub fn is_gated(&self, path: &str) -> bool {
        self.is_request_gated(path, path)
    }

    /// Returns true if the API key check applies to a request.
    ///
    /// `path` is the request path without query string and is the only
    /// subject of the exclude patterns. `full_path` is the path plus query
    /// string and is matched by the include patterns.
    pub fn is_request_gated(&self, path: &str, full_path: &str) -> bool {
        if self.exclude.iter().any(|regex| regex.is_match(path)) {
            return false;
        }
        if !self.include.is_empty() {
            return self.include.iter().any(|regex| regex.is_match(full_path));
        }
        true
    }

    /// Returns the include patterns.
    pub fn get_include(&self) -> &[Regex] {
        &self.include
    }

    /// Returns the exclude patterns.
    pub fn get_exclude(&self) -> &[Regex] {
        &self.exclude
    }
}

fn compile_all<P>(patterns: P) -> Result<Vec<Regex>, ConfigError>
where
    P: IntoIterator,
    P::Item: AsRef<str>,
{
    patterns
        .into_iter()
        .map(|pattern| {
            let pattern = pattern.as_ref();
            Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
        })
        .collect()
}
