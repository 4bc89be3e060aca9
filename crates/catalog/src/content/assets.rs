//! Asset URL resolution.
//!
//! Asset references are stored as relative paths; responses must carry
//! absolute URLs. The rewrite is a single deterministic rule (configured
//! base URL + relative path) and is idempotent: paths that are already
//! absolute pass through unchanged, so re-resolving a resolved view never
//! double-prefixes.

use url::Url;

/// Rewrites relative asset paths to absolute resource URLs.
///
/// The base URL is injected configuration (see
/// [`crate::config::CatalogConfig::assets_base_url`]), not a hardcoded
/// constant.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    base_url: String,
}

impl AssetResolver {
    /// Create a resolver. The base URL is normalized to end with `/`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { base_url }
    }

    /// The normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a stored asset path to an absolute URL.
    ///
    /// Already-absolute paths (scheme-qualified, or already carrying this
    /// resolver's base) are returned unchanged.
    pub fn resolve(&self, path: &str) -> String {
        if self.is_resolved(path) {
            return path.to_string();
        }
        let relative = path.trim_start_matches('/');
        format!("{}{relative}", self.base_url)
    }

    /// Check whether a path is already an absolute resource URL.
    fn is_resolved(&self, path: &str) -> bool {
        path.starts_with(&self.base_url) || Url::parse(path).is_ok()
    }
}
