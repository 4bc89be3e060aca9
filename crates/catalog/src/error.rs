//! Catalog engine error types.

use thiserror::Error;

/// Errors surfaced at the engine boundary.
///
/// The query pipeline itself is total: invalid pages yield empty result
/// pages and unknown category codes fail closed inside the filter. These
/// variants exist for the routing layer, which validates a request up
/// front so it can redirect to the canonical unfiltered/first-page view
/// instead of rendering an empty catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown category code '{0}'")]
    UnknownCategory(String),

    #[error("unknown locale '{0}'")]
    UnknownLocale(String),

    #[error("storage error")]
    Store(#[from] anyhow::Error),
}

/// Result type alias using CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;
