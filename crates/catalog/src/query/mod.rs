//! Catalog query pipeline.
//!
//! [`CatalogEngine`] composes the stages in a fixed order: exclude
//! soft-deleted entities → category filter → free-text search → stable sort
//! by creation time descending → paginate → locale projection. The
//! ordering is load-bearing: filter and search run before pagination so
//! `total_pages` reflects the narrowed set, and the sort runs before
//! pagination so page boundaries are deterministic between requests.
//!
//! The engine is pure over the entity snapshot it is handed: no I/O, no
//! state across calls, safe to run concurrently without locking.

pub mod filter;
pub mod paginate;
pub mod project;
pub mod search;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::CatalogConfig;
use crate::content::AssetResolver;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{CatalogEntity, ResourceType};
use crate::query::filter::filter_by_category;
use crate::query::project::{EntityView, ProjectionProfile, Projector};

/// One catalog query, as received from the routing layer.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryRequest {
    /// Locale code from the recognized set.
    pub locale: String,

    /// Category code, or `None` for the unfiltered view.
    pub category: Option<String>,

    /// Raw search term; trimmed and normalized by the search stage.
    pub search: Option<String>,

    /// Page number, 1-based. Use [`QueryRequest::parse_page`] to build
    /// this from raw URL input.
    pub page: u32,
}

impl QueryRequest {
    /// An unfiltered first-page request for a locale.
    pub fn for_locale(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            category: None,
            search: None,
            page: 1,
        }
    }

    /// Parse a raw page-number string from a URL.
    ///
    /// Absent, non-numeric, or sub-1 input normalizes to page 1; the
    /// routing layer redirects to the canonical first-page URL rather than
    /// surfacing an error.
    pub fn parse_page(raw: Option<&str>) -> u32 {
        match raw {
            None => 1,
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(page) if page >= 1 => page,
                _ => 1,
            },
        }
    }
}

/// One page of projected results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Projected entities for the requested page, in order, each carrying
    /// its page-continuous display index.
    pub items: Vec<EntityView>,

    /// Page count of the filtered/searched set.
    pub total_pages: u32,

    /// The page that was served.
    pub current_page: u32,
}

/// The locale-aware catalog query engine.
///
/// Holds only injected configuration; every query runs against the entity
/// snapshot the caller fetched from storage.
#[derive(Debug, Clone)]
pub struct CatalogEngine {
    config: CatalogConfig,
    projector: Projector,
}

impl CatalogEngine {
    /// Create an engine from configuration.
    pub fn new(config: CatalogConfig) -> Self {
        let projector = Projector::new(
            config.default_locale.clone(),
            AssetResolver::new(config.assets_base_url.clone()),
        );
        Self { config, projector }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Validate a request before running it.
    ///
    /// Rejects unknown locales and, for fixed vocabularies, unknown
    /// category codes, so the router can redirect to the canonical
    /// unfiltered view instead of rendering an empty catalog. The query
    /// pipeline itself never needs this to hold: it fails closed on bad
    /// codes and serves empty pages past the end.
    pub fn validate_request(
        &self,
        resource: ResourceType,
        request: &QueryRequest,
    ) -> CatalogResult<()> {
        if !self.config.recognizes_locale(&request.locale) {
            return Err(CatalogError::UnknownLocale(request.locale.clone()));
        }

        if let Some(code) = request.category.as_deref().map(str::trim)
            && !code.is_empty()
            && !self.config.vocabulary(resource).recognizes(code)
        {
            return Err(CatalogError::UnknownCategory(code.to_string()));
        }

        Ok(())
    }

    /// Run one catalog query over an entity snapshot.
    pub fn query(
        &self,
        resource: ResourceType,
        entities: Vec<CatalogEntity>,
        request: &QueryRequest,
    ) -> QueryResult {
        let fetched = entities.len();
        let page_size = self.config.page_size(resource);
        let vocabulary = self.config.vocabulary(resource);

        // Soft-deleted entities are excluded on every path, regardless of
        // how recently the flag was set.
        let mut working: Vec<CatalogEntity> =
            entities.into_iter().filter(|e| !e.deleted).collect();

        working = filter_by_category(working, &vocabulary, request.category.as_deref());
        working = search::search(working, request.search.as_deref().unwrap_or(""));

        // Stable sort: equal timestamps keep their stored order, so page
        // boundaries cannot shift between identical requests.
        working.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let (page_items, total_pages) = paginate::paginate(working, request.page, page_size);
        if page_items.is_empty() && total_pages > 0 {
            warn!(
                resource = %resource,
                page = request.page,
                total_pages,
                "page past end of narrowed set"
            );
        }

        let items = page_items
            .iter()
            .enumerate()
            .map(|(offset, entity)| {
                let mut view =
                    self.projector
                        .project(entity, &request.locale, ProjectionProfile::List);
                view.order = Some(paginate::order_index(request.page, offset, page_size));
                view
            })
            .collect::<Vec<_>>();

        debug!(
            resource = %resource,
            locale = %request.locale,
            category = request.category.as_deref().unwrap_or(""),
            search = request.search.as_deref().unwrap_or(""),
            page = request.page,
            fetched,
            returned = items.len(),
            total_pages,
            "catalog query"
        );

        QueryResult {
            items,
            total_pages,
            current_page: request.page,
        }
    }

    /// Detail lookup by slug.
    ///
    /// Projects the first non-deleted entity with a matching slug using
    /// the detail profile (full content body, authorship, resolved
    /// assets). `None` maps to the routing layer's not-found response.
    pub fn find_by_slug(
        &self,
        entities: &[CatalogEntity],
        slug: &str,
        locale: &str,
    ) -> Option<EntityView> {
        entities
            .iter()
            .find(|e| !e.deleted && e.slug == slug)
            .map(|entity| self.projector.project(entity, locale, ProjectionProfile::Detail))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn parse_page_normalizes_bad_input_to_first_page() {
        assert_eq!(QueryRequest::parse_page(None), 1);
        assert_eq!(QueryRequest::parse_page(Some("abc")), 1);
        assert_eq!(QueryRequest::parse_page(Some("")), 1);
        assert_eq!(QueryRequest::parse_page(Some("0")), 1);
        assert_eq!(QueryRequest::parse_page(Some("-2")), 1);
        assert_eq!(QueryRequest::parse_page(Some("2.5")), 1);
    }

    #[test]
    fn parse_page_accepts_valid_numbers() {
        assert_eq!(QueryRequest::parse_page(Some("1")), 1);
        assert_eq!(QueryRequest::parse_page(Some(" 3 ")), 3);
        assert_eq!(QueryRequest::parse_page(Some("42")), 42);
    }

    #[test]
    fn for_locale_defaults() {
        let request = QueryRequest::for_locale("vi");
        assert_eq!(request.page, 1);
        assert!(request.category.is_none());
        assert!(request.search.is_none());
    }
}
