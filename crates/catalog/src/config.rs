//! Engine configuration.
//!
//! Page sizes, recognized locales, the asset base URL, and the per-resource
//! category vocabularies are configuration, not engine logic. The routing
//! layer builds one `CatalogConfig` at startup and shares it across
//! requests.

use std::collections::BTreeMap;
use std::env;

use anyhow::{Context, Result};

use crate::models::ResourceType;
use crate::query::filter::CategoryVocabulary;

/// Default items per page, shared by all resources unless overridden.
const DEFAULT_PAGE_SIZE: usize = 10;

/// Catalog engine configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Primary locale; entities store their `fields` in it (default: "vi").
    pub default_locale: String,

    /// Recognized secondary locales (default: ["en"]).
    pub extra_locales: Vec<String>,

    /// Base URL for resolving relative asset paths (default: "/files/").
    pub assets_base_url: String,

    /// Items per page for Places (default: 10).
    pub place_page_size: usize,

    /// Items per page for Tours (default: 10).
    pub tour_page_size: usize,

    /// Items per page for Guides (default: 10).
    pub guide_page_size: usize,

    /// Fixed Tour category vocabulary: code → required classification tag.
    pub tour_categories: BTreeMap<String, String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_locale: "vi".to_string(),
            extra_locales: vec!["en".to_string()],
            assets_base_url: "/files/".to_string(),
            place_page_size: DEFAULT_PAGE_SIZE,
            tour_page_size: DEFAULT_PAGE_SIZE,
            guide_page_size: DEFAULT_PAGE_SIZE,
            tour_categories: default_tour_categories(),
        }
    }
}

/// The two stored Tour classifications.
fn default_tour_categories() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("regional".to_string(), "regional-tour".to_string()),
        ("international".to_string(), "international-tour".to_string()),
    ])
}

impl CatalogConfig {
    /// Load configuration from environment variables, falling back to the
    /// defaults above for anything unset.
    pub fn from_env() -> Result<Self> {
        let default_locale = env::var("CATALOG_DEFAULT_LOCALE").unwrap_or_else(|_| "vi".to_string());

        let extra_locales = env::var("CATALOG_EXTRA_LOCALES")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_else(|_| vec!["en".to_string()]);

        let assets_base_url =
            env::var("CATALOG_ASSETS_URL").unwrap_or_else(|_| "/files/".to_string());

        let place_page_size = page_size_from_env("CATALOG_PLACE_PAGE_SIZE")?;
        let tour_page_size = page_size_from_env("CATALOG_TOUR_PAGE_SIZE")?;
        let guide_page_size = page_size_from_env("CATALOG_GUIDE_PAGE_SIZE")?;

        Ok(Self {
            default_locale,
            extra_locales,
            assets_base_url,
            place_page_size,
            tour_page_size,
            guide_page_size,
            tour_categories: default_tour_categories(),
        })
    }

    /// Items per page for a resource.
    pub fn page_size(&self, resource: ResourceType) -> usize {
        match resource {
            ResourceType::Place => self.place_page_size,
            ResourceType::Tour => self.tour_page_size,
            ResourceType::Guide => self.guide_page_size,
        }
    }

    /// Category vocabulary for a resource.
    ///
    /// Tours recognize a fixed two-code set; Places and Guides filter
    /// against the open set of stored category identifiers.
    pub fn vocabulary(&self, resource: ResourceType) -> CategoryVocabulary {
        match resource {
            ResourceType::Tour => CategoryVocabulary::Fixed(self.tour_categories.clone()),
            ResourceType::Place | ResourceType::Guide => CategoryVocabulary::Open,
        }
    }

    /// Check whether a locale code is recognized.
    pub fn recognizes_locale(&self, locale: &str) -> bool {
        locale == self.default_locale || self.extra_locales.iter().any(|l| l == locale)
    }
}

/// Parse a positive page size from an environment variable.
fn page_size_from_env(var: &str) -> Result<usize> {
    let size: usize = env::var(var)
        .unwrap_or_else(|_| DEFAULT_PAGE_SIZE.to_string())
        .parse()
        .with_context(|| format!("{var} must be a positive integer"))?;
    if size == 0 {
        anyhow::bail!("{var} must be at least 1");
    }
    Ok(size)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.default_locale, "vi");
        assert_eq!(config.extra_locales, vec!["en".to_string()]);
        assert_eq!(config.page_size(ResourceType::Place), 10);
        assert_eq!(config.page_size(ResourceType::Tour), 10);
        assert_eq!(config.page_size(ResourceType::Guide), 10);
    }

    #[test]
    fn locale_recognition() {
        let config = CatalogConfig::default();
        assert!(config.recognizes_locale("vi"));
        assert!(config.recognizes_locale("en"));
        assert!(!config.recognizes_locale("fr"));
        assert!(!config.recognizes_locale(""));
    }

    #[test]
    fn tour_vocabulary_is_fixed() {
        let config = CatalogConfig::default();
        let vocab = config.vocabulary(ResourceType::Tour);
        assert!(vocab.recognizes("regional"));
        assert!(vocab.recognizes("international"));
        assert!(!vocab.recognizes("weekend"));
    }

    #[test]
    fn open_vocabulary_for_places_and_guides() {
        let config = CatalogConfig::default();
        assert!(config.vocabulary(ResourceType::Place).recognizes("chau-a"));
        assert!(config.vocabulary(ResourceType::Guide).recognizes("am-thuc"));
    }
}
