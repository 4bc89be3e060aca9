//! Category predicate filter.
//!
//! First stage of the query pipeline: narrows a collection by a category
//! code before search and pagination. Pure and order-preserving.

use std::collections::BTreeMap;

use crate::models::CatalogEntity;

/// Per-resource category vocabulary.
///
/// Tours use a closed two-code set mapped to classification tags; Places
/// and Guides filter against the open set of stored category identifiers.
/// This split is explicit configuration (see
/// [`crate::config::CatalogConfig::vocabulary`]), not an inferred rule.
#[derive(Debug, Clone)]
pub enum CategoryVocabulary {
    /// Closed set: code → required classification tag.
    Fixed(BTreeMap<String, String>),

    /// Open set of stored category identifiers. Any non-empty code is a
    /// candidate; entities match on their tags or embedded category slug.
    Open,
}

impl CategoryVocabulary {
    /// Check whether a non-empty code belongs to this vocabulary.
    ///
    /// The empty code ("no filter") is always recognized by the caller and
    /// never reaches this check.
    pub fn recognizes(&self, code: &str) -> bool {
        match self {
            CategoryVocabulary::Fixed(codes) => codes.contains_key(code),
            CategoryVocabulary::Open => !code.is_empty(),
        }
    }
}

/// Narrow a collection by a category code.
///
/// An empty or absent code is the identity. An unrecognized code under a
/// fixed vocabulary fails closed: it matches nothing rather than silently
/// matching everything. Routing validates codes up front
/// ([`crate::query::CatalogEngine::validate_request`]), so hitting the
/// fail-closed arm means a validation gap upstream.
pub fn filter_by_category(
    entities: Vec<CatalogEntity>,
    vocabulary: &CategoryVocabulary,
    code: Option<&str>,
) -> Vec<CatalogEntity> {
    let code = code.unwrap_or("").trim();
    if code.is_empty() {
        return entities;
    }

    match vocabulary {
        CategoryVocabulary::Fixed(codes) => match codes.get(code) {
            Some(tag) => entities.into_iter().filter(|e| e.has_tag(tag)).collect(),
            None => Vec::new(),
        },
        CategoryVocabulary::Open => entities
            .into_iter()
            .filter(|e| {
                e.has_tag(code)
                    || e.category
                        .as_ref()
                        .is_some_and(|category| category.slug == code)
            })
            .collect(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::models::Category;
    use serde_json::json;
    use std::collections::{BTreeSet, HashMap};
    use uuid::Uuid;

    fn entity(slug: &str, tags: &[&str], category: Option<&str>) -> CatalogEntity {
        CatalogEntity {
            id: Uuid::now_v7(),
            slug: slug.to_string(),
            fields: json!({"name": slug}),
            translations: HashMap::new(),
            category: category.map(|c| Category {
                id: Uuid::now_v7(),
                slug: c.to_string(),
                name: c.to_string(),
                translations: HashMap::new(),
            }),
            tags: tags.iter().map(|t| t.to_string()).collect::<BTreeSet<_>>(),
            content: None,
            thumb: None,
            author: None,
            created_at: 0,
            updated_at: 0,
            deleted: false,
        }
    }

    fn tour_vocabulary() -> CategoryVocabulary {
        CategoryVocabulary::Fixed(BTreeMap::from([
            ("regional".to_string(), "regional-tour".to_string()),
            ("international".to_string(), "international-tour".to_string()),
        ]))
    }

    #[test]
    fn empty_code_is_identity() {
        let tours = vec![
            entity("sapa", &["regional-tour"], None),
            entity("paris", &["international-tour"], None),
        ];
        let filtered = filter_by_category(tours.clone(), &tour_vocabulary(), None);
        assert_eq!(filtered, tours);

        let filtered = filter_by_category(tours.clone(), &tour_vocabulary(), Some("  "));
        assert_eq!(filtered, tours);
    }

    #[test]
    fn fixed_vocabulary_matches_mapped_tag() {
        let tours = vec![
            entity("sapa", &["regional-tour"], None),
            entity("paris", &["international-tour"], None),
            entity("hue", &["regional-tour"], None),
        ];
        let filtered = filter_by_category(tours, &tour_vocabulary(), Some("regional"));
        let slugs: Vec<_> = filtered.iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(slugs, vec!["sapa", "hue"]);
    }

    #[test]
    fn unknown_fixed_code_fails_closed() {
        let tours = vec![entity("sapa", &["regional-tour"], None)];
        let filtered = filter_by_category(tours, &tour_vocabulary(), Some("weekend"));
        assert!(filtered.is_empty());
    }

    #[test]
    fn open_vocabulary_matches_tags_and_category_slug() {
        let places = vec![
            entity("ha-noi", &["mien-bac"], None),
            entity("hue", &["mien-trung"], None),
            entity("pho-co", &[], Some("mien-bac")),
        ];
        let filtered = filter_by_category(places, &CategoryVocabulary::Open, Some("mien-bac"));
        let slugs: Vec<_> = filtered.iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(slugs, vec!["ha-noi", "pho-co"]);
    }

    #[test]
    fn vocabulary_recognition() {
        assert!(tour_vocabulary().recognizes("regional"));
        assert!(!tour_vocabulary().recognizes("weekend"));
        assert!(CategoryVocabulary::Open.recognizes("anything"));
        assert!(!CategoryVocabulary::Open.recognizes(""));
    }
}
