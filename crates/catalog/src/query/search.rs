//! Free-text search over designated fields.
//!
//! Second stage of the query pipeline, after the category filter and
//! before pagination. Keeps entities whose name/title (in any locale)
//! contains the normalized term as a substring. Order-preserving: no
//! relevance scoring, matches keep their incoming order.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::models::CatalogEntity;

/// Fields consulted by the search ranker, in the default-locale object and
/// every locale override.
const SEARCHABLE_FIELDS: &[&str] = &["name", "title"];

/// Normalize text for accent-insensitive matching.
///
/// Trims, case-folds, and strips diacritics via NFD decomposition so that
/// "Hà Nội" matches "ha noi". The Vietnamese đ/Đ is a standalone letter
/// NFD leaves alone, so it is folded to "d" explicitly.
pub fn normalize(text: &str) -> String {
    text.trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| match c {
            'đ' | 'Đ' => 'd',
            other => other,
        })
        .flat_map(char::to_lowercase)
        .collect()
}

/// Narrow a collection by a free-text term.
///
/// An empty or whitespace-only term is the identity.
pub fn search(entities: Vec<CatalogEntity>, term: &str) -> Vec<CatalogEntity> {
    let needle = normalize(term);
    if needle.is_empty() {
        return entities;
    }

    entities
        .into_iter()
        .filter(|entity| matches(entity, &needle))
        .collect()
}

/// Check whether any searchable field contains the normalized needle.
fn matches(entity: &CatalogEntity, needle: &str) -> bool {
    let default_values = SEARCHABLE_FIELDS
        .iter()
        .filter_map(|name| entity.field(name));

    let translated_values = entity.translations.values().flat_map(|overrides| {
        SEARCHABLE_FIELDS
            .iter()
            .filter_map(|name| overrides.get(*name))
    });

    default_values
        .chain(translated_values)
        .filter_map(|value| value.as_str())
        .any(|text| normalize(text).contains(needle))
}
