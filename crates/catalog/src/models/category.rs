//! Category model.
//!
//! Categories are joined into catalog entities before querying (the storage
//! collaborator owns the join). The projector applies the same field-level
//! locale fallback to the embedded sub-object as it does to the entity.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A classification category embedded in a catalog entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier (UUIDv7).
    pub id: Uuid,

    /// Stored identifier, URL-safe. Open category vocabularies (Places,
    /// Guides) filter against this value.
    pub slug: String,

    /// Display name in the default locale.
    pub name: String,

    /// Locale code → translated display name. Missing locales fall back
    /// to `name`.
    #[serde(default)]
    pub translations: HashMap<String, String>,
}

impl Category {
    /// Display name for a locale, falling back to the default-locale name.
    pub fn name_for(&self, locale: &str) -> &str {
        self.translations
            .get(locale)
            .map_or(self.name.as_str(), String::as_str)
    }
}
