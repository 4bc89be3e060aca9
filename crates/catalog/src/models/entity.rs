//! Catalog entity model.
//!
//! A `CatalogEntity` is the stored unit behind every catalog surface: a
//! Place, a Tour, or a Guide article. Content lives in a JSON `fields`
//! object in the default locale, with partial per-locale overrides layered
//! on top at projection time.

use std::collections::{BTreeSet, HashMap};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::content::ContentBlock;
use crate::models::Category;

/// A stored catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntity {
    /// Unique identifier (UUIDv7).
    pub id: Uuid,

    /// URL-safe unique identifier. Immutable after creation; external
    /// links reference it.
    pub slug: String,

    /// Default-locale content as a JSON object (name, title, description,
    /// region, continent, ...).
    pub fields: Value,

    /// Locale code → partial object of the same field names. A field
    /// absent here falls back to `fields` at projection time. Overrides
    /// never introduce field names absent from the default schema.
    #[serde(default)]
    pub translations: HashMap<String, Value>,

    /// Embedded joined category, when the resource has one.
    #[serde(default)]
    pub category: Option<Category>,

    /// Classification tags used by category predicates
    /// (e.g. "regional-tour", "international-tour", continent identifiers).
    #[serde(default)]
    pub tags: BTreeSet<String>,

    /// Rich content body (Guides). Asset paths inside are relative at
    /// rest; the projector resolves them.
    #[serde(default)]
    pub content: Option<Vec<ContentBlock>>,

    /// Thumbnail path, relative at rest.
    #[serde(default)]
    pub thumb: Option<String>,

    /// Authorship, shown only in detail views.
    #[serde(default)]
    pub author: Option<String>,

    /// Unix timestamp when created. Default sort key, descending.
    pub created_at: i64,

    /// Unix timestamp when last changed.
    pub updated_at: i64,

    /// Soft-delete flag. Authoritative at read time: a deleted entity is
    /// excluded from every query path.
    #[serde(default)]
    pub deleted: bool,
}

/// Input for creating a new catalog entity.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEntity {
    pub slug: String,
    pub fields: Value,
    pub translations: Option<HashMap<String, Value>>,
    pub category: Option<Category>,
    pub tags: Option<BTreeSet<String>>,
    pub content: Option<Vec<ContentBlock>>,
    pub thumb: Option<String>,
    pub author: Option<String>,
}

impl CatalogEntity {
    /// Look up a default-locale field value.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Look up a field value in a locale override, if present.
    pub fn translated_field(&self, locale: &str, name: &str) -> Option<&Value> {
        self.translations.get(locale).and_then(|t| t.get(name))
    }

    /// Check whether the entity carries a classification tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

/// Validate that locale overrides only override fields the default schema
/// already has.
pub(crate) fn validate_translations(
    fields: &Value,
    translations: &HashMap<String, Value>,
) -> Result<()> {
    let Some(defaults) = fields.as_object() else {
        anyhow::bail!("entity fields must be a JSON object");
    };

    for (locale, overrides) in translations {
        let Some(overrides) = overrides.as_object() else {
            anyhow::bail!("locale override '{locale}' must be a JSON object");
        };
        for name in overrides.keys() {
            if !defaults.contains_key(name) {
                anyhow::bail!(
                    "locale override '{locale}' introduces unknown field '{name}'"
                );
            }
        }
    }

    Ok(())
}
