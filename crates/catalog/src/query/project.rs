//! Locale projection.
//!
//! Final stage of the query pipeline: turns a stored bilingual entity into
//! the effective single-locale view. Field-level fallback, not
//! whole-record fallback: a partially translated entity renders with
//! mixed-but-complete content. Asset paths are resolved on the way out so
//! no relative path ever leaks into a response.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::content::{AssetResolver, ContentBlock, resolve_blocks};
use crate::models::CatalogEntity;

/// Which shape of view to produce.
///
/// List views strip heavy fields (rich content body, authorship) that only
/// the single-entity detail view needs, and carry a display order index.
/// The distinction is an explicit parameter of the projector's contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionProfile {
    /// Row in a paginated listing: no content body, no author.
    List,
    /// Full single-entity view: resolved content body and author included.
    Detail,
}

/// Effective single-locale view of an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: Uuid,
    pub slug: String,

    /// Merged content fields for the requested locale.
    pub fields: Value,

    /// Projected category, name already locale-resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryView>,

    /// Absolute thumbnail URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,

    /// 1-based, page-continuous display rank. List profile only;
    /// display-only, never a stored identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<usize>,

    /// Resolved rich content body. Detail profile only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<ContentBlock>>,

    /// Authorship. Detail profile only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    pub created_at: i64,
    pub updated_at: i64,
}

/// Projected category sub-object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryView {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
}

/// Projects entities into a single locale.
#[derive(Debug, Clone)]
pub struct Projector {
    default_locale: String,
    assets: AssetResolver,
}

impl Projector {
    /// Create a projector for a default locale and asset rule.
    pub fn new(default_locale: impl Into<String>, assets: AssetResolver) -> Self {
        Self {
            default_locale: default_locale.into(),
            assets,
        }
    }

    /// Produce the effective view of an entity for a locale.
    pub fn project(
        &self,
        entity: &CatalogEntity,
        locale: &str,
        profile: ProjectionProfile,
    ) -> EntityView {
        let fields = if locale == self.default_locale {
            entity.fields.clone()
        } else {
            merge_fields(&entity.fields, entity.translations.get(locale))
        };

        let category = entity.category.as_ref().map(|category| CategoryView {
            id: category.id,
            slug: category.slug.clone(),
            name: category.name_for(locale).to_string(),
        });

        let thumb = entity.thumb.as_deref().map(|path| self.assets.resolve(path));

        let (content, author) = match profile {
            ProjectionProfile::List => (None, None),
            ProjectionProfile::Detail => (
                entity
                    .content
                    .as_deref()
                    .map(|blocks| resolve_blocks(blocks, &self.assets)),
                entity.author.clone(),
            ),
        };

        EntityView {
            id: entity.id,
            slug: entity.slug.clone(),
            fields,
            category,
            thumb,
            order: None,
            content,
            author,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Overlay a partial locale object onto the default-locale fields.
///
/// Field-level: each overlay key replaces the matching default key; every
/// other default key passes through. A missing overlay is the identity.
pub fn merge_fields(defaults: &Value, overlay: Option<&Value>) -> Value {
    let Some(overlay) = overlay.and_then(Value::as_object) else {
        return defaults.clone();
    };

    let mut merged = match defaults.as_object() {
        Some(map) => map.clone(),
        None => return defaults.clone(),
    };
    for (name, value) in overlay {
        merged.insert(name.clone(), value.clone());
    }
    Value::Object(merged)
}
