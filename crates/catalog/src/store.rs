//! Storage collaborator boundary.
//!
//! The engine never fetches for itself: callers hand it a snapshot
//! obtained through [`EntityStore`]. `fetch_all` performs no filtering —
//! soft-delete exclusion is the engine's job, so the deleted flag stays
//! authoritative at read time rather than depending on storage-side query
//! shape.

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::models::entity::validate_translations;
use crate::models::{CatalogEntity, CreateEntity, ResourceType};

/// Boundary trait for the storage collaborator.
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Fetch every stored entity of a resource, deleted ones included.
    async fn fetch_all(&self, resource: ResourceType) -> Result<Vec<CatalogEntity>>;

    /// Create an entity. Fails if the slug collides with a non-deleted
    /// entity of the same resource.
    async fn insert(&self, resource: ResourceType, input: CreateEntity) -> Result<CatalogEntity>;

    /// Replace an entity's default fields and locale overrides.
    ///
    /// Returns the updated entity, or `None` when the id is unknown.
    async fn update_fields(
        &self,
        resource: ResourceType,
        id: Uuid,
        fields: Value,
        translations: Option<HashMap<String, Value>>,
    ) -> Result<Option<CatalogEntity>>;

    /// Soft-delete an entity. Returns whether anything changed.
    async fn soft_delete(&self, resource: ResourceType, id: Uuid) -> Result<bool>;
}

/// In-memory entity store, for tests and embedded use.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entities: RwLock<HashMap<ResourceType, Vec<CatalogEntity>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn fetch_all(&self, resource: ResourceType) -> Result<Vec<CatalogEntity>> {
        let entities = self.entities.read();
        Ok(entities.get(&resource).cloned().unwrap_or_default())
    }

    async fn insert(&self, resource: ResourceType, input: CreateEntity) -> Result<CatalogEntity> {
        let slug = input.slug.trim().to_string();
        if slug.is_empty() {
            anyhow::bail!("entity slug must not be empty");
        }

        let translations = input.translations.unwrap_or_default();
        validate_translations(&input.fields, &translations)?;

        let mut entities = self.entities.write();
        let bucket = entities.entry(resource).or_default();

        // Slug uniqueness holds among non-deleted entities only; a deleted
        // entity releases its slug.
        if bucket.iter().any(|e| !e.deleted && e.slug == slug) {
            anyhow::bail!("slug '{slug}' already exists for resource '{resource}'");
        }

        let now = chrono::Utc::now().timestamp();
        let entity = CatalogEntity {
            id: Uuid::now_v7(),
            slug,
            fields: input.fields,
            translations,
            category: input.category,
            tags: input.tags.unwrap_or_default(),
            content: input.content,
            thumb: input.thumb,
            author: input.author,
            created_at: now,
            updated_at: now,
            deleted: false,
        };

        debug!(resource = %resource, slug = %entity.slug, "entity created");
        bucket.push(entity.clone());
        Ok(entity)
    }

    async fn update_fields(
        &self,
        resource: ResourceType,
        id: Uuid,
        fields: Value,
        translations: Option<HashMap<String, Value>>,
    ) -> Result<Option<CatalogEntity>> {
        if let Some(ref translations) = translations {
            validate_translations(&fields, translations)?;
        }

        let mut entities = self.entities.write();
        let Some(entity) = entities
            .get_mut(&resource)
            .and_then(|bucket| bucket.iter_mut().find(|e| e.id == id))
        else {
            return Ok(None);
        };

        entity.fields = fields;
        if let Some(translations) = translations {
            entity.translations = translations;
        }
        entity.updated_at = chrono::Utc::now().timestamp();

        debug!(resource = %resource, id = %id, "entity fields updated");
        Ok(Some(entity.clone()))
    }

    async fn soft_delete(&self, resource: ResourceType, id: Uuid) -> Result<bool> {
        let mut entities = self.entities.write();
        let Some(entity) = entities
            .get_mut(&resource)
            .and_then(|bucket| bucket.iter_mut().find(|e| e.id == id && !e.deleted))
        else {
            return Ok(false);
        };

        entity.deleted = true;
        entity.updated_at = chrono::Utc::now().timestamp();

        debug!(resource = %resource, id = %id, "entity soft-deleted");
        Ok(true)
    }
}
