//! Catalog data models.

pub mod category;
pub mod entity;
pub mod resource;

pub use category::Category;
pub use entity::{CatalogEntity, CreateEntity};
pub use resource::ResourceType;
