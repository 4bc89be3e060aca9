//! Viaggio catalog query engine.
//!
//! The shared query pipeline behind the platform's three catalog surfaces
//! (Places, Tours, Guides): bilingual entities filtered by category
//! predicates, narrowed by diacritics-insensitive search, paginated
//! deterministically, and projected into a locale-specific shape with
//! embedded asset references resolved to absolute URLs.
//!
//! The engine is a pure computation over an in-memory snapshot; fetching
//! and mutating entities belongs to the [`store::EntityStore`]
//! collaborator, and HTTP concerns stay in the routing layer.

pub mod config;
pub mod content;
pub mod error;
pub mod models;
pub mod query;
pub mod store;

pub use config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};
pub use query::{CatalogEngine, QueryRequest, QueryResult};
