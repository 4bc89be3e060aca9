//! Catalog resource types.

use serde::{Deserialize, Serialize};

/// The three catalog surfaces of the platform.
///
/// Each resource type carries its own page size and category vocabulary
/// (see [`crate::config::CatalogConfig`]); the query pipeline is otherwise
/// identical across them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    /// Destinations (countries, cities, regions).
    Place,
    /// Tour packages, regional and international.
    Tour,
    /// Travel guide articles with rich content bodies.
    Guide,
}

impl ResourceType {
    /// Machine name, used in logs and storage keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Place => "place",
            ResourceType::Tour => "tour",
            ResourceType::Guide => "guide",
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
