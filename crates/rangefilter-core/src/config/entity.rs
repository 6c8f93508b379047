//! Entity definitions for the in-memory property resolver.

use serde::{Deserialize, Serialize};

/// A filterable entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityConfig {
    /// Entity (or collection) name.
    pub name: String,
    /// Mapped fields. Nested fields use dot-notation through relations,
    /// e.g. `relatedDummy.age`.
    #[serde(default)]
    pub fields: Vec<String>,
    /// Associations reachable from this entity.
    #[serde(default)]
    pub relations: Vec<RelationConfig>,
}

/// One association, addressed by its dotted path from the root entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationConfig {
    /// Association path, e.g. `relatedDummy` or `relatedDummy.owner`.
    pub path: String,
    /// Target entity (or collection) name.
    pub target: String,
}
