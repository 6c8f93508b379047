//! In-memory property metadata.

use indexmap::IndexMap;
use tracing::debug;

use rangefilter_core::config::entity::EntityConfig;
use rangefilter_core::traits::{PropertyResolver, RangeTarget};

/// Property metadata for one entity, declared up front.
///
/// Nested fields are listed with dot-notation (`relatedDummy.age`) and
/// every association they traverse is declared as a relation keyed by its
/// path from the root entity.
#[derive(Debug, Clone)]
pub struct EntityMetadata {
    name: String,
    fields: Vec<String>,
    relations: IndexMap<String, String>,
    enabled: Option<Vec<String>>,
}

impl EntityMetadata {
    /// Create metadata for an entity with no fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            relations: IndexMap::new(),
            enabled: None,
        }
    }

    /// Build from an entity definition and the configured property list.
    pub fn from_config(entity: &EntityConfig, enabled: Option<Vec<String>>) -> Self {
        let mut metadata = Self::new(&entity.name).with_enabled_properties(enabled);
        for field in &entity.fields {
            metadata = metadata.with_field(field);
        }
        for relation in &entity.relations {
            metadata = metadata.with_relation(&relation.path, &relation.target);
        }
        metadata
    }

    /// Declare a mapped field.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Declare the association at `path` pointing to entity `target`.
    pub fn with_relation(mut self, path: impl Into<String>, target: impl Into<String>) -> Self {
        self.relations.insert(path.into(), target.into());
        self
    }

    /// Restrict filtering to `properties`. `None` enables every non-nested
    /// mapped property; nested properties must always be listed.
    pub fn with_enabled_properties(mut self, properties: Option<Vec<String>>) -> Self {
        self.enabled = properties;
        self
    }
}

impl PropertyResolver for EntityMetadata {
    fn is_enabled(&self, property: &str) -> bool {
        match &self.enabled {
            Some(enabled) => enabled.iter().any(|p| p == property),
            None => !self.is_nested(property),
        }
    }

    fn is_mapped(&self, property: &str) -> bool {
        self.fields.iter().any(|f| f == property)
    }

    fn is_nested(&self, property: &str) -> bool {
        property
            .split_once('.')
            .is_some_and(|(head, _)| self.relations.contains_key(head))
    }

    fn resolve_nested_path(&self, property: &str, target: &mut dyn RangeTarget) -> String {
        let mut segments: Vec<&str> = property.split('.').collect();
        let field = segments.pop().unwrap_or(property);
        debug!(entity = %self.name, property = %property, "Resolving nested property");

        let mut alias = target.root_alias().to_string();
        let mut path = String::new();

        for association in segments {
            if !path.is_empty() {
                path.push('.');
            }
            path.push_str(association);

            let entity = self
                .relations
                .get(&path)
                .map(String::as_str)
                .unwrap_or(association);
            alias = target.join(&alias, association, entity);
        }

        target.field_path(&alias, field)
    }

    fn properties(&self) -> Vec<String> {
        match &self.enabled {
            Some(enabled) => enabled.clone(),
            None => self
                .fields
                .iter()
                .filter(|f| !self.is_nested(f))
                .cloned()
                .collect(),
        }
    }
}
