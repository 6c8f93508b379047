//! Property metadata and name conversion traits.

use super::target::RangeTarget;

/// Reports which properties of a resource can be filtered and how to
/// address them.
pub trait PropertyResolver: Send + Sync + std::fmt::Debug {
    /// Whether filtering on `property` is allowed.
    fn is_enabled(&self, property: &str) -> bool;

    /// Whether `property` maps to a stored field.
    fn is_mapped(&self, property: &str) -> bool;

    /// Whether `property` traverses one or more associations.
    fn is_nested(&self, property: &str) -> bool;

    /// Set up the joins `property` needs on `target` and return the path
    /// predicates should address.
    fn resolve_nested_path(&self, property: &str, target: &mut dyn RangeTarget) -> String;

    /// Properties the filter applies to when none are configured.
    fn properties(&self) -> Vec<String>;
}

/// Maps between external parameter names and internal property names.
pub trait NameConverter: Send + Sync + std::fmt::Debug {
    /// Internal property name to external name.
    fn normalize(&self, property: &str) -> String;

    /// External name to internal property name.
    fn denormalize(&self, name: &str) -> String;
}
