//! Query construction target trait.

use crate::types::Predicate;

/// A mutable query under construction that range predicates are emitted into.
///
/// Implemented by the SQL query builder and the aggregation builder. The
/// builder that owns a target is exclusively borrowed for the duration of
/// one filter application.
pub trait RangeTarget {
    /// Alias of the root entity (`""` when paths are unqualified).
    fn root_alias(&self) -> &str;

    /// Address `field` relative to `alias`.
    fn field_path(&self, alias: &str, field: &str) -> String {
        if alias.is_empty() {
            field.to_string()
        } else {
            format!("{alias}.{field}")
        }
    }

    /// Join `association` of the entity aliased `parent_alias`, whose target
    /// entity is `target_entity`. Returns the alias of the joined entity.
    fn join(&mut self, parent_alias: &str, association: &str, target_entity: &str) -> String;

    /// Append `predicate` on `match_field`. `field` is the logical property
    /// name used for parameter naming.
    fn add_predicate(&mut self, field: &str, match_field: &str, predicate: Predicate);
}
