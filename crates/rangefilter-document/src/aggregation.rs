//! Aggregation pipeline target.

use serde_json::{Map, Value, json};
use tracing::debug;

use rangefilter_core::traits::RangeTarget;
use rangefilter_core::types::Predicate;

/// Accumulates aggregation stages for one collection.
///
/// Every predicate becomes its own `$match` stage; nested properties add a
/// `$lookup` and `$unwind` pair the first time an association is used.
#[derive(Debug, Clone)]
pub struct AggregationBuilder {
    collection: String,
    stages: Vec<Value>,
    lookups: Vec<String>,
}

impl AggregationBuilder {
    /// Start a pipeline over `collection`.
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            stages: Vec::new(),
            lookups: Vec::new(),
        }
    }

    /// The root collection name.
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Stages in pipeline order.
    pub fn stages(&self) -> &[Value] {
        &self.stages
    }

    /// Only the `$match` stages.
    pub fn match_stages(&self) -> Vec<&Value> {
        self.stages
            .iter()
            .filter(|stage| stage.get("$match").is_some())
            .collect()
    }

    /// The pipeline as a JSON array.
    pub fn pipeline(&self) -> Value {
        Value::Array(self.stages.clone())
    }
}

/// The `$match` condition document for one predicate.
fn condition(predicate: Predicate) -> Value {
    match predicate {
        Predicate::Equals { value } => value.into(),
        Predicate::GreaterThan { value } => json!({ "$gt": Value::from(value) }),
        Predicate::GreaterThanOrEqual { value } => json!({ "$gte": Value::from(value) }),
        Predicate::LessThan { value } => json!({ "$lt": Value::from(value) }),
        Predicate::LessThanOrEqual { value } => json!({ "$lte": Value::from(value) }),
        Predicate::Between { low, high } => {
            json!({ "$gte": Value::from(low), "$lte": Value::from(high) })
        }
    }
}

impl RangeTarget for AggregationBuilder {
    fn root_alias(&self) -> &str {
        ""
    }

    fn join(&mut self, parent_alias: &str, association: &str, target_entity: &str) -> String {
        let local_field = self.field_path(parent_alias, association);
        let alias = format!("{local_field}_lkup");

        if self.lookups.contains(&alias) {
            return alias;
        }

        debug!(from = %target_entity, local_field = %local_field, alias = %alias, "Adding lookup");

        self.stages.push(json!({
            "$lookup": {
                "from": target_entity,
                "localField": local_field,
                "foreignField": "_id",
                "as": alias,
            }
        }));
        self.stages.push(json!({ "$unwind": format!("${alias}") }));
        self.lookups.push(alias.clone());
        alias
    }

    fn add_predicate(&mut self, field: &str, match_field: &str, predicate: Predicate) {
        let mut matched = Map::new();
        matched.insert(match_field.to_string(), condition(predicate));

        debug!(field = %field, match_field = %match_field, predicate = %predicate, "Adding $match stage");
        self.stages.push(json!({ "$match": Value::Object(matched) }));
    }
}
