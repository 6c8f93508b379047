//! Incoming range filter parameters.
//!
//! Clients send `range[<property>][<operator>]=<value>`. The legacy shape
//! `range[<property>]=<value>` is still accepted and kept as a raw scalar.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AppError;

/// Operator token to raw value, in the order the client sent them.
pub type OperatorMap = IndexMap<String, String>;

/// The value supplied for one property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RangeParam {
    /// `range[prop][op]=value` pairs.
    Operators(OperatorMap),
    /// Deprecated `range[prop]=value`.
    Value(String),
}

/// All range parameters of one request, keyed by external property name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterRequest {
    properties: IndexMap<String, RangeParam>,
}

impl FilterRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a raw URL query string, keeping only `<parameter_name>[...]` keys.
    pub fn from_query(query: &str, parameter_name: &str) -> Result<Self, AppError> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)?;
        Ok(Self::from_pairs(pairs, parameter_name))
    }

    /// Build a request from already-decoded key/value pairs.
    ///
    /// Keys that do not match `<parameter_name>[<property>]` or
    /// `<parameter_name>[<property>][<operator>]` are ignored. A later
    /// pair for the same key overwrites the earlier value.
    pub fn from_pairs<I, K, V>(pairs: I, parameter_name: &str) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut request = Self::new();

        for (key, value) in pairs {
            let key = key.as_ref();
            let Some(segments) = bracket_segments(key, parameter_name) else {
                continue;
            };

            match segments.as_slice() {
                [property] => request.set_value(property, value.into()),
                [property, operator] => request.set_operator(property, operator, value.into()),
                _ => debug!(key = %key, "Ignoring range parameter with unexpected nesting"),
            }
        }

        request
    }

    /// Set an operator value for a property.
    pub fn set_operator(&mut self, property: &str, operator: &str, value: impl Into<String>) {
        let entry = self
            .properties
            .entry(property.to_string())
            .or_insert_with(|| RangeParam::Operators(OperatorMap::new()));

        if let RangeParam::Value(_) = entry {
            *entry = RangeParam::Operators(OperatorMap::new());
        }

        if let RangeParam::Operators(map) = entry {
            map.insert(operator.to_string(), value.into());
        }
    }

    /// Set a deprecated scalar value for a property.
    pub fn set_value(&mut self, property: &str, value: impl Into<String>) {
        self.properties
            .insert(property.to_string(), RangeParam::Value(value.into()));
    }

    /// Get the parameter supplied for a property.
    pub fn get(&self, property: &str) -> Option<&RangeParam> {
        self.properties.get(property)
    }

    /// Iterate over properties in request order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RangeParam)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether no range parameter was supplied.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Split `name[a][b]` into `["a", "b"]` when `name` matches.
fn bracket_segments<'a>(key: &'a str, parameter_name: &str) -> Option<Vec<&'a str>> {
    let mut rest = key.strip_prefix(parameter_name)?;
    let mut segments = Vec::new();

    while !rest.is_empty() {
        let inner = rest.strip_prefix('[')?;
        let end = inner.find(']')?;
        let segment = &inner[..end];
        if segment.is_empty() {
            return None;
        }
        segments.push(segment);
        rest = &inner[end + 1..];
    }

    (!segments.is_empty()).then_some(segments)
}
