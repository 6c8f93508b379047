//! Request-level range filter.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, warn};

use rangefilter_core::config::filter::FilterConfig;
use rangefilter_core::result::AppResult;
use rangefilter_core::traits::{NameConverter, PropertyResolver, RangeTarget};
use rangefilter_core::types::{FilterDescription, FilterRequest, RangeOperator, RangeParam};

use crate::builder::apply_range;
use crate::naming::{self, IdentityNameConverter};
use crate::parse;

/// What applying a filter request did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterOutcome {
    /// Predicates added to the target.
    pub predicates: usize,
    /// Properties dropped before any value was parsed.
    pub skipped_properties: usize,
    /// Whether any property used the deprecated `range[prop]=value` shape.
    pub deprecated_syntax: bool,
}

/// Filters a collection by numeric ranges.
///
/// Resolves each requested property through the name converter and the
/// property resolver, then hands its operators to [`apply_range`].
#[derive(Debug, Clone)]
pub struct RangeFilter {
    parameter_name: String,
    resolver: Arc<dyn PropertyResolver>,
    name_converter: Arc<dyn NameConverter>,
}

impl RangeFilter {
    /// Create a filter reading `range[...]` parameters.
    pub fn new(resolver: Arc<dyn PropertyResolver>) -> Self {
        Self {
            parameter_name: FilterConfig::default().parameter_name,
            resolver,
            name_converter: Arc::new(IdentityNameConverter),
        }
    }

    /// Create a filter from configuration.
    pub fn from_config(config: &FilterConfig, resolver: Arc<dyn PropertyResolver>) -> Self {
        Self::new(resolver)
            .with_parameter_name(&config.parameter_name)
            .with_name_converter(naming::from_kind(config.name_converter))
    }

    /// Read parameters under `name` instead of `range`.
    pub fn with_parameter_name(mut self, name: impl Into<String>) -> Self {
        self.parameter_name = name.into();
        self
    }

    /// Convert incoming parameter names with `converter`.
    pub fn with_name_converter(mut self, converter: Arc<dyn NameConverter>) -> Self {
        self.name_converter = converter;
        self
    }

    /// The query parameter prefix.
    pub fn parameter_name(&self) -> &str {
        &self.parameter_name
    }

    /// Decode `query` and apply it to `target`.
    pub fn apply_query(&self, query: &str, target: &mut dyn RangeTarget) -> AppResult<FilterOutcome> {
        let request = FilterRequest::from_query(query, &self.parameter_name)?;
        Ok(self.apply(&request, target))
    }

    /// Apply every property of `request` to `target`.
    pub fn apply(&self, request: &FilterRequest, target: &mut dyn RangeTarget) -> FilterOutcome {
        let mut outcome = FilterOutcome::default();

        for (name, param) in request.iter() {
            let property = self.name_converter.denormalize(name);
            self.filter_property(&property, param, target, &mut outcome);
        }

        debug!(
            predicates = outcome.predicates,
            skipped = outcome.skipped_properties,
            deprecated = outcome.deprecated_syntax,
            "Range filter applied"
        );
        outcome
    }

    fn filter_property(
        &self,
        property: &str,
        param: &RangeParam,
        target: &mut dyn RangeTarget,
        outcome: &mut FilterOutcome,
    ) {
        if !self.resolver.is_enabled(property) || !self.resolver.is_mapped(property) {
            debug!(property = %property, "Property is not filterable, skipping");
            outcome.skipped_properties += 1;
            return;
        }

        match param {
            RangeParam::Operators(operators) => {
                if !parse::has_range_operator(operators) {
                    let tokens: Vec<_> = RangeOperator::ALL.iter().map(|op| op.as_str()).collect();
                    warn!(
                        target: "rangefilter",
                        "Invalid filter ignored: At least one valid operator (\"{}\") is required for \"{}\" property",
                        tokens.join("\", \""),
                        property
                    );
                    outcome.skipped_properties += 1;
                    return;
                }

                let match_field = self.match_field(property, target);
                outcome.predicates += apply_range(property, &match_field, operators, target);
            }
            RangeParam::Value(raw) => {
                outcome.deprecated_syntax = true;
                warn!(
                    target: "rangefilter",
                    property = %property,
                    "Deprecated range syntax \"{}[{}]=<value>\", use \"{}[{}][<operator>]=<value>\"",
                    self.parameter_name, property, self.parameter_name, property
                );

                let Some(predicate) = parse::parse_value(raw) else {
                    return;
                };
                let match_field = self.match_field(property, target);
                target.add_predicate(property, &match_field, predicate);
                outcome.predicates += 1;
            }
        }
    }

    fn match_field(&self, property: &str, target: &mut dyn RangeTarget) -> String {
        if self.resolver.is_nested(property) {
            self.resolver.resolve_nested_path(property, target)
        } else {
            target.field_path(target.root_alias(), property)
        }
    }

    /// Describe the query parameters this filter accepts, keyed
    /// `range[<property>]`. Unmapped properties are left out.
    pub fn describe(&self) -> IndexMap<String, FilterDescription> {
        self.resolver
            .properties()
            .into_iter()
            .filter(|property| self.resolver.is_mapped(property))
            .map(|property| {
                let key = format!(
                    "{}[{}]",
                    self.parameter_name,
                    self.name_converter.normalize(&property)
                );
                (key, FilterDescription::range(property))
            })
            .collect()
    }
}
