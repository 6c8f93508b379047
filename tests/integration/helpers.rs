//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use rangefilter::{EntityMetadata, FilterOutcome, RangeFilter};
use rangefilter_document::AggregationBuilder;
use rangefilter_sql::SqlQuery;

/// Metadata for the `Dummy` fixture entity.
pub fn dummy_metadata() -> EntityMetadata {
    EntityMetadata::new("Dummy")
        .with_field("id")
        .with_field("name")
        .with_field("dummyPrice")
        .with_field("dummyFloat")
        .with_field("nameConverted")
        .with_field("relatedDummy.age")
        .with_field("relatedDummy.thirdLevel.level")
        .with_relation("relatedDummy", "RelatedDummy")
        .with_relation("relatedDummy.thirdLevel", "ThirdLevel")
}

/// A range filter over `Dummy` with default settings.
pub fn dummy_filter() -> RangeFilter {
    RangeFilter::new(Arc::new(dummy_metadata()))
}

/// A range filter over `Dummy` restricted to `properties`.
pub fn dummy_filter_with(properties: &[&str]) -> RangeFilter {
    let enabled = properties.iter().map(|p| p.to_string()).collect();
    RangeFilter::new(Arc::new(
        dummy_metadata().with_enabled_properties(Some(enabled)),
    ))
}

/// Apply `query` to a fresh SQL query over `Dummy`.
pub fn sql(filter: &RangeFilter, query: &str) -> (SqlQuery, FilterOutcome) {
    let mut target = SqlQuery::new("Dummy");
    let outcome = filter
        .apply_query(query, &mut target)
        .expect("query string should decode");
    (target, outcome)
}

/// Apply `query` to a fresh aggregation over `Dummy`.
pub fn aggregate(filter: &RangeFilter, query: &str) -> (AggregationBuilder, FilterOutcome) {
    let mut target = AggregationBuilder::new("Dummy");
    let outcome = filter
        .apply_query(query, &mut target)
        .expect("query string should decode");
    (target, outcome)
}
