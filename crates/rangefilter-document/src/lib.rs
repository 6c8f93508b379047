//! # rangefilter-document
//!
//! Document-store materialization of range predicates as aggregation
//! pipeline stages (`$lookup`, `$unwind`, `$match`).

pub mod aggregation;

pub use aggregation::AggregationBuilder;
