//! # rangefilter
//!
//! Translates `range[<property>][<operator>]=<value>` request parameters
//! into query predicates. Provides:
//!
//! - Operator parsing shared by every backend ([`parse`])
//! - The predicate builder that emits into a query target ([`builder`])
//! - The request-level [`RangeFilter`] with property resolution, name
//!   conversion, deprecated-syntax handling, and parameter descriptions
//! - An in-memory [`EntityMetadata`] resolver and name converters
//! - An axum extractor for the raw query string ([`RangeParams`])

pub mod builder;
pub mod extract;
pub mod filter;
pub mod metadata;
pub mod naming;
pub mod parse;

pub use builder::apply_range;
pub use extract::RangeParams;
pub use filter::{FilterOutcome, RangeFilter};
pub use metadata::EntityMetadata;
pub use naming::{IdentityNameConverter, SnakeCaseNameConverter};
pub use parse::parse_range_operators;
