//! Core type definitions used across the rangefilter workspace.

pub mod filter;
pub mod number;
pub mod request;

pub use filter::{FilterDescription, Predicate, RangeOperator};
pub use number::RangeNumber;
pub use request::{FilterRequest, OperatorMap, RangeParam};
