//! # rangefilter-core
//!
//! Core crate for range filtering. Contains the request and predicate
//! types, the collaborator traits a host implements (property metadata,
//! name conversion, query targets), configuration schemas, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other rangefilter crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
