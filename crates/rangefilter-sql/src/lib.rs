//! # rangefilter-sql
//!
//! SQL materialization of range predicates. [`SqlQuery`] collects joins and
//! `WHERE` conditions with collision-free named parameters, renders them as
//! a readable query, and converts them into an executable
//! `sqlx::QueryBuilder` with positional binds.

pub mod naming;
pub mod query;

pub use naming::QueryNameGenerator;
pub use query::{SqlCondition, SqlJoin, SqlQuery};
