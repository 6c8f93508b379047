//! Collaborator traits implemented by the host (or by the bundled
//! in-memory implementations).

pub mod metadata;
pub mod target;

pub use metadata::{NameConverter, PropertyResolver};
pub use target::RangeTarget;
