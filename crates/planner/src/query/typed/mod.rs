//! Typed, alias-bound query construction.
//!
//! An [`EntityPath`] binds an entity type to an alias; every [`Path`] created
//! from it carries that alias explicitly. Queries built from these paths are
//! resolved against their declared sources when they are evaluated.

pub mod path;
pub mod qtypes;
pub mod query;

pub use path::{EntityPath, EntitySource, OrderSpecifier, Path, Predicate};
pub use qtypes::{QItem, QShop};
pub use query::{EntityQuery, QueryExpression};
