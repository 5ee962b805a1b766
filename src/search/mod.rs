//! Search specification model
//!
//! The declarative query consumed by [`WordGraph::search`](crate::graph::WordGraph::search)
//! and [`WordEngine::search`](crate::WordEngine::search).

mod condition;
mod group;
mod spec;

pub use condition::{ConditionKind, SearchCondition};
pub use group::WordGroup;
pub use spec::SearchSpec;
