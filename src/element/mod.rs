//! Element tree: slotmap-backed arena of elements, builder handle, searches.

pub mod builder;
pub mod node;
pub mod query;
pub mod tree;

pub use builder::ElementMut;
pub use node::{ElementData, ElementId};
pub use tree::Tree;
