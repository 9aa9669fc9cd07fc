//! Typed component storage attached to every element.

pub mod store;

pub use store::ComponentStore;
