//! Error type shared by the element tree, providers and passes.
//!
//! Every variant is a composition mistake: a tree built without a component its
//! behaviors rely on, a provider nobody published, or a structural violation.
//! Expected absence (optional lookups, search misses) is modelled with `Option`.

use thiserror::Error;

use crate::element::ElementId;

/// Errors raised by composition and by the passes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `component::<T>()` on an element that never attached a `T`.
    #[error("element {element:?} has no component of kind `{component}`")]
    MissingComponent {
        element: ElementId,
        component: &'static str,
    },

    /// `Providers::get::<T>()` with no ancestor publishing a `T`.
    #[error("no provider of `{key}` is visible at this element")]
    ProviderNotFound { key: &'static str },

    /// `require_child` found no descendant matching the predicate.
    #[error("cannot find child matching predicate")]
    ChildNotFound,

    /// `add_child` on an element that is still attached elsewhere.
    #[error("element {child:?} is already a child of {parent:?}; detach it first")]
    AlreadyParented { child: ElementId, parent: ElementId },

    /// `add_child` would make an element its own ancestor.
    #[error("adding {child:?} under {parent:?} would create a cycle")]
    WouldCycle { parent: ElementId, child: ElementId },

    /// The id refers to an element that was removed from the tree.
    #[error("element {0:?} no longer exists")]
    StaleElement(ElementId),
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
