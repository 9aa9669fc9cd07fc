//! Providers: ambient values resolved by nearest-ancestor lookup.
//!
//! A [`Providers`] is a stack of published values threaded through a pass.
//! Entering an element pushes whatever its [`ProviderComponent`]s publish;
//! leaving it truncates back to the [`ProviderMark`] taken on entry, so
//! shadowing done inside a subtree never leaks to a sibling.

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::rc::Rc;

use crate::element::{ElementId, ElementMut, Tree};
use crate::error::{Error, Result};

/// One published value, keyed by its type.
#[derive(Clone)]
struct Entry {
    key: TypeId,
    name: &'static str,
    value: Rc<dyn Any>,
}

/// Stack depth to restore when leaving a scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderMark(usize);

/// Resolution context for ambient values.
///
/// Transient: built for one pass invocation and dropped when it returns.
#[derive(Clone, Default)]
pub struct Providers {
    entries: Vec<Entry>,
}

impl Providers {
    /// An empty context: every lookup fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish `value` for the rest of the current scope, shadowing any
    /// earlier value of the same type.
    pub fn set<T: 'static>(&mut self, value: T) {
        self.set_rc(Rc::new(value));
    }

    /// Publish an already shared value.
    pub fn set_rc<T: 'static>(&mut self, value: Rc<T>) {
        self.entries.push(Entry {
            key: TypeId::of::<T>(),
            name: type_name::<T>(),
            value,
        });
    }

    /// Resolve the nearest publication of `T`.
    ///
    /// # Errors
    ///
    /// [`Error::ProviderNotFound`] if nothing published a `T`.
    pub fn get<T: 'static>(&self) -> Result<Rc<T>> {
        self.get_optional::<T>().ok_or(Error::ProviderNotFound {
            key: type_name::<T>(),
        })
    }

    /// Resolve the nearest publication of `T`, or `None`.
    pub fn get_optional<T: 'static>(&self) -> Option<Rc<T>> {
        let key = TypeId::of::<T>();
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.key == key)
            .and_then(|entry| Rc::clone(&entry.value).downcast::<T>().ok())
    }

    /// Whether a `T` is currently visible.
    pub fn contains<T: 'static>(&self) -> bool {
        let key = TypeId::of::<T>();
        self.entries.iter().any(|entry| entry.key == key)
    }

    /// Remember the current depth.
    pub fn mark(&self) -> ProviderMark {
        ProviderMark(self.entries.len())
    }

    /// Drop everything published since `mark`.
    pub fn restore(&mut self, mark: ProviderMark) {
        self.entries.truncate(mark.0);
    }

    /// Apply the provider components of `id` in attachment order and return
    /// the mark to restore when leaving it.
    ///
    /// # Errors
    ///
    /// [`Error::StaleElement`] if `id` is not in the tree, or whatever a
    /// provider behavior returns.
    pub fn enter(&mut self, tree: &Tree, id: ElementId) -> Result<ProviderMark> {
        let mark = self.mark();
        for provider in tree.components(id)?.iter::<ProviderComponent>() {
            provider.publish(tree, id, self)?;
        }
        Ok(mark)
    }

    /// Build the context visible at `id` by applying every provider from the
    /// top of its tree down to and including `id`.
    ///
    /// Used when a value is needed outside a full traversal, e.g. delivering a
    /// captured pointer event straight to one element.
    pub fn resolve_for(tree: &Tree, id: ElementId) -> Result<Self> {
        let mut providers = Self::new();
        let mut path = tree.ancestors(id);
        path.reverse();
        path.push(id);
        for element in path {
            providers.enter(tree, element)?;
        }
        Ok(providers)
    }

    /// Number of live publications (shadowed ones included).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is published.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Providers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|entry| entry.name))
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Provide / ProviderComponent
// ---------------------------------------------------------------------------

/// Provider behavior: publishes values for the element's subtree.
///
/// Implemented for any matching closure.
pub trait Provide {
    fn provide(&self, cx: &mut ProvideCx<'_>) -> Result<()>;
}

impl<F> Provide for F
where
    F: Fn(&mut ProvideCx<'_>) -> Result<()>,
{
    fn provide(&self, cx: &mut ProvideCx<'_>) -> Result<()> {
        self(cx)
    }
}

/// A fixed value publishes itself.
impl Provide for Entry {
    fn provide(&self, cx: &mut ProvideCx<'_>) -> Result<()> {
        cx.providers.entries.push(self.clone());
        Ok(())
    }
}

/// What a provider behavior sees: its element's components and the values
/// published above it, including earlier provider components on the same
/// element.
pub struct ProvideCx<'a> {
    tree: &'a Tree,
    providers: &'a mut Providers,
    element: ElementId,
}

impl ProvideCx<'_> {
    /// Resolve an outer value, e.g. to derive the one being published.
    pub fn provider<T: 'static>(&self) -> Result<Rc<T>> {
        self.providers.get::<T>()
    }

    /// The first `T` on this element.
    pub fn component<T: 'static>(&self) -> Result<&T> {
        self.tree.component::<T>(self.element)
    }

    /// Publish `value` for this element and its descendants.
    pub fn set<T: 'static>(&mut self, value: T) {
        self.providers.set(value);
    }
}

/// Publishes values for the element's subtree during every pass.
#[derive(Clone)]
pub struct ProviderComponent {
    name: &'static str,
    behavior: Rc<dyn Provide>,
}

impl ProviderComponent {
    /// Publish a fixed `value`.
    pub fn new<T: 'static>(value: T) -> Self {
        let name = type_name::<T>();
        Self {
            name,
            behavior: Rc::new(Entry {
                key: TypeId::of::<T>(),
                name,
                value: Rc::new(value),
            }),
        }
    }

    /// Publish whatever `behavior` computes when the element is entered.
    pub fn from_behavior<P: Provide + 'static>(behavior: P) -> Self {
        Self {
            name: type_name::<P>(),
            behavior: Rc::new(behavior),
        }
    }

    /// Run the behavior for `element`, pushing onto `providers`.
    pub fn publish(
        &self,
        tree: &Tree,
        element: ElementId,
        providers: &mut Providers,
    ) -> Result<()> {
        let mut cx = ProvideCx {
            tree,
            providers,
            element,
        };
        self.behavior.provide(&mut cx)
    }
}

impl fmt::Debug for ProviderComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ProviderComponent").field(&self.name).finish()
    }
}

impl ElementMut<'_> {
    /// Publish `value` to this element and its descendants.
    pub fn provider<T: 'static>(&mut self, value: T) -> &mut Self {
        self.add_component(ProviderComponent::new(value))
    }

    /// Publish values computed by `behavior` each time a pass enters this
    /// element.
    pub fn provide<F>(&mut self, behavior: F) -> &mut Self
    where
        F: Fn(&mut ProvideCx<'_>) -> Result<()> + 'static,
    {
        self.add_component(ProviderComponent::from_behavior(behavior))
    }
}
