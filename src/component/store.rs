//! Heterogeneous, typed per-element component storage.
//!
//! Components are grouped by kind, where the kind is the Rust type of the
//! component. Each kind maps to an ordered list of instances: `get` returns the
//! first one attached, `for_each` visits all of them in attachment order.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::fmt;

use crate::element::ElementId;
use crate::error::{Error, Result};

/// All instances attached under one component kind.
struct Kind {
    name: &'static str,
    instances: Vec<Box<dyn Any>>,
}

/// Per-element component bag.
///
/// Append-only: there is no removal. Owned exclusively by its element.
pub struct ComponentStore {
    owner: ElementId,
    kinds: HashMap<TypeId, Kind>,
}

impl ComponentStore {
    /// Create an empty store owned by `owner`.
    pub fn new(owner: ElementId) -> Self {
        Self {
            owner,
            kinds: HashMap::new(),
        }
    }

    /// The element this store belongs to.
    pub fn owner(&self) -> ElementId {
        self.owner
    }

    /// Append `component` to the list of its kind, creating the list if needed.
    pub fn add<T: 'static>(&mut self, component: T) {
        self.kinds
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Kind {
                name: type_name::<T>(),
                instances: Vec::new(),
            })
            .instances
            .push(Box::new(component));
    }

    /// The first `T` ever attached.
    ///
    /// # Errors
    ///
    /// [`Error::MissingComponent`] if no `T` was attached.
    pub fn get<T: 'static>(&self) -> Result<&T> {
        self.get_optional::<T>().ok_or_else(|| self.missing::<T>())
    }

    /// Mutable access to the first `T` ever attached.
    ///
    /// # Errors
    ///
    /// [`Error::MissingComponent`] if no `T` was attached.
    pub fn get_mut<T: 'static>(&mut self) -> Result<&mut T> {
        let missing = self.missing::<T>();
        self.get_optional_mut::<T>().ok_or(missing)
    }

    /// The first `T` ever attached, or `None`.
    pub fn get_optional<T: 'static>(&self) -> Option<&T> {
        self.kinds
            .get(&TypeId::of::<T>())?
            .instances
            .first()?
            .downcast_ref::<T>()
    }

    /// Mutable access to the first `T`, or `None`.
    pub fn get_optional_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.kinds
            .get_mut(&TypeId::of::<T>())?
            .instances
            .first_mut()?
            .downcast_mut::<T>()
    }

    /// Iterate every `T` in attachment order.
    pub fn iter<T: 'static>(&self) -> impl Iterator<Item = &T> {
        self.kinds
            .get(&TypeId::of::<T>())
            .into_iter()
            .flat_map(|kind| kind.instances.iter())
            .filter_map(|instance| instance.downcast_ref::<T>())
    }

    /// Apply `action` to every `T` in attachment order.
    pub fn for_each<T: 'static>(&self, action: impl FnMut(&T)) {
        self.iter::<T>().for_each(action);
    }

    /// Apply `action` to every `T` in attachment order, mutably.
    pub fn for_each_mut<T: 'static>(&mut self, mut action: impl FnMut(&mut T)) {
        if let Some(kind) = self.kinds.get_mut(&TypeId::of::<T>()) {
            for instance in &mut kind.instances {
                if let Some(component) = instance.downcast_mut::<T>() {
                    action(component);
                }
            }
        }
    }

    /// Number of `T` instances attached.
    pub fn count<T: 'static>(&self) -> usize {
        self.kinds
            .get(&TypeId::of::<T>())
            .map_or(0, |kind| kind.instances.len())
    }

    /// Whether at least one `T` is attached.
    pub fn contains<T: 'static>(&self) -> bool {
        self.kinds.contains_key(&TypeId::of::<T>())
    }

    /// Number of distinct component kinds.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Whether no component was ever attached.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    fn missing<T: 'static>(&self) -> Error {
        Error::MissingComponent {
            element: self.owner,
            component: type_name::<T>(),
        }
    }
}

impl fmt::Debug for ComponentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<(&str, usize)> = self
            .kinds
            .values()
            .map(|kind| (kind.name, kind.instances.len()))
            .collect();
        kinds.sort_unstable();
        f.debug_struct("ComponentStore")
            .field("owner", &self.owner)
            .field("kinds", &kinds)
            .finish()
    }
}
