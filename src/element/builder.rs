//! The builder handle content closures run against.
//!
//! [`ElementMut`] is how widget authors compose: attach components, create
//! children, and read back what they attached. Declarative helpers for the
//! layout/render/input/provider components are added to it by the modules that
//! define those components.

use super::node::ElementId;
use super::tree::Tree;
use crate::component::ComponentStore;
use crate::error::Result;

/// Mutable handle on one element of a [`Tree`] during composition.
pub struct ElementMut<'a> {
    tree: &'a mut Tree,
    id: ElementId,
}

impl<'a> ElementMut<'a> {
    pub(crate) fn new(tree: &'a mut Tree, id: ElementId) -> Self {
        Self { tree, id }
    }

    /// The element being composed.
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Read access to the tree the element lives in.
    ///
    /// Only shared access is handed out: nothing reachable from the handle
    /// removes elements, so the element outlives the handle.
    ///
    /// ```compile_fail
    /// let mut tree = apex_ui::Tree::new();
    /// tree.element(|e| {
    ///     let id = e.id();
    ///     e.tree().remove(id);
    /// });
    /// ```
    pub fn tree(&self) -> &Tree {
        &*self.tree
    }

    /// Attach a component under its own type as kind.
    pub fn add_component<T: 'static>(&mut self, component: T) -> &mut Self {
        self.store_mut().add(component);
        self
    }

    /// Construct a fresh child, run `content` against it, and append it.
    pub fn create_child(&mut self, content: impl FnOnce(&mut ElementMut<'_>)) -> ElementId {
        self.tree.spawn_child(self.id, content)
    }

    /// Append an existing, detached element as the last child.
    ///
    /// # Errors
    ///
    /// See [`Tree::add_child`].
    pub fn add_child(&mut self, child: ElementId) -> Result<&mut Self> {
        self.tree.add_child(self.id, child)?;
        Ok(self)
    }

    /// The first component of kind `T`.
    pub fn component<T: 'static>(&self) -> Result<&T> {
        self.store().get::<T>()
    }

    /// Mutable access to the first component of kind `T`.
    pub fn component_mut<T: 'static>(&mut self) -> Result<&mut T> {
        self.store_mut().get_mut::<T>()
    }

    /// The first component of kind `T`, or `None`.
    pub fn component_optional<T: 'static>(&self) -> Option<&T> {
        self.store().get_optional::<T>()
    }

    /// The element's component store.
    pub fn components(&self) -> &ComponentStore {
        self.store()
    }

    // The handle holds the only mutable borrow of the tree and never removes
    // elements, so `id` stays live for its whole lifetime.
    fn store(&self) -> &ComponentStore {
        self.tree.elements[self.id].components()
    }

    fn store_mut(&mut self) -> &mut ComponentStore {
        self.tree.elements[self.id].components_mut()
    }
}

impl std::fmt::Debug for ElementMut<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementMut")
            .field("id", &self.id)
            .field("components", self.store())
            .finish()
    }
}
