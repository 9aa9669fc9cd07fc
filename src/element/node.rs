//! Node types: ElementId, ElementData.

use slotmap::new_key_type;

use crate::component::ComponentStore;

new_key_type! {
    /// Identity of an element in the tree. Copy, lightweight (u64).
    pub struct ElementId;
}

/// Data owned by a single element: its component store.
///
/// Tree shape (parent, children) lives in the [`Tree`](super::Tree) so that
/// structural edits never need to touch component data.
#[derive(Debug)]
pub struct ElementData {
    id: ElementId,
    components: ComponentStore,
}

impl ElementData {
    pub(crate) fn new(id: ElementId) -> Self {
        Self {
            id,
            components: ComponentStore::new(id),
        }
    }

    /// This element's id.
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// The element's components.
    pub fn components(&self) -> &ComponentStore {
        &self.components
    }

    /// Mutable access to the element's components.
    pub fn components_mut(&mut self) -> &mut ComponentStore {
        &mut self.components
    }
}
