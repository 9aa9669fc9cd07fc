//! Tree operations: create, attach, detach, remove, walk.

use slotmap::{SecondaryMap, SlotMap};

use super::builder::ElementMut;
use super::node::{ElementData, ElementId};
use crate::component::ComponentStore;
use crate::error::{Error, Result};

/// Empty slice constant for returning when an element has no children.
const EMPTY_CHILDREN: &[ElementId] = &[];

/// The retained element tree, backed by a slotmap arena.
///
/// Elements live in a single `SlotMap`. Parent links are non-owning
/// back-references held in a secondary map; child lists are ordered and define
/// paint and traversal order.
#[derive(Debug)]
pub struct Tree {
    pub(crate) elements: SlotMap<ElementId, ElementData>,
    children: SecondaryMap<ElementId, Vec<ElementId>>,
    parent: SecondaryMap<ElementId, ElementId>,
    root: Option<ElementId>,
}

impl Tree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            elements: SlotMap::with_key(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            root: None,
        }
    }

    /// Create a detached element and run `content` against it exactly once.
    ///
    /// The content closure attaches components and creates children. If no
    /// root has been set yet, this element becomes the root.
    pub fn element(&mut self, content: impl FnOnce(&mut ElementMut<'_>)) -> ElementId {
        let id = self.elements.insert_with_key(ElementData::new);
        self.children.insert(id, Vec::new());
        if self.root.is_none() {
            self.root = Some(id);
        }
        content(&mut ElementMut::new(self, id));
        id
    }

    /// Create an element and make it the root.
    pub fn create_root(&mut self, content: impl FnOnce(&mut ElementMut<'_>)) -> ElementId {
        let id = self.element(content);
        self.root = Some(id);
        id
    }

    /// Create an element with `content` and append it to `parent`.
    ///
    /// # Errors
    ///
    /// [`Error::StaleElement`] if `parent` does not exist.
    pub fn create_child(
        &mut self,
        parent: ElementId,
        content: impl FnOnce(&mut ElementMut<'_>),
    ) -> Result<ElementId> {
        self.ensure(parent)?;
        Ok(self.spawn_child(parent, content))
    }

    /// [`create_child`](Self::create_child) for a parent known to be alive.
    pub(crate) fn spawn_child(
        &mut self,
        parent: ElementId,
        content: impl FnOnce(&mut ElementMut<'_>),
    ) -> ElementId {
        let root = self.root;
        let child = self.element(content);
        // A fresh child never takes over as root.
        self.root = root;
        self.attach(parent, child);
        child
    }

    /// Append `child` to `parent`'s ordered child list.
    ///
    /// # Errors
    ///
    /// - [`Error::AlreadyParented`] if `child` is still attached somewhere; call
    ///   [`detach`](Self::detach) first.
    /// - [`Error::WouldCycle`] if `child` is `parent` or one of its ancestors.
    /// - [`Error::StaleElement`] if either element does not exist.
    pub fn add_child(&mut self, parent: ElementId, child: ElementId) -> Result<()> {
        self.ensure(parent)?;
        self.ensure(child)?;
        if let Some(current) = self.parent(child) {
            log::warn!("rejecting add_child: {child:?} is already under {current:?}");
            return Err(Error::AlreadyParented {
                child,
                parent: current,
            });
        }
        if child == parent || self.ancestors(parent).contains(&child) {
            return Err(Error::WouldCycle { parent, child });
        }
        if self.root == Some(child) {
            self.root = self.root_of(parent);
        }
        self.attach(parent, child);
        Ok(())
    }

    /// Detach `child` from its parent, keeping its subtree intact.
    ///
    /// Returns the former parent, or `None` if it was not attached.
    pub fn detach(&mut self, child: ElementId) -> Option<ElementId> {
        let parent = self.parent.remove(child)?;
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.retain(|&id| id != child);
        }
        log::trace!("detached {child:?} from {parent:?}");
        Some(parent)
    }

    /// Remove an element and all its descendants, dropping their components.
    ///
    /// Returns `false` if the element did not exist.
    pub fn remove(&mut self, id: ElementId) -> bool {
        if !self.elements.contains_key(id) {
            return false;
        }
        self.detach(id);
        if self.root == Some(id) {
            self.root = None;
        }
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(kids) = self.children.remove(current) {
                stack.extend(kids);
            }
            self.parent.remove(current);
            self.elements.remove(current);
        }
        true
    }

    /// The parent of an element, if it has one.
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.parent.get(id).copied()
    }

    /// The ordered children of an element. Empty if it has none or does not exist.
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// Walk from `id` up to the top of its tree, collecting ancestor ids.
    ///
    /// Starts with the immediate parent; does not include `id` itself.
    pub fn ancestors(&self, id: ElementId) -> Vec<ElementId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    /// The top-most ancestor of `id` (or `id` itself when detached).
    fn root_of(&self, id: ElementId) -> Option<ElementId> {
        self.ancestors(id).last().copied().or(Some(id))
    }

    /// Pre-order depth-first traversal starting from (and including) `start`.
    pub fn walk_depth_first(&self, start: ElementId) -> Vec<ElementId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.elements.contains_key(current) {
                continue;
            }
            result.push(current);
            // Push children in reverse so the first child is visited first.
            stack.extend(self.children(current).iter().rev());
        }
        result
    }

    /// Immutable access to an element.
    pub fn get(&self, id: ElementId) -> Option<&ElementData> {
        self.elements.get(id)
    }

    /// Mutable access to an element.
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut ElementData> {
        self.elements.get_mut(id)
    }

    /// The element's component store.
    ///
    /// # Errors
    ///
    /// [`Error::StaleElement`] if the element does not exist.
    pub fn components(&self, id: ElementId) -> Result<&ComponentStore> {
        self.elements
            .get(id)
            .map(ElementData::components)
            .ok_or(Error::StaleElement(id))
    }

    /// Mutable access to the element's component store.
    ///
    /// # Errors
    ///
    /// [`Error::StaleElement`] if the element does not exist.
    pub fn components_mut(&mut self, id: ElementId) -> Result<&mut ComponentStore> {
        self.elements
            .get_mut(id)
            .map(ElementData::components_mut)
            .ok_or(Error::StaleElement(id))
    }

    /// Shorthand for `components(id)?.get::<T>()`.
    pub fn component<T: 'static>(&self, id: ElementId) -> Result<&T> {
        self.components(id)?.get::<T>()
    }

    /// Shorthand for `components_mut(id)?.get_mut::<T>()`.
    pub fn component_mut<T: 'static>(&mut self, id: ElementId) -> Result<&mut T> {
        self.components_mut(id)?.get_mut::<T>()
    }

    /// The first `T` on `id`, or `None` if absent or the element is gone.
    pub fn component_optional<T: 'static>(&self, id: ElementId) -> Option<&T> {
        self.elements.get(id)?.components().get_optional::<T>()
    }

    /// A builder handle for an existing element.
    ///
    /// # Errors
    ///
    /// [`Error::StaleElement`] if the element does not exist.
    pub fn edit(&mut self, id: ElementId) -> Result<ElementMut<'_>> {
        self.ensure(id)?;
        Ok(ElementMut::new(self, id))
    }

    /// The current root element, if set.
    pub fn root(&self) -> Option<ElementId> {
        self.root
    }

    /// Number of elements in the tree.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Whether the tree contains an element with the given id.
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(id)
    }

    fn ensure(&self, id: ElementId) -> Result<()> {
        if self.elements.contains_key(id) {
            Ok(())
        } else {
            Err(Error::StaleElement(id))
        }
    }

    fn attach(&mut self, parent: ElementId, child: ElementId) {
        self.parent.insert(child, parent);
        if let Some(kids) = self.children.get_mut(parent) {
            kids.push(child);
        }
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a small test tree:
    /// ```text
    ///       root
    ///      /    \
    ///    a        b
    ///   / \
    ///  c   d
    /// ```
    fn build_tree() -> (Tree, ElementId, ElementId, ElementId, ElementId, ElementId) {
        let mut tree = Tree::new();
        let (mut a, mut b, mut c, mut d) = Default::default();
        let root = tree.create_root(|root| {
            a = root.create_child(|e| {
                c = e.create_child(|_| {});
                d = e.create_child(|_| {});
            });
            b = root.create_child(|_| {});
        });
        (tree, root, a, b, c, d)
    }

    #[test]
    fn first_element_becomes_root() {
        let mut tree = Tree::new();
        let first = tree.element(|_| {});
        let _second = tree.element(|_| {});
        assert_eq!(tree.root(), Some(first));
    }

    #[test]
    fn content_runs_once_against_the_new_element() {
        let mut tree = Tree::new();
        let mut runs = 0;
        let mut seen = None;
        let id = tree.element(|e| {
            runs += 1;
            seen = Some(e.id());
        });
        assert_eq!(runs, 1);
        assert_eq!(seen, Some(id));
    }

    #[test]
    fn parent_relationship() {
        let (tree, root, a, _b, c, _d) = build_tree();
        assert_eq!(tree.parent(a), Some(root));
        assert_eq!(tree.parent(c), Some(a));
        assert_eq!(tree.parent(root), None);
        assert_eq!(tree.root(), Some(root));
    }

    #[test]
    fn children_in_insertion_order() {
        let (tree, root, a, b, c, d) = build_tree();
        assert_eq!(tree.children(root), &[a, b]);
        assert_eq!(tree.children(a), &[c, d]);
        assert!(tree.children(c).is_empty());
    }

    #[test]
    fn ancestors() {
        let (tree, root, a, _b, c, _d) = build_tree();
        assert_eq!(tree.ancestors(c), vec![a, root]);
        assert!(tree.ancestors(root).is_empty());
    }

    #[test]
    fn create_child_on_tree() {
        let (mut tree, root, _a, b, ..) = build_tree();
        let e = tree.create_child(b, |_| {}).unwrap();
        assert_eq!(tree.parent(e), Some(b));
        assert_eq!(tree.root(), Some(root));
    }

    #[test]
    fn add_detached_child() {
        let (mut tree, root, _a, b, ..) = build_tree();
        let loose = tree.element(|_| {});
        tree.add_child(b, loose).unwrap();
        assert_eq!(tree.children(b), &[loose]);
        assert_eq!(tree.ancestors(loose), vec![b, root]);
    }

    #[test]
    fn re_adding_a_parented_child_fails() {
        let (mut tree, _root, a, b, c, _d) = build_tree();
        let err = tree.add_child(b, c).unwrap_err();
        assert_eq!(err, Error::AlreadyParented { child: c, parent: a });
        // Nothing moved.
        assert_eq!(tree.parent(c), Some(a));
        assert!(tree.children(b).is_empty());
    }

    #[test]
    fn detach_then_add_reparents() {
        let (mut tree, root, a, b, c, d) = build_tree();
        assert_eq!(tree.detach(c), Some(a));
        tree.add_child(b, c).unwrap();
        assert_eq!(tree.children(a), &[d]);
        assert_eq!(tree.ancestors(c), vec![b, root]);
    }

    #[test]
    fn cycles_are_rejected() {
        let (mut tree, root, a, _b, c, _d) = build_tree();
        tree.detach(a);
        assert_eq!(
            tree.add_child(c, a).unwrap_err(),
            Error::WouldCycle { parent: c, child: a }
        );
        assert_eq!(
            tree.add_child(root, root).unwrap_err(),
            Error::WouldCycle { parent: root, child: root }
        );
    }

    #[test]
    fn adding_root_under_another_tree_moves_root() {
        let mut tree = Tree::new();
        let old_root = tree.element(|_| {});
        let host = tree.element(|_| {});
        tree.add_child(host, old_root).unwrap();
        assert_eq!(tree.root(), Some(host));
    }

    #[test]
    fn remove_subtree() {
        let (mut tree, root, a, b, c, d) = build_tree();
        assert!(tree.remove(a));
        assert!(!tree.contains(a));
        assert!(!tree.contains(c));
        assert!(!tree.contains(d));
        assert_eq!(tree.children(root), &[b]);
        assert_eq!(tree.len(), 2);
        assert!(!tree.remove(a));
    }

    #[test]
    fn stale_ids_are_reported() {
        let (mut tree, _root, a, ..) = build_tree();
        tree.remove(a);
        assert_eq!(tree.components(a).unwrap_err(), Error::StaleElement(a));
        assert!(tree.edit(a).is_err());
    }

    #[test]
    fn walk_depth_first() {
        let (tree, root, a, b, c, d) = build_tree();
        assert_eq!(tree.walk_depth_first(root), vec![root, a, c, d, b]);
        assert_eq!(tree.walk_depth_first(a), vec![a, c, d]);
    }

    #[test]
    fn default_impl() {
        let tree = Tree::default();
        assert!(tree.is_empty());
        assert_eq!(tree.root(), None);
    }
}
