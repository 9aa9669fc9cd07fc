//! Tree search: predicate and component-value matching over descendants.

use super::node::{ElementData, ElementId};
use super::tree::Tree;
use crate::error::{Error, Result};

impl Tree {
    /// Pre-order depth-first search over the descendants of `start` (not
    /// including `start`). Children are visited in attachment order and each
    /// child's subtree is fully explored before its next sibling.
    pub fn find_child(
        &self,
        start: ElementId,
        mut predicate: impl FnMut(&ElementData) -> bool,
    ) -> Option<ElementId> {
        self.walk_depth_first(start)
            .into_iter()
            .skip(1)
            .find(|&id| self.get(id).is_some_and(&mut predicate))
    }

    /// Like [`find_child`](Self::find_child) but a miss is an error.
    ///
    /// # Errors
    ///
    /// [`Error::ChildNotFound`] if no descendant matches.
    pub fn require_child(
        &self,
        start: ElementId,
        predicate: impl FnMut(&ElementData) -> bool,
    ) -> Result<ElementId> {
        self.find_child(start, predicate).ok_or(Error::ChildNotFound)
    }

    /// First descendant whose first `T` component equals `value`.
    pub fn find_child_with<T: PartialEq + 'static>(
        &self,
        start: ElementId,
        value: &T,
    ) -> Option<ElementId> {
        self.find_child(start, |data| {
            data.components().get_optional::<T>() == Some(value)
        })
    }

    /// Like [`find_child_with`](Self::find_child_with) but a miss is an error.
    ///
    /// # Errors
    ///
    /// [`Error::ChildNotFound`] if no descendant carries `value`.
    pub fn require_child_with<T: PartialEq + 'static>(
        &self,
        start: ElementId,
        value: &T,
    ) -> Result<ElementId> {
        self.find_child_with(start, value).ok_or(Error::ChildNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Tag(&'static str);

    /// ```text
    ///        root (Tag root)
    ///       /     \
    ///   a (Tag x)   b (Tag x)
    ///     |
    ///   c (Tag y)
    /// ```
    fn build_query_tree() -> (Tree, ElementId, ElementId, ElementId, ElementId) {
        let mut tree = Tree::new();
        let (mut a, mut b, mut c) = Default::default();
        let root = tree.create_root(|root| {
            root.add_component(Tag("root"));
            a = root.create_child(|e| {
                e.add_component(Tag("x"));
                c = e.create_child(|e| {
                    e.add_component(Tag("y"));
                });
            });
            b = root.create_child(|e| {
                e.add_component(Tag("x"));
            });
        });
        (tree, root, a, b, c)
    }

    #[test]
    fn find_child_excludes_self() {
        let (tree, root, ..) = build_query_tree();
        assert_eq!(tree.find_child_with(root, &Tag("root")), None);
    }

    #[test]
    fn find_child_is_pre_order() {
        let (tree, root, a, _b, c) = build_query_tree();
        // `a` is found before its sibling `b` carrying the same tag.
        assert_eq!(tree.find_child_with(root, &Tag("x")), Some(a));
        // `c` (inside a's subtree) is found before `b`.
        let mut order = Vec::new();
        tree.find_child(root, |data| {
            order.push(data.id());
            false
        });
        assert_eq!(order[..2], [a, c]);
    }

    #[test]
    fn find_child_from_subtree() {
        let (tree, _root, a, b, c) = build_query_tree();
        assert_eq!(tree.find_child_with(a, &Tag("y")), Some(c));
        assert_eq!(tree.find_child_with(b, &Tag("y")), None);
    }

    #[test]
    fn require_child_miss_is_error() {
        let (tree, root, ..) = build_query_tree();
        assert_eq!(
            tree.require_child_with(root, &Tag("zzz")),
            Err(Error::ChildNotFound)
        );
        assert_eq!(
            tree.require_child(root, |data| data.components().get_optional::<u8>().is_some()),
            Err(Error::ChildNotFound)
        );
    }

    #[test]
    fn require_child_hit() {
        let (tree, root, _a, _b, c) = build_query_tree();
        assert_eq!(tree.require_child_with(root, &Tag("y")), Ok(c));
    }
}
