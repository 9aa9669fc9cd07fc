//! The layout pass: constraint down, size up.
//!
//! [`LayoutPass::run`] measures the root with the driver's constraint. Each
//! measurement behavior receives a [`LayoutCx`] through which it measures and
//! places its own children; the pass writes each measured size into the
//! element's [`LayoutComponent`] bounds.

use std::rc::Rc;

use super::component::LayoutComponent;
use crate::component::ComponentStore;
use crate::element::{ElementId, Tree};
use crate::error::Result;
use crate::geometry::{Point, Rect, Size};
use crate::provider::Providers;

/// Entry point of the layout pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutPass;

impl LayoutPass {
    /// Measure the subtree at `root` under `constraint` and place the root at
    /// the origin.
    ///
    /// Returns the root's size, or `None` if the root has no layout component.
    pub fn run(tree: &mut Tree, root: ElementId, constraint: Size) -> Result<Option<Size>> {
        log::trace!("layout pass: {root:?} under {constraint:?}");
        let mut providers = Providers::new();
        let size = measure(tree, &mut providers, root, constraint)?;
        if let Some(layout) = tree.components_mut(root)?.get_optional_mut::<LayoutComponent>() {
            layout.bounds = layout.bounds.with_origin(Point::ZERO);
        }
        Ok(size)
    }
}

/// Measure one element and record its size.
///
/// An element without a layout component reports no size; its children are
/// still measured with the same constraint so their subtrees get bounds.
fn measure(
    tree: &mut Tree,
    providers: &mut Providers,
    id: ElementId,
    constraint: Size,
) -> Result<Option<Size>> {
    let mark = providers.enter(tree, id)?;
    let layout = tree
        .components(id)?
        .get_optional::<LayoutComponent>()
        .map(|layout| (layout.behavior(), layout.min_size, layout.max_size));

    let size = match layout {
        Some((behavior, min, max)) => {
            let mut cx = LayoutCx {
                tree: &mut *tree,
                providers: &mut *providers,
                element: id,
            };
            let size = behavior.measure(&mut cx, constraint)?.clamp(min, max);
            if let Some(layout) = tree.components_mut(id)?.get_optional_mut::<LayoutComponent>() {
                layout.bounds = Rect::from_origin_size(layout.bounds.origin(), size);
            }
            log::trace!("measured {id:?}: {size:?}");
            Some(size)
        }
        None => {
            for child in tree.children(id).to_vec() {
                measure(tree, providers, child, constraint)?;
            }
            None
        }
    };

    providers.restore(mark);
    Ok(size)
}

// ---------------------------------------------------------------------------
// LayoutCx
// ---------------------------------------------------------------------------

/// What a measurement behavior sees: its element, the resolved providers, and
/// the ability to measure and place its children.
pub struct LayoutCx<'a> {
    tree: &'a mut Tree,
    providers: &'a mut Providers,
    element: ElementId,
}

impl LayoutCx<'_> {
    /// The element being measured.
    pub fn element(&self) -> ElementId {
        self.element
    }

    /// The tree, read-only.
    pub fn tree(&self) -> &Tree {
        self.tree
    }

    /// Providers visible at this element.
    pub fn providers(&self) -> &Providers {
        self.providers
    }

    /// Shorthand for `providers().get::<T>()`.
    pub fn provider<T: 'static>(&self) -> Result<Rc<T>> {
        self.providers.get::<T>()
    }

    /// This element's components.
    pub fn components(&self) -> Result<&ComponentStore> {
        self.tree.components(self.element)
    }

    /// The first `T` on this element.
    pub fn component<T: 'static>(&self) -> Result<&T> {
        self.tree.component::<T>(self.element)
    }

    /// Mutable access to the first `T` on this element.
    pub fn component_mut<T: 'static>(&mut self) -> Result<&mut T> {
        self.tree.component_mut::<T>(self.element)
    }

    /// The first `T` on this element, or `None`.
    pub fn component_optional<T: 'static>(&self) -> Option<&T> {
        self.tree.component_optional::<T>(self.element)
    }

    /// This element's children, in order.
    pub fn children(&self) -> Vec<ElementId> {
        self.tree.children(self.element).to_vec()
    }

    /// Run the layout pass on `child` under `constraint`.
    ///
    /// Returns `None` for a child without a layout component.
    pub fn measure_child(&mut self, child: ElementId, constraint: Size) -> Result<Option<Size>> {
        measure(self.tree, self.providers, child, constraint)
    }

    /// Set the origin of `child`'s bounds, relative to this element.
    ///
    /// No-op for a child without a layout component.
    pub fn place_child(&mut self, child: ElementId, origin: Point) -> Result<()> {
        if let Some(layout) = self
            .tree
            .components_mut(child)?
            .get_optional_mut::<LayoutComponent>()
        {
            layout.bounds = layout.bounds.with_origin(origin);
        }
        Ok(())
    }

    /// Bounds last computed for `child`, if it has a layout component.
    pub fn child_bounds(&self, child: ElementId) -> Option<Rect> {
        self.tree
            .component_optional::<LayoutComponent>(child)
            .map(|layout| layout.bounds)
    }
}

// ---------------------------------------------------------------------------
// Bounds queries
// ---------------------------------------------------------------------------

impl Tree {
    /// Bounds of `id` relative to its parent, if it has a layout component.
    pub fn bounds(&self, id: ElementId) -> Option<Rect> {
        self.component_optional::<LayoutComponent>(id)
            .map(|layout| layout.bounds)
    }

    /// Bounds of `id` in the coordinate space of the top of its tree.
    ///
    /// Ancestors without a layout component do not offset their children.
    pub fn absolute_bounds(&self, id: ElementId) -> Option<Rect> {
        let local = self.bounds(id)?;
        let offset = self
            .ancestors(id)
            .into_iter()
            .filter_map(|ancestor| self.bounds(ancestor))
            .fold(Point::ZERO, |acc, bounds| acc + bounds.origin());
        Some(local.translate(offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::cell::Cell;

    struct Scale(f32);

    fn fixed(size: Size) -> impl Fn(&mut LayoutCx<'_>, Size) -> Result<Size> {
        move |_, _| Ok(size)
    }

    /// Lays children out left to right and sizes itself to fit them.
    fn row(cx: &mut LayoutCx<'_>, constraint: Size) -> Result<Size> {
        let mut x = 0.0;
        let mut height: f32 = 0.0;
        for child in cx.children() {
            if let Some(size) = cx.measure_child(child, constraint)? {
                cx.place_child(child, Point::new(x, 0.0))?;
                x += size.width;
                height = height.max(size.height);
            }
        }
        Ok(Size::new(x, height))
    }

    #[test]
    fn leaf_bounds_come_from_its_behavior() {
        let mut tree = Tree::new();
        let root = tree.create_root(|e| {
            e.layout(fixed(Size::new(40.0, 10.0)));
        });
        let size = LayoutPass::run(&mut tree, root, Size::UNBOUNDED).unwrap();
        assert_eq!(size, Some(Size::new(40.0, 10.0)));
        assert_eq!(tree.bounds(root), Some(Rect::new(0.0, 0.0, 40.0, 10.0)));
    }

    #[test]
    fn parent_places_measured_children() {
        let mut tree = Tree::new();
        let (mut a, mut b) = Default::default();
        let root = tree.create_root(|e| {
            e.layout(row);
            a = e.create_child(|c| {
                c.layout(fixed(Size::new(10.0, 5.0)));
            });
            b = e.create_child(|c| {
                c.layout(fixed(Size::new(20.0, 8.0)));
            });
        });
        let size = LayoutPass::run(&mut tree, root, Size::UNBOUNDED).unwrap();
        assert_eq!(size, Some(Size::new(30.0, 8.0)));
        assert_eq!(tree.bounds(a), Some(Rect::new(0.0, 0.0, 10.0, 5.0)));
        assert_eq!(tree.bounds(b), Some(Rect::new(10.0, 0.0, 20.0, 8.0)));
        assert_eq!(tree.absolute_bounds(b), Some(Rect::new(10.0, 0.0, 20.0, 8.0)));
    }

    #[test]
    fn placed_bounds_are_readable_by_the_parent() {
        let mut tree = Tree::new();
        let root = tree.create_root(|e| {
            // Stacks children vertically, reading back each clamped placement.
            e.layout(|cx: &mut LayoutCx<'_>, constraint: Size| {
                let mut y = 0.0;
                for child in cx.children() {
                    cx.measure_child(child, constraint)?;
                    cx.place_child(child, Point::new(0.0, y))?;
                    if let Some(bounds) = cx.child_bounds(child) {
                        y = bounds.y + bounds.height;
                    }
                }
                Ok(Size::new(10.0, y))
            });
            e.create_child(|c| {
                c.add_component(
                    LayoutComponent::new(fixed(Size::new(10.0, 1.0)))
                        .with_min_size(Size::new(0.0, 6.0)),
                );
            });
            e.create_child(|c| {
                c.layout(fixed(Size::new(10.0, 3.0)));
            });
            e.create_child(|_| {});
        });
        let size = LayoutPass::run(&mut tree, root, Size::UNBOUNDED).unwrap();
        assert_eq!(size, Some(Size::new(10.0, 9.0)));
        let last = tree.children(root)[1];
        assert_eq!(tree.bounds(last), Some(Rect::new(0.0, 6.0, 10.0, 3.0)));
    }

    #[test]
    fn constraint_flows_down() {
        let mut tree = Tree::new();
        let seen = std::rc::Rc::new(Cell::new(Size::EMPTY));
        let probe = std::rc::Rc::clone(&seen);
        let root = tree.create_root(|e| {
            e.layout(|cx: &mut LayoutCx<'_>, constraint: Size| {
                let inner = Size::new(constraint.width - 4.0, constraint.height - 4.0);
                for child in cx.children() {
                    cx.measure_child(child, inner)?;
                }
                Ok(constraint)
            });
            e.create_child(move |c| {
                c.layout(move |_: &mut LayoutCx<'_>, constraint: Size| {
                    probe.set(constraint);
                    Ok(Size::EMPTY)
                });
            });
        });
        LayoutPass::run(&mut tree, root, Size::new(100.0, 50.0)).unwrap();
        assert_eq!(seen.get(), Size::new(96.0, 46.0));
    }

    #[test]
    fn measured_size_is_clamped_to_min_and_max() {
        let mut tree = Tree::new();
        let root = tree.create_root(|e| {
            e.add_component(
                LayoutComponent::new(fixed(Size::new(5.0, 500.0)))
                    .with_min_size(Size::new(10.0, 10.0))
                    .with_max_size(Size::new(100.0, 100.0)),
            );
        });
        let size = LayoutPass::run(&mut tree, root, Size::UNBOUNDED).unwrap();
        assert_eq!(size, Some(Size::new(10.0, 100.0)));
    }

    #[test]
    fn layoutless_element_is_transparent() {
        let mut tree = Tree::new();
        let mut leaf = Default::default();
        let root = tree.create_root(|e| {
            e.create_child(|group| {
                leaf = group.create_child(|c| {
                    c.layout(fixed(Size::new(3.0, 4.0)));
                });
            });
        });
        let size = LayoutPass::run(&mut tree, root, Size::UNBOUNDED).unwrap();
        assert_eq!(size, None);
        assert_eq!(tree.bounds(root), None);
        assert_eq!(tree.bounds(leaf), Some(Rect::new(0.0, 0.0, 3.0, 4.0)));
    }

    #[test]
    fn providers_are_visible_during_measurement() {
        let mut tree = Tree::new();
        let root = tree.create_root(|e| {
            e.provider(Scale(2.0));
            e.layout(row);
            e.create_child(|c| {
                c.layout(|cx: &mut LayoutCx<'_>, _: Size| {
                    let scale = cx.provider::<Scale>()?;
                    Ok(Size::new(10.0 * scale.0, 10.0))
                });
            });
        });
        let size = LayoutPass::run(&mut tree, root, Size::UNBOUNDED).unwrap();
        assert_eq!(size, Some(Size::new(20.0, 10.0)));
    }

    #[test]
    fn missing_provider_aborts_the_pass() {
        let mut tree = Tree::new();
        let root = tree.create_root(|e| {
            e.layout(|cx: &mut LayoutCx<'_>, _: Size| {
                cx.provider::<Scale>()?;
                Ok(Size::EMPTY)
            });
        });
        let err = LayoutPass::run(&mut tree, root, Size::UNBOUNDED).unwrap_err();
        assert!(matches!(err, Error::ProviderNotFound { .. }));
    }

    #[test]
    fn measuring_twice_is_idempotent() {
        let mut tree = Tree::new();
        let root = tree.create_root(|e| {
            e.layout(row);
            for width in [4.0, 6.0, 8.0] {
                e.create_child(move |c| {
                    c.layout(fixed(Size::new(width, 2.0)));
                });
            }
        });
        let first = LayoutPass::run(&mut tree, root, Size::new(50.0, 50.0)).unwrap();
        let second = LayoutPass::run(&mut tree, root, Size::new(50.0, 50.0)).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, Some(Size::new(18.0, 2.0)));
    }
}
