//! The render pass: pre-order, back-to-front drawing in local coordinates.
//!
//! For each element the pass translates the canvas to the element's bounds,
//! runs every [`RenderComponent`] in attachment order, recurses into the
//! children, then translates back. Elements without a render component are
//! still descended into.

use std::fmt;
use std::rc::Rc;

use super::canvas::{Canvas, Paint};
use crate::component::ComponentStore;
use crate::element::{ElementId, ElementMut, Tree};
use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::layout::LayoutComponent;
use crate::provider::Providers;

// ---------------------------------------------------------------------------
// Draw / RenderComponent
// ---------------------------------------------------------------------------

/// Draw behavior. Implemented for any matching closure.
pub trait Draw {
    fn draw(&self, cx: &mut RenderCx<'_>, canvas: &mut dyn Canvas) -> Result<()>;
}

impl<F> Draw for F
where
    F: Fn(&mut RenderCx<'_>, &mut dyn Canvas) -> Result<()>,
{
    fn draw(&self, cx: &mut RenderCx<'_>, canvas: &mut dyn Canvas) -> Result<()> {
        self(cx, canvas)
    }
}

/// One draw layer of an element. Several may be attached; they run in order.
#[derive(Clone)]
pub struct RenderComponent {
    behavior: Rc<dyn Draw>,
}

impl RenderComponent {
    pub fn new(behavior: impl Draw + 'static) -> Self {
        Self {
            behavior: Rc::new(behavior),
        }
    }
}

impl fmt::Debug for RenderComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderComponent").finish_non_exhaustive()
    }
}

impl ElementMut<'_> {
    /// Attach a render component drawing with `draw`.
    pub fn render<F>(&mut self, draw: F) -> &mut Self
    where
        F: Fn(&mut RenderCx<'_>, &mut dyn Canvas) -> Result<()> + 'static,
    {
        self.add_component(RenderComponent::new(draw))
    }
}

// ---------------------------------------------------------------------------
// RenderCx
// ---------------------------------------------------------------------------

/// What a draw behavior sees: its element, resolved providers, its bounds and
/// the element's paint.
pub struct RenderCx<'a> {
    tree: &'a mut Tree,
    providers: &'a Providers,
    element: ElementId,
    bounds: Rect,
    paint: Paint,
}

impl RenderCx<'_> {
    /// The element being drawn.
    pub fn element(&self) -> ElementId {
        self.element
    }

    /// Bounds from the last layout pass, relative to the parent. Drawing
    /// happens in local space: `(0, 0)` is the top-left of these bounds.
    pub fn bounds(&self) -> Rect {
        self.bounds
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

    /// The element's paint, shared by its render layers for this pass only.
    pub fn paint(&mut self) -> &mut Paint {
        &mut self.paint
    }
}

// ---------------------------------------------------------------------------
// RenderPass
// ---------------------------------------------------------------------------

/// Entry point of the render pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderPass;

impl RenderPass {
    /// Draw the subtree at `root` onto `canvas`.
    pub fn run(tree: &mut Tree, root: ElementId, canvas: &mut dyn Canvas) -> Result<()> {
        log::trace!("render pass: {root:?}");
        let mut providers = Providers::new();
        draw(tree, &mut providers, root, canvas)
    }
}

fn draw(
    tree: &mut Tree,
    providers: &mut Providers,
    id: ElementId,
    canvas: &mut dyn Canvas,
) -> Result<()> {
    let mark = providers.enter(tree, id)?;
    let store = tree.components(id)?;
    let bounds = store
        .get_optional::<LayoutComponent>()
        .map(|layout| layout.bounds);
    let layers: Vec<RenderComponent> = store.iter::<RenderComponent>().cloned().collect();

    let offset = bounds.map_or(Point::ZERO, Rect::origin);
    let moved = offset != Point::ZERO;
    if moved {
        canvas.translate(offset);
    }

    let result = draw_contents(tree, providers, id, bounds, layers, canvas);

    // Undo the translation even when a layer failed.
    if moved {
        canvas.translate(-offset);
    }
    providers.restore(mark);
    result
}

fn draw_contents(
    tree: &mut Tree,
    providers: &mut Providers,
    id: ElementId,
    bounds: Option<Rect>,
    layers: Vec<RenderComponent>,
    canvas: &mut dyn Canvas,
) -> Result<()> {
    if !layers.is_empty() {
        let mut cx = RenderCx {
            tree: &mut *tree,
            providers: &*providers,
            element: id,
            bounds: bounds.unwrap_or(Rect::EMPTY),
            paint: Paint::default(),
        };
        for layer in layers {
            layer.behavior.draw(&mut cx, canvas)?;
        }
    }

    for child in tree.children(id).to_vec() {
        draw(tree, providers, child, canvas)?;
    }
    Ok(())
}
