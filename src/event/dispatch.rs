//! Pointer dispatch: hit testing, bubbling and implicit capture.
//!
//! [`MotionInputPass`] routes each [`PointerEvent`] to elements carrying a
//! [`MotionInputComponent`]. Uncaptured events go to the hit candidates
//! front-to-back until one reports handled. The element that handles `Down`
//! captures the pointer until the gesture ends with `Up` or `Cancel`.

use std::fmt;
use std::rc::Rc;

use super::hit_test::HitMap;
use super::pointer::{PointerAction, PointerEvent};
use crate::component::ComponentStore;
use crate::element::{ElementId, ElementMut, Tree};
use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::provider::Providers;

// ---------------------------------------------------------------------------
// MotionInput / MotionInputComponent
// ---------------------------------------------------------------------------

/// Pointer behavior. Returns whether the event was handled.
///
/// Implemented for any matching closure.
pub trait MotionInput {
    fn motion_input(&self, cx: &mut InputCx<'_>, event: &PointerEvent) -> Result<bool>;
}

impl<F> MotionInput for F
where
    F: Fn(&mut InputCx<'_>, &PointerEvent) -> Result<bool>,
{
    fn motion_input(&self, cx: &mut InputCx<'_>, event: &PointerEvent) -> Result<bool> {
        self(cx, event)
    }
}

/// Marks an element as interactive and holds its pointer behavior.
///
/// Several may be attached; they are tried in attachment order until one
/// handles the event.
#[derive(Clone)]
pub struct MotionInputComponent {
    behavior: Rc<dyn MotionInput>,
}

impl MotionInputComponent {
    pub fn new(behavior: impl MotionInput + 'static) -> Self {
        Self {
            behavior: Rc::new(behavior),
        }
    }
}

impl fmt::Debug for MotionInputComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MotionInputComponent").finish_non_exhaustive()
    }
}

impl ElementMut<'_> {
    /// Attach a motion input component handling events with `handler`.
    pub fn motion_input<F>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(&mut InputCx<'_>, &PointerEvent) -> Result<bool> + 'static,
    {
        self.add_component(MotionInputComponent::new(handler))
    }
}

// ---------------------------------------------------------------------------
// InputCx
// ---------------------------------------------------------------------------

/// What a motion input behavior sees: its element, the providers resolved
/// from the root down to it, and its absolute bounds.
pub struct InputCx<'a> {
    tree: &'a mut Tree,
    providers: &'a Providers,
    element: ElementId,
    bounds: Rect,
}

impl InputCx<'_> {
    /// The element receiving the event.
    pub fn element(&self) -> ElementId {
        self.element
    }

    /// Bounds in root coordinates. The event position handed to the
    /// behavior is already relative to `bounds().origin()`.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Whether a local position falls inside this element.
    pub fn contains(&self, local: Point) -> bool {
        self.bounds.size().to_rect().contains(local)
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
}

/// Run `id`'s motion input behaviors on `event` (root coordinates).
fn deliver(tree: &mut Tree, id: ElementId, event: &PointerEvent) -> Result<bool> {
    let handlers: Vec<MotionInputComponent> = tree
        .components(id)?
        .iter::<MotionInputComponent>()
        .cloned()
        .collect();
    if handlers.is_empty() {
        return Ok(false);
    }

    let providers = Providers::resolve_for(tree, id)?;
    let bounds = tree.absolute_bounds(id).unwrap_or(Rect::EMPTY);
    let local = event.with_position(event.position - bounds.origin());
    let mut cx = InputCx {
        tree: &mut *tree,
        providers: &providers,
        element: id,
        bounds,
    };
    for handler in handlers {
        if handler.behavior.motion_input(&mut cx, &local)? {
            log::trace!("{:?} handled by {id:?}", event.action);
            return Ok(true);
        }
    }
    Ok(false)
}

// ---------------------------------------------------------------------------
// MotionInputPass
// ---------------------------------------------------------------------------

/// Pointer dispatcher. Holds the current capture between events.
///
/// Routing rules:
///
/// - Without a capture, the event goes to every interactive element under
///   the pointer, frontmost first, until one handles it. An unhandled event
///   falls through to earlier siblings and then to ancestors.
/// - The element that handles `Down` captures the pointer.
/// - While captured, `Move` and `Cancel` go to the captured element only.
///   `Up` goes to it when released inside its bounds; released outside, it
///   receives `Cancel` instead. Either ends the capture.
/// - A new `Down` while captured cancels the old gesture first.
#[derive(Debug, Clone, Default)]
pub struct MotionInputPass {
    capture: Option<ElementId>,
}

impl MotionInputPass {
    pub fn new() -> Self {
        Self::default()
    }

    /// The element holding the pointer, if a gesture is in progress.
    pub fn captured(&self) -> Option<ElementId> {
        self.capture
    }

    /// Drop the capture without notifying the element.
    pub fn release(&mut self) {
        self.capture = None;
    }

    /// Route `event` through the subtree at `root`.
    ///
    /// Returns the element that handled it, if any.
    pub fn dispatch(
        &mut self,
        tree: &mut Tree,
        root: ElementId,
        event: &PointerEvent,
    ) -> Result<Option<ElementId>> {
        if let Some(target) = self.capture {
            if !tree.contains(target) {
                log::debug!("dropping capture of removed element {target:?}");
                self.capture = None;
            }
        }

        if let Some(target) = self.capture {
            match event.action {
                PointerAction::Up => {
                    self.capture = None;
                    let inside = tree
                        .absolute_bounds(target)
                        .is_some_and(|bounds| bounds.contains(event.position));
                    let event = if inside {
                        *event
                    } else {
                        log::debug!("pointer released outside {target:?}, cancelling");
                        event.with_action(PointerAction::Cancel)
                    };
                    log::debug!("pointer capture released by {target:?}");
                    return Ok(deliver(tree, target, &event)?.then_some(target));
                }
                PointerAction::Cancel => {
                    self.capture = None;
                    log::debug!("pointer capture cancelled for {target:?}");
                    return Ok(deliver(tree, target, event)?.then_some(target));
                }
                PointerAction::Move => {
                    return Ok(deliver(tree, target, event)?.then_some(target));
                }
                PointerAction::Down => {
                    self.capture = None;
                    log::debug!("new press while {target:?} held the pointer, cancelling");
                    deliver(tree, target, &event.with_action(PointerAction::Cancel))?;
                }
                PointerAction::Other => {}
            }
        }

        for id in HitMap::build(tree, root).hit_test(event.position) {
            if deliver(tree, id, event)? {
                if event.action == PointerAction::Down {
                    log::debug!("pointer captured by {id:?}");
                    self.capture = Some(id);
                }
                return Ok(Some(id));
            }
        }
        Ok(None)
    }
}
