//! Press tracking and click callbacks.
//!
//! [`ElementMut::on_click`] turns an element with bounds into a clickable
//! target: a `Down` inside presses it, an `Up` while pressed fires the
//! callback once, and a `Cancel` drops the press. Disabled elements ignore
//! every event so it falls through to whatever is behind them.

use std::fmt;

use super::dispatch::InputCx;
use super::pointer::{PointerAction, PointerEvent};
use crate::element::{ElementId, ElementMut};
use crate::error::Result;

/// Whether an element accepts input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum State {
    #[default]
    Enabled,
    Disabled,
}

/// Per-element gesture state. Only the element's own click behavior
/// writes `pressed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InternalState {
    pub state: State,
    pressed: bool,
}

impl InternalState {
    pub fn new(state: State) -> Self {
        Self {
            state,
            pressed: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.state == State::Enabled
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}

/// The callback fired when a press is released inside the element.
pub struct OnClickModel {
    on_click: Box<dyn FnMut(ElementId)>,
}

impl OnClickModel {
    pub fn new(on_click: impl FnMut(ElementId) + 'static) -> Self {
        Self {
            on_click: Box::new(on_click),
        }
    }

    /// Replace the callback.
    pub fn set(&mut self, on_click: impl FnMut(ElementId) + 'static) {
        self.on_click = Box::new(on_click);
    }

    /// Invoke the callback for `element`.
    pub fn click(&mut self, element: ElementId) {
        (self.on_click)(element);
    }
}

impl Default for OnClickModel {
    fn default() -> Self {
        Self::new(|_| {})
    }
}

impl fmt::Debug for OnClickModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnClickModel").finish_non_exhaustive()
    }
}

/// The press state machine behind [`ElementMut::on_click`].
pub fn click_behavior(cx: &mut InputCx<'_>, event: &PointerEvent) -> Result<bool> {
    let element = cx.element();
    let state = cx.component_mut::<InternalState>()?;
    if !state.is_enabled() {
        return Ok(false);
    }

    match event.action {
        PointerAction::Down => {
            state.pressed = true;
            Ok(true)
        }
        PointerAction::Up => {
            let was_pressed = std::mem::replace(&mut state.pressed, false);
            if was_pressed {
                log::debug!("click on {element:?}");
                cx.component_mut::<OnClickModel>()?.click(element);
            }
            Ok(true)
        }
        PointerAction::Cancel => {
            state.pressed = false;
            Ok(true)
        }
        PointerAction::Move | PointerAction::Other => Ok(false),
    }
}

impl ElementMut<'_> {
    /// Make this element clickable.
    ///
    /// Adds an enabled [`InternalState`] unless the element already has one.
    pub fn on_click(&mut self, model: OnClickModel) -> &mut Self {
        if self.component_optional::<InternalState>().is_none() {
            self.add_component(InternalState::default());
        }
        self.add_component(model).motion_input(click_behavior)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Tree;
    use crate::event::MotionInputPass;
    use crate::geometry::Size;
    use crate::layout::{LayoutCx, LayoutPass};
    use std::cell::Cell;
    use std::rc::Rc;

    fn fixed(size: Size) -> impl Fn(&mut LayoutCx<'_>, Size) -> Result<Size> {
        move |_, _| Ok(size)
    }

    fn clickable(state: State) -> (Tree, ElementId, Rc<Cell<u32>>) {
        let clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&clicks);
        let mut tree = Tree::new();
        let root = tree.create_root(|e| {
            e.layout(fixed(Size::new(20.0, 10.0)))
                .add_component(InternalState::new(state))
                .on_click(OnClickModel::new(move |_| counter.set(counter.get() + 1)));
        });
        LayoutPass::run(&mut tree, root, Size::UNBOUNDED).unwrap();
        (tree, root, clicks)
    }

    fn pressed(tree: &Tree, id: ElementId) -> bool {
        tree.component::<InternalState>(id).unwrap().is_pressed()
    }

    #[test]
    fn down_then_up_clicks_once() {
        let (mut tree, root, clicks) = clickable(State::Enabled);
        let mut pass = MotionInputPass::new();
        pass.dispatch(&mut tree, root, &PointerEvent::down(5.0, 5.0))
            .unwrap();
        assert!(pressed(&tree, root));
        pass.dispatch(&mut tree, root, &PointerEvent::up(6.0, 5.0))
            .unwrap();
        assert!(!pressed(&tree, root));
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn down_then_cancel_never_clicks() {
        let (mut tree, root, clicks) = clickable(State::Enabled);
        let mut pass = MotionInputPass::new();
        pass.dispatch(&mut tree, root, &PointerEvent::down(5.0, 5.0))
            .unwrap();
        pass.dispatch(&mut tree, root, &PointerEvent::cancel(5.0, 5.0))
            .unwrap();
        assert!(!pressed(&tree, root));
        assert_eq!(clicks.get(), 0);
    }

    #[test]
    fn release_outside_never_clicks() {
        let (mut tree, root, clicks) = clickable(State::Enabled);
        let mut pass = MotionInputPass::new();
        pass.dispatch(&mut tree, root, &PointerEvent::down(5.0, 5.0))
            .unwrap();
        pass.dispatch(&mut tree, root, &PointerEvent::up(50.0, 50.0))
            .unwrap();
        assert!(!pressed(&tree, root));
        assert_eq!(clicks.get(), 0);
    }

    #[test]
    fn disabled_ignores_everything() {
        let (mut tree, root, clicks) = clickable(State::Disabled);
        let mut pass = MotionInputPass::new();
        let down = pass
            .dispatch(&mut tree, root, &PointerEvent::down(5.0, 5.0))
            .unwrap();
        assert_eq!(down, None);
        assert!(!pressed(&tree, root));
        let up = pass
            .dispatch(&mut tree, root, &PointerEvent::up(5.0, 5.0))
            .unwrap();
        assert_eq!(up, None);
        assert_eq!(clicks.get(), 0);
    }

    #[test]
    fn up_without_press_is_consumed() {
        let (mut tree, root, clicks) = clickable(State::Enabled);
        let mut pass = MotionInputPass::new();
        let up = pass
            .dispatch(&mut tree, root, &PointerEvent::up(5.0, 5.0))
            .unwrap();
        assert_eq!(up, Some(root));
        assert_eq!(clicks.get(), 0);
    }

    #[test]
    fn movement_is_not_handled() {
        let (mut tree, root, _) = clickable(State::Enabled);
        let mut pass = MotionInputPass::new();
        let moved = pass
            .dispatch(&mut tree, root, &PointerEvent::moved(5.0, 5.0))
            .unwrap();
        assert_eq!(moved, None);
    }

    #[test]
    fn on_click_keeps_existing_state() {
        let mut tree = Tree::new();
        let root = tree.create_root(|e| {
            e.add_component(InternalState::new(State::Disabled))
                .on_click(OnClickModel::default());
        });
        let store = tree.components(root).unwrap();
        assert_eq!(store.count::<InternalState>(), 1);
        assert!(!store.get::<InternalState>().unwrap().is_enabled());
    }

    #[test]
    fn on_click_adds_enabled_state() {
        let mut tree = Tree::new();
        let root = tree.create_root(|e| {
            e.on_click(OnClickModel::default());
        });
        assert!(tree.component::<InternalState>(root).unwrap().is_enabled());
    }

    #[test]
    fn model_callback_can_be_replaced() {
        let hits = Rc::new(Cell::new(0));
        let probe = Rc::clone(&hits);
        let mut model = OnClickModel::default();
        model.set(move |_| probe.set(probe.get() + 10));
        model.click(ElementId::default());
        assert_eq!(hits.get(), 10);
    }
}
