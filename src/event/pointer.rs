//! Pointer event types.
//!
//! Defines [`PointerEvent`] and [`PointerAction`]. With the `crossterm`
//! feature, terminal mouse events convert via `From` so hosts never build
//! pointer events by hand.

use crate::geometry::Point;

// ---------------------------------------------------------------------------
// PointerAction
// ---------------------------------------------------------------------------

/// What the pointer did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerAction {
    /// Pressed. Starts a gesture.
    Down,
    /// Released. Ends a gesture.
    Up,
    /// Moved, pressed or not.
    Move,
    /// The gesture was aborted by the host, or the pointer was released
    /// outside the element that captured it.
    Cancel,
    /// Anything else (scroll, hover enter/exit). Behaviors usually ignore it.
    Other,
}

// ---------------------------------------------------------------------------
// PointerEvent
// ---------------------------------------------------------------------------

/// A single pointer event.
///
/// `position` is in root coordinates when handed to the dispatcher. Motion
/// input behaviors receive a copy translated into their element's local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub position: Point,
}

impl PointerEvent {
    pub const fn new(action: PointerAction, position: Point) -> Self {
        Self { action, position }
    }

    pub const fn down(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Down, Point::new(x, y))
    }

    pub const fn up(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Up, Point::new(x, y))
    }

    pub const fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Move, Point::new(x, y))
    }

    pub const fn cancel(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Cancel, Point::new(x, y))
    }

    /// Same event at another position.
    pub fn with_position(self, position: Point) -> Self {
        Self { position, ..self }
    }

    /// Same position, another action.
    pub fn with_action(self, action: PointerAction) -> Self {
        Self { action, ..self }
    }
}

// ---------------------------------------------------------------------------
// From<crossterm>
// ---------------------------------------------------------------------------

/// Only the left-button lifecycle and movement are meaningful; scroll and
/// the other buttons map to [`PointerAction::Other`].
#[cfg(feature = "crossterm")]
impl From<crossterm::event::MouseEvent> for PointerEvent {
    fn from(ct: crossterm::event::MouseEvent) -> Self {
        use crossterm::event::{MouseButton, MouseEventKind};

        let action = match ct.kind {
            MouseEventKind::Down(MouseButton::Left) => PointerAction::Down,
            MouseEventKind::Up(MouseButton::Left) => PointerAction::Up,
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => PointerAction::Move,
            _ => PointerAction::Other,
        };
        PointerEvent::new(action, Point::new(f32::from(ct.column), f32::from(ct.row)))
    }
}
