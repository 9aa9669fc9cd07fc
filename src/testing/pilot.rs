//! Pilot: programmatic interaction with a headless App.
//!
//! The `Pilot` wraps an [`App`] and a [`RecordingCanvas`], and provides
//! methods to simulate pointer gestures and capture rendered frames as text.

use super::canvas::RecordingCanvas;
use crate::app::{App, AppConfig};
use crate::element::{ElementId, ElementMut};
use crate::error::Result;
use crate::event::PointerEvent;
use crate::geometry::Size;

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless app driver for testing.
///
/// # Examples
///
/// ```
/// use apex_ui::event::OnClickModel;
/// use apex_ui::geometry::Size;
/// use apex_ui::layout::LayoutCx;
/// use apex_ui::testing::Pilot;
///
/// let mut pilot = Pilot::new(Size::new(10.0, 10.0), |e| {
///     e.layout(|_: &mut LayoutCx<'_>, constraint: Size| Ok(constraint))
///         .on_click(OnClickModel::default());
/// });
/// pilot.layout().unwrap();
/// assert_eq!(pilot.click(5.0, 5.0).unwrap(), Some(pilot.app().root()));
/// ```
#[derive(Debug)]
pub struct Pilot {
    app: App,
    canvas: RecordingCanvas,
}

impl Pilot {
    /// Build an app with the given viewport around `content`.
    pub fn new(viewport: Size, content: impl FnOnce(&mut ElementMut<'_>)) -> Self {
        Self::with_app(App::new(AppConfig::new().with_viewport(viewport), content))
    }

    /// Drive an existing app.
    pub fn with_app(app: App) -> Self {
        Self {
            app,
            canvas: RecordingCanvas::new(),
        }
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Press at (x, y).
    pub fn press(&mut self, x: f32, y: f32) -> Result<Option<ElementId>> {
        self.app.dispatch(&PointerEvent::down(x, y))
    }

    /// Release at (x, y).
    pub fn release(&mut self, x: f32, y: f32) -> Result<Option<ElementId>> {
        self.app.dispatch(&PointerEvent::up(x, y))
    }

    /// Move to (x, y).
    pub fn move_to(&mut self, x: f32, y: f32) -> Result<Option<ElementId>> {
        self.app.dispatch(&PointerEvent::moved(x, y))
    }

    /// Abort the current gesture.
    pub fn cancel(&mut self) -> Result<Option<ElementId>> {
        self.app.dispatch(&PointerEvent::cancel(0.0, 0.0))
    }

    /// Press and release at (x, y). Returns the element that took the release.
    pub fn click(&mut self, x: f32, y: f32) -> Result<Option<ElementId>> {
        self.press(x, y)?;
        self.release(x, y)
    }

    // ── Frames ───────────────────────────────────────────────────────

    /// Run the layout pass only.
    pub fn layout(&mut self) -> Result<Option<Size>> {
        self.app.layout()
    }

    /// Render a full frame and return the recorded draw calls, one per line.
    pub fn frame(&mut self) -> Result<String> {
        self.canvas.clear();
        self.app.frame(&mut self.canvas)?;
        Ok(self.canvas.to_string())
    }

    /// The canvas of the last frame.
    pub fn canvas(&self) -> &RecordingCanvas {
        &self.canvas
    }

    // ── Query ────────────────────────────────────────────────────────

    /// Borrow the underlying app immutably.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Borrow the underlying app mutably.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

// ===========================================================================
// Tests
// ===========================================================================
