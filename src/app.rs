//! App struct: owns the tree and drives frames and pointer input.
//!
//! [`App`] ties together the element tree, the viewport and the pointer
//! dispatcher. It has no event loop of its own: the host calls
//! [`frame`](App::frame) once per frame and [`dispatch`](App::dispatch) for
//! every pointer event it receives.

use crate::element::{ElementId, ElementMut, Tree};
use crate::error::Result;
use crate::event::{MotionInputPass, PointerAction, PointerEvent};
use crate::geometry::Size;
use crate::layout::LayoutPass;
use crate::render::{Canvas, RenderPass};

// ---------------------------------------------------------------------------
// AppConfig
// ---------------------------------------------------------------------------

/// Configuration for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Constraint handed to the root on every layout pass.
    pub viewport: Size,
    /// Whether a resize aborts a gesture in progress.
    pub cancel_on_resize: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            viewport: Size::UNBOUNDED,
            cancel_on_resize: true,
        }
    }
}

impl AppConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the viewport (builder).
    pub fn with_viewport(mut self, viewport: Size) -> Self {
        self.viewport = viewport;
        self
    }

    /// Set whether resizing cancels a gesture (builder).
    pub fn with_cancel_on_resize(mut self, cancel: bool) -> Self {
        self.cancel_on_resize = cancel;
        self
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// The frame driver.
///
/// Layout runs at the start of every [`frame`](App::frame), so pointer
/// events dispatched between frames hit-test against the bounds of the
/// last frame.
#[derive(Debug)]
pub struct App {
    /// The element tree.
    pub tree: Tree,
    /// Application configuration.
    pub config: AppConfig,
    root: ElementId,
    input: MotionInputPass,
    size: Option<Size>,
}

impl App {
    /// Build the tree by running `content` against a fresh root element.
    pub fn new(config: AppConfig, content: impl FnOnce(&mut ElementMut<'_>)) -> Self {
        let mut tree = Tree::new();
        let root = tree.create_root(content);
        Self::with_tree(config, tree, root)
    }

    /// Drive an already built tree from `root`.
    pub fn with_tree(config: AppConfig, tree: Tree, root: ElementId) -> Self {
        Self {
            tree,
            config,
            root,
            input: MotionInputPass::new(),
            size: None,
        }
    }

    /// The element every pass starts from.
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// Root size from the last layout, if the root has a layout component.
    pub fn size(&self) -> Option<Size> {
        self.size
    }

    /// The element holding the pointer, if a gesture is in progress.
    pub fn captured(&self) -> Option<ElementId> {
        self.input.captured()
    }

    /// Run the layout pass under the viewport.
    pub fn layout(&mut self) -> Result<Option<Size>> {
        self.size = LayoutPass::run(&mut self.tree, self.root, self.config.viewport)?;
        Ok(self.size)
    }

    /// Lay out, then draw onto `canvas`.
    pub fn frame(&mut self, canvas: &mut dyn Canvas) -> Result<()> {
        self.layout()?;
        RenderPass::run(&mut self.tree, self.root, canvas)
    }

    /// Route a pointer event. Returns the element that handled it.
    pub fn dispatch(&mut self, event: &PointerEvent) -> Result<Option<ElementId>> {
        self.input.dispatch(&mut self.tree, self.root, event)
    }

    /// Change the viewport. Takes effect on the next layout.
    ///
    /// With [`AppConfig::cancel_on_resize`], a gesture in progress receives
    /// `Cancel` first.
    pub fn resize(&mut self, viewport: Size) -> Result<()> {
        log::debug!("resize to {viewport:?}");
        self.config.viewport = viewport;
        if self.config.cancel_on_resize && self.input.captured().is_some() {
            let cancel = PointerEvent::new(PointerAction::Cancel, Default::default());
            self.dispatch(&cancel)?;
        }
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
