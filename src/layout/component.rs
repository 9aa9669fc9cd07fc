//! Layout components: the measurement behavior, padding and alignment hints.

use std::fmt;
use std::rc::Rc;

use super::pass::LayoutCx;
use crate::element::ElementMut;
use crate::error::Result;
use crate::geometry::{Rect, Size, Spacing};

// ---------------------------------------------------------------------------
// Measure
// ---------------------------------------------------------------------------

/// Measurement behavior: given the largest size the parent will grant, return
/// the size this element wants.
///
/// Implemented for any matching closure.
pub trait Measure {
    fn measure(&self, cx: &mut LayoutCx<'_>, constraint: Size) -> Result<Size>;
}

impl<F> Measure for F
where
    F: Fn(&mut LayoutCx<'_>, Size) -> Result<Size>,
{
    fn measure(&self, cx: &mut LayoutCx<'_>, constraint: Size) -> Result<Size> {
        self(cx, constraint)
    }
}

// ---------------------------------------------------------------------------
// LayoutComponent
// ---------------------------------------------------------------------------

/// Holds an element's last computed bounds and its measurement behavior.
///
/// `bounds` is relative to the parent's origin. Its size is written by the
/// layout pass after measuring; its origin is written by whoever places the
/// element (the parent's behavior, or the pass for the root).
pub struct LayoutComponent {
    pub bounds: Rect,
    pub min_size: Size,
    pub max_size: Size,
    behavior: Rc<dyn Measure>,
}

impl LayoutComponent {
    /// Wrap a measurement behavior. Min size defaults to empty, max to unbounded.
    pub fn new(behavior: impl Measure + 'static) -> Self {
        Self {
            bounds: Rect::EMPTY,
            min_size: Size::EMPTY,
            max_size: Size::UNBOUNDED,
            behavior: Rc::new(behavior),
        }
    }

    /// Override the minimum size (builder).
    pub fn with_min_size(mut self, min_size: Size) -> Self {
        self.min_size = min_size;
        self
    }

    /// Override the maximum size (builder).
    pub fn with_max_size(mut self, max_size: Size) -> Self {
        self.max_size = max_size;
        self
    }

    pub(crate) fn behavior(&self) -> Rc<dyn Measure> {
        Rc::clone(&self.behavior)
    }
}

impl fmt::Debug for LayoutComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutComponent")
            .field("bounds", &self.bounds)
            .field("min_size", &self.min_size)
            .field("max_size", &self.max_size)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Padding / alignment
// ---------------------------------------------------------------------------

/// Space reserved between an element's bounds and its content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub spacing: Spacing,
}

impl Padding {
    pub const fn new(spacing: Spacing) -> Self {
        Self { spacing }
    }

    /// Same padding on all four sides.
    pub const fn all(value: f32) -> Self {
        Self { spacing: Spacing::all(value) }
    }
}

/// Placement along one axis of content smaller than the space it gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlignment {
    #[default]
    Start,
    Center,
    End,
}

/// Vertical counterpart of [`HorizontalAlignment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlignment {
    #[default]
    Start,
    Center,
    End,
}

impl HorizontalAlignment {
    /// Offset from the start edge given `free` leftover space.
    pub fn offset(self, free: f32) -> f32 {
        let free = free.max(0.0);
        match self {
            Self::Start => 0.0,
            Self::Center => free * 0.5,
            Self::End => free,
        }
    }
}

impl VerticalAlignment {
    /// Offset from the top edge given `free` leftover space.
    pub fn offset(self, free: f32) -> f32 {
        let free = free.max(0.0);
        match self {
            Self::Start => 0.0,
            Self::Center => free * 0.5,
            Self::End => free,
        }
    }
}

// ---------------------------------------------------------------------------
// Builder helpers
// ---------------------------------------------------------------------------

impl ElementMut<'_> {
    /// Attach a layout component measuring with `measure`.
    pub fn layout<F>(&mut self, measure: F) -> &mut Self
    where
        F: Fn(&mut LayoutCx<'_>, Size) -> Result<Size> + 'static,
    {
        self.add_component(LayoutComponent::new(measure))
    }

    /// Attach padding.
    pub fn padding(&mut self, spacing: Spacing) -> &mut Self {
        self.add_component(Padding::new(spacing))
    }

    /// Attach a horizontal alignment hint.
    pub fn horizontal_alignment(&mut self, alignment: HorizontalAlignment) -> &mut Self {
        self.add_component(alignment)
    }

    /// Attach a vertical alignment hint.
    pub fn vertical_alignment(&mut self, alignment: VerticalAlignment) -> &mut Self {
        self.add_component(alignment)
    }
}
