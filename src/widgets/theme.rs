//! Ambient values the stock widgets read from providers.
//!
//! Publish a [`Theme`], a [`Density`] and a [`Fonts`] near the root with
//! [`ElementMut::provider`](crate::element::ElementMut::provider); any
//! subtree may shadow them.

use std::fmt;
use std::rc::Rc;

use crate::geometry::Spacing;
use crate::render::{Color, TextMeasurer, TextMetrics, TextStyle};

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Which parts of a widget's frame are painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeStyle {
    #[default]
    Fill,
    Stroke,
    FillAndStroke,
}

/// Colors and metrics shared by widgets. Lengths are in density-independent
/// units; convert them with [`Density::px`].
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub content_background: Color,
    pub content_disabled: Color,
    pub border: Color,
    pub disabled: Color,
    pub text: Color,
    pub corner_radius: f32,
    pub stroke_width: f32,
    pub font_size: f32,
    pub font_family: Option<String>,
    pub style: ThemeStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            content_background: Color::rgb(0x62, 0x00, 0xee),
            content_disabled: Color::rgb(0xbd, 0xbd, 0xbd),
            border: Color::rgb(0x37, 0x00, 0xb3),
            disabled: Color::rgb(0x9e, 0x9e, 0x9e),
            text: Color::WHITE,
            corner_radius: 4.0,
            stroke_width: 1.0,
            font_size: 14.0,
            font_family: None,
            style: ThemeStyle::Fill,
        }
    }
}

impl Theme {
    /// Set the frame style (builder).
    pub fn with_style(mut self, style: ThemeStyle) -> Self {
        self.style = style;
        self
    }

    /// Whether frames are filled.
    pub fn fills(&self) -> bool {
        self.style != ThemeStyle::Stroke
    }

    /// Whether frames are outlined.
    pub fn strokes(&self) -> bool {
        self.style != ThemeStyle::Fill
    }

    /// Text style for labels at `density`.
    pub fn text_style(&self, density: &Density) -> TextStyle {
        TextStyle {
            size: density.px(self.font_size),
            family: self.font_family.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Density
// ---------------------------------------------------------------------------

/// Pixels per density-independent unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Density {
    pub density: f32,
}

impl Density {
    pub const fn new(density: f32) -> Self {
        Self { density }
    }

    /// Convert a length to pixels.
    pub fn px(&self, dp: f32) -> f32 {
        dp * self.density
    }

    /// Convert every side of `spacing` to pixels.
    pub fn px_spacing(&self, spacing: Spacing) -> Spacing {
        spacing.scale(self.density)
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::new(1.0)
    }
}

// ---------------------------------------------------------------------------
// Fonts
// ---------------------------------------------------------------------------

/// Text measurement available during layout, where no canvas exists.
#[derive(Clone)]
pub struct Fonts(Rc<dyn TextMeasurer>);

impl Fonts {
    pub fn new(measurer: impl TextMeasurer + 'static) -> Self {
        Self(Rc::new(measurer))
    }
}

impl TextMeasurer for Fonts {
    fn measure_text(&self, text: &str, style: &TextStyle) -> TextMetrics {
        self.0.measure_text(text, style)
    }
}

impl fmt::Debug for Fonts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Fonts(..)")
    }
}
