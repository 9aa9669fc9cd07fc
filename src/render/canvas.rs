//! Drawing surface interface and the per-element paint state.
//!
//! The core never rasterizes anything. A backend implements [`Canvas`] (and
//! [`TextMeasurer`], which layout also needs) and render behaviors issue
//! primitive draw calls against it in element-local coordinates.

use crate::geometry::{Point, Rect};

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color with explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Each channel inverted, alpha kept. Used as the pressed-state tint.
    pub const fn complementary(self) -> Self {
        Self {
            r: 255 - self.r,
            g: 255 - self.g,
            b: 255 - self.b,
            a: self.a,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

// ---------------------------------------------------------------------------
// Paint
// ---------------------------------------------------------------------------

/// Draw state handed to render behaviors.
///
/// A fresh `Paint` is created for every element the render pass visits and
/// dropped when the pass leaves it; nothing carries over between elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub stroke_width: f32,
    pub text: TextStyle,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            stroke_width: 1.0,
            text: TextStyle::default(),
        }
    }
}

impl Paint {
    /// Set the color (builder).
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// Font selection for measuring and drawing text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub family: Option<String>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 14.0,
            family: None,
        }
    }
}

/// Result of measuring one line of text.
///
/// `ascent` is the distance from the baseline up to the top of the line, so
/// the baseline of text drawn at `y` sits at `y + ascent`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMetrics {
    pub width: f32,
    pub ascent: f32,
    pub descent: f32,
}

impl TextMetrics {
    /// Line height: ascent plus descent.
    pub fn height(&self) -> f32 {
        self.ascent + self.descent
    }
}

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// Text measurement, shared by layout (sizing) and rendering (placement).
pub trait TextMeasurer {
    fn measure_text(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

/// A drawing surface.
///
/// All coordinates are relative to the current origin, which the render pass
/// moves with [`translate`](Canvas::translate) as it descends the tree.
pub trait Canvas: TextMeasurer {
    /// Move the origin by `offset`.
    fn translate(&mut self, offset: Point);

    fn fill_rect(&mut self, rect: Rect, paint: &Paint);

    fn stroke_rect(&mut self, rect: Rect, paint: &Paint);

    fn fill_round_rect(&mut self, rect: Rect, radius: f32, paint: &Paint);

    fn stroke_round_rect(&mut self, rect: Rect, radius: f32, paint: &Paint);

    /// Draw `text` with its baseline at `baseline`.
    fn draw_text(&mut self, text: &str, baseline: Point, paint: &Paint);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complementary_inverts_channels() {
        let c = Color::rgba(10, 200, 255, 128);
        assert_eq!(c.complementary(), Color::rgba(245, 55, 0, 128));
        assert_eq!(c.complementary().complementary(), c);
    }

    #[test]
    fn color_display() {
        assert_eq!(Color::rgb(255, 0, 16).to_string(), "#ff0010");
        assert_eq!(Color::rgba(0, 0, 0, 0).to_string(), "#00000000");
    }

    #[test]
    fn text_metrics_height() {
        let m = TextMetrics { width: 40.0, ascent: 8.0, descent: 2.0 };
        assert_eq!(m.height(), 10.0);
    }

    #[test]
    fn paint_defaults() {
        let paint = Paint::default();
        assert_eq!(paint.color, Color::BLACK);
        assert_eq!(paint.with_color(Color::WHITE).color, Color::WHITE);
    }
}
