//! A canvas that records draw calls as text.
//!
//! [`RecordingCanvas`] formats every call it receives into one line, which
//! makes render output easy to compare with `assert_eq!` or an inline insta
//! snapshot. Text is measured with a [`FixedTextMeasurer`].

use std::fmt;

use crate::geometry::{Point, Rect};
use crate::render::{Canvas, Paint, TextMeasurer, TextMetrics, TextStyle};

// ---------------------------------------------------------------------------
// FixedTextMeasurer
// ---------------------------------------------------------------------------

/// Monospace text measurement that ignores the font size.
///
/// Every character is `char_width` wide; every line has the same ascent and
/// descent. The default is 8 wide, ascent 8, descent 2, so `"Hello"`
/// measures 40×10.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedTextMeasurer {
    pub char_width: f32,
    pub ascent: f32,
    pub descent: f32,
}

impl FixedTextMeasurer {
    pub const fn new(char_width: f32, ascent: f32, descent: f32) -> Self {
        Self {
            char_width,
            ascent,
            descent,
        }
    }
}

impl Default for FixedTextMeasurer {
    fn default() -> Self {
        Self::new(8.0, 8.0, 2.0)
    }
}

impl TextMeasurer for FixedTextMeasurer {
    fn measure_text(&self, text: &str, _style: &TextStyle) -> TextMetrics {
        TextMetrics {
            width: text.chars().count() as f32 * self.char_width,
            ascent: self.ascent,
            descent: self.descent,
        }
    }
}

// ---------------------------------------------------------------------------
// RecordingCanvas
// ---------------------------------------------------------------------------

/// A [`Canvas`] that keeps a log of the calls made on it.
///
/// # Examples
///
/// ```
/// use apex_ui::geometry::Rect;
/// use apex_ui::render::{Canvas, Paint};
/// use apex_ui::testing::RecordingCanvas;
///
/// let mut canvas = RecordingCanvas::new();
/// canvas.fill_rect(Rect::new(0.0, 0.0, 4.0, 2.0), &Paint::default());
/// assert_eq!(canvas.commands(), ["fill_rect(0, 0, 4, 2) #000000"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    commands: Vec<String>,
    origin: Point,
    measurer: FixedTextMeasurer,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `measurer` for text instead of the default metrics.
    pub fn with_measurer(measurer: FixedTextMeasurer) -> Self {
        Self {
            measurer,
            ..Self::default()
        }
    }

    /// Every recorded call, in order.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Accumulated translation. Zero after a balanced render pass.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.origin = Point::ZERO;
    }

    fn record(&mut self, command: String) {
        log::trace!("canvas: {command}");
        self.commands.push(command);
    }
}

fn rect_args(rect: Rect) -> String {
    format!("{}, {}, {}, {}", rect.x, rect.y, rect.width, rect.height)
}

impl TextMeasurer for RecordingCanvas {
    fn measure_text(&self, text: &str, style: &TextStyle) -> TextMetrics {
        self.measurer.measure_text(text, style)
    }
}

impl Canvas for RecordingCanvas {
    fn translate(&mut self, offset: Point) {
        self.origin = self.origin + offset;
        self.record(format!("translate({}, {})", offset.x, offset.y));
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        self.record(format!("fill_rect({}) {}", rect_args(rect), paint.color));
    }

    fn stroke_rect(&mut self, rect: Rect, paint: &Paint) {
        self.record(format!(
            "stroke_rect({}) {} w={}",
            rect_args(rect),
            paint.color,
            paint.stroke_width
        ));
    }

    fn fill_round_rect(&mut self, rect: Rect, radius: f32, paint: &Paint) {
        self.record(format!(
            "fill_round_rect({}, r={radius}) {}",
            rect_args(rect),
            paint.color
        ));
    }

    fn stroke_round_rect(&mut self, rect: Rect, radius: f32, paint: &Paint) {
        self.record(format!(
            "stroke_round_rect({}, r={radius}) {} w={}",
            rect_args(rect),
            paint.color,
            paint.stroke_width
        ));
    }

    fn draw_text(&mut self, text: &str, baseline: Point, paint: &Paint) {
        self.record(format!(
            "draw_text({text:?} at {}, {}) {}",
            baseline.x, baseline.y, paint.color
        ));
    }
}

impl fmt::Display for RecordingCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.commands.join("\n"))
    }
}
