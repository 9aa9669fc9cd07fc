//! Rendering: drawing-surface interface, paint state, and the render pass.

pub mod canvas;
pub mod pass;

pub use canvas::{Canvas, Color, Paint, TextMeasurer, TextMetrics, TextStyle};
pub use pass::{Draw, RenderComponent, RenderCx, RenderPass};
