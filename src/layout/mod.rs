//! Layout: measurement components, the constraint-down/size-up pass, and the
//! stock padded content box.

pub mod component;
pub mod content_box;
pub mod pass;

pub use component::{HorizontalAlignment, LayoutComponent, Measure, Padding, VerticalAlignment};
pub use content_box::content_box;
pub use pass::{LayoutCx, LayoutPass};
