//! A stock measurement behavior: children stacked inside the element's padding.

use super::component::{HorizontalAlignment, Padding, VerticalAlignment};
use super::pass::LayoutCx;
use crate::element::ElementMut;
use crate::error::Result;
use crate::geometry::{Point, Size, Spacing};

/// Measure every child inside the element's [`Padding`] and wrap them.
///
/// The element's size is the largest child plus padding. Each child is then
/// placed inside the padded area according to the element's alignment
/// components (start/start when absent).
pub fn content_box(cx: &mut LayoutCx<'_>, constraint: Size) -> Result<Size> {
    let padding = cx
        .component_optional::<Padding>()
        .map_or(Spacing::ZERO, |padding| padding.spacing);
    let horizontal = cx
        .component_optional::<HorizontalAlignment>()
        .copied()
        .unwrap_or_default();
    let vertical = cx
        .component_optional::<VerticalAlignment>()
        .copied()
        .unwrap_or_default();

    let inner = constraint.shrink(padding);
    let mut measured = Vec::new();
    let mut content = Size::EMPTY;
    for child in cx.children() {
        if let Some(size) = cx.measure_child(child, inner)? {
            content = content.max(size);
            measured.push((child, size));
        }
    }

    for (child, size) in measured {
        let origin = Point::new(
            padding.left + horizontal.offset(content.width - size.width),
            padding.top + vertical.offset(content.height - size.height),
        );
        cx.place_child(child, origin)?;
    }

    Ok(content.grow(padding))
}

impl ElementMut<'_> {
    /// Attach [`content_box`] as this element's layout.
    pub fn content_box(&mut self) -> &mut Self {
        self.layout(content_box)
    }
}
