//! Core geometry types: Point, Size, Rect, Spacing.
//!
//! All values are logical units in `f32`. Bounds produced by the layout pass are
//! [`Rect`]s expressed in the coordinate space of the parent element.

use std::ops::{Add, Neg, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D position or displacement.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Point {
        Point { x: -self.x, y: -self.y }
    }
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// A 2D extent (width x height).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Zero by zero.
    pub const EMPTY: Size = Size { width: 0.0, height: 0.0 };

    /// Effectively unbounded in both directions.
    pub const UNBOUNDED: Size = Size { width: f32::MAX, height: f32::MAX };

    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Component-wise clamp into `[min, max]`.
    ///
    /// `max` wins when the two bounds disagree.
    #[inline]
    pub fn clamp(self, min: Size, max: Size) -> Size {
        Size {
            width: self.width.max(min.width).min(max.width),
            height: self.height.max(min.height).min(max.height),
        }
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Size) -> Size {
        Size {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Remove `spacing` from this size, saturating at zero.
    ///
    /// Unbounded dimensions stay unbounded.
    #[inline]
    pub fn shrink(self, spacing: Spacing) -> Size {
        fn dim(value: f32, by: f32) -> f32 {
            if value == f32::MAX {
                value
            } else {
                (value - by).max(0.0)
            }
        }
        Size {
            width: dim(self.width, spacing.width()),
            height: dim(self.height, spacing.height()),
        }
    }

    /// Add `spacing` around this size.
    #[inline]
    pub fn grow(self, spacing: Spacing) -> Size {
        Size {
            width: self.width + spacing.width(),
            height: self.height + spacing.height(),
        }
    }

    /// Convert to a [`Rect`] positioned at the origin.
    #[inline]
    pub const fn to_rect(self) -> Rect {
        Rect { x: 0.0, y: 0.0, width: self.width, height: self.height }
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// A rectangle defined by its top-left corner and size.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// An empty rect at the origin.
    pub const EMPTY: Rect = Rect { x: 0.0, y: 0.0, width: 0.0, height: 0.0 };

    /// Create a new rect.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Build a rect from an origin and a size.
    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { x: origin.x, y: origin.y, width: size.width, height: size.height }
    }

    /// The right edge (exclusive).
    #[inline]
    pub fn right(self) -> f32 {
        self.x + self.width
    }

    /// The bottom edge (exclusive).
    #[inline]
    pub fn bottom(self) -> f32 {
        self.y + self.height
    }

    /// The top-left corner.
    #[inline]
    pub const fn origin(self) -> Point {
        Point { x: self.x, y: self.y }
    }

    /// The dimensions.
    #[inline]
    pub const fn size(self) -> Size {
        Size { width: self.width, height: self.height }
    }

    /// Whether `point` lies inside this rect. Left/top edges are inclusive,
    /// right/bottom edges exclusive.
    #[inline]
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Whether `other` overlaps this rect (non-zero intersection area).
    #[inline]
    pub fn overlaps(self, other: Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Translate the rect by `offset`.
    #[inline]
    pub fn translate(self, offset: Point) -> Rect {
        Rect { x: self.x + offset.x, y: self.y + offset.y, ..self }
    }

    /// Same size, new origin.
    #[inline]
    pub fn with_origin(self, origin: Point) -> Rect {
        Rect { x: origin.x, y: origin.y, ..self }
    }

    /// Contract the rect inward by `spacing`. Dimensions are clamped to zero.
    #[inline]
    pub fn shrink(self, spacing: Spacing) -> Rect {
        Rect {
            x: self.x + spacing.left,
            y: self.y + spacing.top,
            width: (self.width - spacing.width()).max(0.0),
            height: (self.height - spacing.height()).max(0.0),
        }
    }
}

// ---------------------------------------------------------------------------
// Spacing
// ---------------------------------------------------------------------------

/// Spacing around the four sides of a rectangle, used for padding.
///
/// Field order of [`Spacing::new`] follows left, top, right, bottom.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Spacing {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Spacing {
    /// Zero spacing on all sides.
    pub const ZERO: Spacing = Spacing { left: 0.0, top: 0.0, right: 0.0, bottom: 0.0 };

    /// Create spacing with explicit left, top, right and bottom values.
    #[inline]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// All four sides set to the same value.
    #[inline]
    pub const fn all(value: f32) -> Self {
        Self { left: value, top: value, right: value, bottom: value }
    }

    /// Symmetric spacing: `horizontal` for left/right, `vertical` for top/bottom.
    #[inline]
    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self { left: horizontal, top: vertical, right: horizontal, bottom: vertical }
    }

    /// Total horizontal extent: `left + right`.
    #[inline]
    pub fn width(self) -> f32 {
        self.left + self.right
    }

    /// Total vertical extent: `top + bottom`.
    #[inline]
    pub fn height(self) -> f32 {
        self.top + self.bottom
    }

    /// Multiply every side by `factor`.
    #[inline]
    pub fn scale(self, factor: f32) -> Spacing {
        Spacing {
            left: self.left * factor,
            top: self.top * factor,
            right: self.right * factor,
            bottom: self.bottom * factor,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
