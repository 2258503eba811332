#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All values are logical points (`f64`) with the origin at the top-left of
//! the host surface. Constructors accept anything. [`Size::clamped`],
//! [`EdgeInsets::clamped`] and [`Rect::inset_by`] never produce a negative
//! width or height; [`Rect::lerp`] is unclamped so overshooting curves carry
//! through.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Zero-area size.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Check if either dimension is zero (or negative).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Copy of this size with negative or non-finite dimensions replaced by 0.
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self::new(non_negative(self.width), non_negative(self.height))
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Left edge (alias for x).
    #[inline]
    pub const fn min_x(&self) -> f64 {
        self.x
    }

    /// Top edge (alias for y).
    #[inline]
    pub const fn min_y(&self) -> f64 {
        self.y
    }

    /// Right edge.
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Shrink the rectangle by `insets`.
    ///
    /// Width and height never go below zero; an over-inset rectangle
    /// collapses onto its inset origin.
    pub fn inset_by(&self, insets: EdgeInsets) -> Rect {
        Rect {
            x: self.x + insets.left,
            y: self.y + insets.top,
            width: non_negative(self.width - insets.horizontal_sum()),
            height: non_negative(self.height - insets.vertical_sum()),
        }
    }

    /// Linear interpolation between `self` (t = 0) and `to` (t = 1).
    ///
    /// `t` is not clamped so overshooting curves carry through.
    pub fn lerp(&self, to: &Rect, t: f64) -> Rect {
        Rect {
            x: lerp(self.x, to.x, t),
            y: lerp(self.y, to.y, t),
            width: lerp(self.width, to.width, t),
            height: lerp(self.height, to.height, t),
        }
    }
}

/// Insets from each edge of a rectangle, used for margins and safe areas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EdgeInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl EdgeInsets {
    /// No insets.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create insets with specific values.
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Create insets with equal values.
    pub const fn all(val: f64) -> Self {
        Self::new(val, val, val, val)
    }

    /// Sum of left and right.
    #[inline]
    pub fn horizontal_sum(&self) -> f64 {
        self.left + self.right
    }

    /// Sum of top and bottom.
    #[inline]
    pub fn vertical_sum(&self) -> f64 {
        self.top + self.bottom
    }

    /// Copy with negative or non-finite insets replaced by 0.
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self::new(
            non_negative(self.top),
            non_negative(self.left),
            non_negative(self.bottom),
            non_negative(self.right),
        )
    }
}

/// Horizontal reading direction of the host surface.
///
/// Decides which physical edge "leading" and "trailing" refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl LayoutDirection {
    /// True if the leading edge is the left edge.
    #[inline]
    pub const fn leading_is_left(self) -> bool {
        matches!(self, Self::LeftToRight)
    }
}

#[inline]
fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[inline]
fn non_negative(val: f64) -> f64 {
    if val.is_finite() && val > 0.0 { val } else { 0.0 }
}
