//! Geometry primitives shared by the box model and the layout pass
//!
//! All values are CSS pixels stored as `f32`. The origin sits at the
//! top-left corner with X growing to the right and Y growing downward.
//!
//! The layout pass writes these types back onto elements, so they stay
//! small, `Copy` and free of any solver-specific representation.

use std::fmt;

/// A 2D point in CSS pixel space
///
/// # Examples
///
/// ```
/// use boxlayout::Point;
///
/// let p = Point::new(10.0, 20.0);
/// assert_eq!(p.translate(Point::new(5.0, 5.0)), Point::new(15.0, 25.0));
/// assert_eq!(Point::ZERO, Point::new(0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
  /// Horizontal position, increases to the right
  pub x: f32,
  /// Vertical position, increases downward
  pub y: f32,
}

impl Point {
  /// The origin
  pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

  pub const fn new(x: f32, y: f32) -> Self {
    Self { x, y }
  }

  /// Offsets this point by another point's coordinates
  pub fn translate(self, other: Point) -> Self {
    Self {
      x: self.x + other.x,
      y: self.y + other.y,
    }
  }

  /// Returns the vector from `origin` to this point
  ///
  /// # Examples
  ///
  /// ```
  /// use boxlayout::Point;
  ///
  /// let child = Point::new(30.0, 40.0);
  /// let parent_content = Point::new(10.0, 10.0);
  /// assert_eq!(child.relative_to(parent_content), Point::new(20.0, 30.0));
  /// ```
  pub fn relative_to(self, origin: Point) -> Self {
    Self {
      x: self.x - origin.x,
      y: self.y - origin.y,
    }
  }
}

impl fmt::Display for Point {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}

/// A 2D size in CSS pixels
///
/// Sizes written by layout are never negative; intermediate values may be.
///
/// # Examples
///
/// ```
/// use boxlayout::Size;
///
/// let a = Size::new(100.0, 20.0);
/// let b = Size::new(40.0, 60.0);
/// assert_eq!(a.max(b), Size::new(100.0, 60.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
  pub width: f32,
  pub height: f32,
}

impl Size {
  /// A size with zero width and height
  pub const ZERO: Self = Self {
    width: 0.0,
    height: 0.0,
  };

  pub const fn new(width: f32, height: f32) -> Self {
    Self { width, height }
  }

  /// Component-wise maximum
  pub fn max(self, other: Size) -> Self {
    Self {
      width: self.width.max(other.width),
      height: self.height.max(other.height),
    }
  }

  /// Clamps both components to be at least zero
  pub fn floor_zero(self) -> Self {
    Self {
      width: self.width.max(0.0),
      height: self.height.max(0.0),
    }
  }

  /// Returns true if both components are finite and non-negative
  pub fn is_valid_extent(self) -> bool {
    self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
  }
}

impl fmt::Display for Size {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}x{}", self.width, self.height)
  }
}

/// Per-edge offsets used for margins, borders and padding
///
/// # Examples
///
/// ```
/// use boxlayout::EdgeOffsets;
///
/// let padding = EdgeOffsets::new(5.0, 10.0, 15.0, 20.0);
/// assert_eq!(padding.horizontal(), 30.0);
/// assert_eq!(padding.vertical(), 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeOffsets {
  pub top: f32,
  pub right: f32,
  pub bottom: f32,
  pub left: f32,
}

impl EdgeOffsets {
  pub const ZERO: Self = Self {
    top: 0.0,
    right: 0.0,
    bottom: 0.0,
    left: 0.0,
  };

  /// Creates offsets in CSS order: top, right, bottom, left
  pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
    Self {
      top,
      right,
      bottom,
      left,
    }
  }

  pub const fn all(value: f32) -> Self {
    Self::new(value, value, value, value)
  }

  /// Sum of left and right
  pub fn horizontal(self) -> f32 {
    self.left + self.right
  }

  /// Sum of top and bottom
  pub fn vertical(self) -> f32 {
    self.top + self.bottom
  }

  /// Top-left corner as a point
  pub fn top_left(self) -> Point {
    Point::new(self.left, self.top)
  }
}

impl fmt::Display for EdgeOffsets {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "[{} {} {} {}]",
      self.top, self.right, self.bottom, self.left
    )
  }
}
