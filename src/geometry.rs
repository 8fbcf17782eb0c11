//! Geometry primitives for page placement and clipping
//!
//! All values are f32 CSS pixels with the origin at the top-left corner:
//! positive X extends right, positive Y extends down. The viewer only ever
//! deals in axis-aligned rectangles, so this module stays deliberately small.

/// A 2D point in CSS pixel space.
///
/// # Examples
///
/// ```
/// use docpane::Point;
///
/// let p = Point::new(10.0, 20.0);
/// assert_eq!(p.x, 10.0);
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
  /// The origin (0, 0).
  pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

  /// Creates a new point at the given coordinates.
  pub const fn new(x: f32, y: f32) -> Self {
    Self { x, y }
  }
}

/// A 2D size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
  /// Horizontal extent
  pub width: f32,
  /// Vertical extent
  pub height: f32,
}

impl Size {
  /// A size with zero width and height.
  pub const ZERO: Self = Self {
    width: 0.0,
    height: 0.0,
  };

  /// Creates a new size.
  pub const fn new(width: f32, height: f32) -> Self {
    Self { width, height }
  }

  /// Returns true if either dimension is zero or negative.
  pub fn is_empty(self) -> bool {
    self.width <= 0.0 || self.height <= 0.0
  }
}

/// An axis-aligned rectangle.
///
/// Stored as top-left corner plus extent. Page descriptors, clip regions and
/// surface bounds all use this type.
///
/// # Examples
///
/// ```
/// use docpane::Rect;
///
/// let r = Rect::new(10.0, 20.0, 100.0, 50.0);
/// assert_eq!(r.max_x(), 110.0);
/// assert_eq!(r.max_y(), 70.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
  /// X coordinate of the left edge
  pub x: f32,
  /// Y coordinate of the top edge
  pub y: f32,
  /// Horizontal extent
  pub width: f32,
  /// Vertical extent
  pub height: f32,
}

impl Rect {
  /// A zero-sized rectangle at the origin.
  pub const ZERO: Self = Self {
    x: 0.0,
    y: 0.0,
    width: 0.0,
    height: 0.0,
  };

  /// Creates a rectangle from its top-left corner and extent.
  pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
    Self {
      x,
      y,
      width,
      height,
    }
  }

  /// Creates a rectangle at the origin covering `size`.
  pub const fn from_size(size: Size) -> Self {
    Self {
      x: 0.0,
      y: 0.0,
      width: size.width,
      height: size.height,
    }
  }

  /// Returns the x coordinate of the right edge.
  pub fn max_x(self) -> f32 {
    self.x + self.width
  }

  /// Returns the y coordinate of the bottom edge.
  pub fn max_y(self) -> f32 {
    self.y + self.height
  }

  /// Returns the size of the rectangle.
  pub fn size(self) -> Size {
    Size::new(self.width, self.height)
  }

  /// Returns true if the rectangle covers no area.
  pub fn is_empty(self) -> bool {
    self.width <= 0.0 || self.height <= 0.0
  }

  /// Returns true if this rectangle overlaps `other`.
  ///
  /// Rectangles that merely touch at an edge are considered overlapping,
  /// matching how clip regions behave on most drawing surfaces.
  pub fn intersects(self, other: Rect) -> bool {
    self.x <= other.max_x()
      && self.max_x() >= other.x
      && self.y <= other.max_y()
      && self.max_y() >= other.y
  }

  /// Computes the overlap of two rectangles.
  ///
  /// Returns `None` when the rectangles are disjoint.
  ///
  /// # Examples
  ///
  /// ```
  /// use docpane::Rect;
  ///
  /// let a = Rect::new(0.0, 0.0, 10.0, 10.0);
  /// let b = Rect::new(5.0, 5.0, 10.0, 10.0);
  /// assert_eq!(a.intersection(b), Some(Rect::new(5.0, 5.0, 5.0, 5.0)));
  /// ```
  pub fn intersection(self, other: Rect) -> Option<Rect> {
    if !self.intersects(other) {
      return None;
    }

    let x = self.x.max(other.x);
    let y = self.y.max(other.y);
    let max_x = self.max_x().min(other.max_x());
    let max_y = self.max_y().min(other.max_y());

    Some(Rect::new(x, y, max_x - x, max_y - y))
  }

  /// Moves the rectangle by the given deltas without changing its size.
  pub fn translate(self, dx: f32, dy: f32) -> Rect {
    Rect::new(self.x + dx, self.y + dy, self.width, self.height)
  }

  /// Grows (or shrinks, for negative `amount`) the rectangle by the same
  /// amount on all four edges.
  ///
  /// # Examples
  ///
  /// ```
  /// use docpane::Rect;
  ///
  /// let r = Rect::new(10.0, 10.0, 20.0, 20.0);
  /// assert_eq!(r.inflate(1.0), Rect::new(9.0, 9.0, 22.0, 22.0));
  /// assert_eq!(r.inflate(-1.0), Rect::new(11.0, 11.0, 18.0, 18.0));
  /// ```
  pub fn inflate(self, amount: f32) -> Rect {
    Rect::new(
      self.x - amount,
      self.y - amount,
      self.width + 2.0 * amount,
      self.height + 2.0 * amount,
    )
  }

  /// Shrinks the rectangle by per-edge offsets.
  ///
  /// Used to derive a page's content box from its margin box.
  pub fn inset(self, offsets: EdgeOffsets) -> Rect {
    Rect::new(
      self.x + offsets.left,
      self.y + offsets.top,
      self.width - offsets.horizontal(),
      self.height - offsets.vertical(),
    )
  }
}

/// Per-edge offsets in CSS box-model order: top, right, bottom, left.
///
/// Pages report their combined margin, border and padding through this type.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeOffsets {
  /// Top edge offset
  pub top: f32,
  /// Right edge offset
  pub right: f32,
  /// Bottom edge offset
  pub bottom: f32,
  /// Left edge offset
  pub left: f32,
}

impl EdgeOffsets {
  /// Offsets of zero on every edge.
  pub const ZERO: Self = Self {
    top: 0.0,
    right: 0.0,
    bottom: 0.0,
    left: 0.0,
  };

  /// Creates offsets in top, right, bottom, left order.
  pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
    Self {
      top,
      right,
      bottom,
      left,
    }
  }

  /// Creates equal offsets on all four edges.
  pub const fn all(value: f32) -> Self {
    Self {
      top: value,
      right: value,
      bottom: value,
      left: value,
    }
  }

  /// Combined left and right offsets.
  pub fn horizontal(self) -> f32 {
    self.left + self.right
  }

  /// Combined top and bottom offsets.
  pub fn vertical(self) -> f32 {
    self.top + self.bottom
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn intersection_of_disjoint_rects_is_none() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(20.0, 20.0, 10.0, 10.0);
    assert_eq!(a.intersection(b), None);
  }

  #[test]
  fn intersection_of_touching_rects_is_zero_area() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(10.0, 0.0, 10.0, 10.0);
    let overlap = a.intersection(b).unwrap();
    assert!(overlap.is_empty());
  }

  #[test]
  fn inflate_applies_symmetrically_on_all_edges() {
    let r = Rect::new(5.0, 7.0, 30.0, 40.0);
    let grown = r.inflate(1.0);
    assert_eq!(grown.x, 4.0);
    assert_eq!(grown.y, 6.0);
    assert_eq!(grown.max_x(), 36.0);
    assert_eq!(grown.max_y(), 48.0);
  }

  #[test]
  fn inset_shrinks_by_each_edge() {
    let r = Rect::new(0.0, 0.0, 100.0, 80.0);
    let offsets = EdgeOffsets::new(10.0, 5.0, 15.0, 20.0);
    let inner = r.inset(offsets);
    assert_eq!(inner, Rect::new(20.0, 10.0, 75.0, 55.0));
  }
}
