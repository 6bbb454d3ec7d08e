//! Per-element box geometry
//!
//! An [`ElementBox`] stores a content size plus padding, border and margin
//! edges. The four nested areas are derived from those:
//!
//! ```text
//! margin  = border  + margin edges
//! border  = padding + border edges
//! padding = content + padding edges
//! ```
//!
//! Positions returned by [`ElementBox::position`] are relative to the
//! top-left of the border area, which is also what element offsets refer to.

use crate::geometry::{EdgeOffsets, Point, Size};

/// One of the four nested box areas, outermost first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoxArea {
  Margin,
  Border,
  Padding,
  Content,
}

/// One side of a box area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoxEdge {
  Top,
  Right,
  Bottom,
  Left,
}

/// Box model geometry of one element
///
/// # Examples
///
/// ```
/// use boxlayout::geometry::{EdgeOffsets, Point, Size};
/// use boxlayout::tree::{BoxArea, ElementBox};
///
/// let mut b = ElementBox::new(Size::new(100.0, 50.0));
/// b.padding = EdgeOffsets::all(5.0);
/// b.border = EdgeOffsets::all(1.0);
/// b.margin = EdgeOffsets::all(10.0);
///
/// assert_eq!(b.size(BoxArea::Border), Size::new(112.0, 62.0));
/// assert_eq!(b.size(BoxArea::Margin), Size::new(132.0, 82.0));
/// assert_eq!(b.position(BoxArea::Content), Point::new(6.0, 6.0));
/// assert_eq!(b.position(BoxArea::Margin), Point::new(-10.0, -10.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementBox {
  pub content: Size,
  pub padding: EdgeOffsets,
  pub border: EdgeOffsets,
  pub margin: EdgeOffsets,
}

impl ElementBox {
  /// A box with the given content size and no edges
  pub fn new(content: Size) -> Self {
    Self {
      content,
      ..Self::default()
    }
  }

  pub fn set_content(&mut self, content: Size) {
    self.content = content;
  }

  /// Edges of `area`; the content area has none
  pub fn edges(&self, area: BoxArea) -> EdgeOffsets {
    match area {
      BoxArea::Margin => self.margin,
      BoxArea::Border => self.border,
      BoxArea::Padding => self.padding,
      BoxArea::Content => EdgeOffsets::ZERO,
    }
  }

  /// Sets one edge of `area`. Setting an edge of the content area is a no-op.
  pub fn set_edge(&mut self, area: BoxArea, edge: BoxEdge, value: f32) {
    let edges = match area {
      BoxArea::Margin => &mut self.margin,
      BoxArea::Border => &mut self.border,
      BoxArea::Padding => &mut self.padding,
      BoxArea::Content => return,
    };
    match edge {
      BoxEdge::Top => edges.top = value,
      BoxEdge::Right => edges.right = value,
      BoxEdge::Bottom => edges.bottom = value,
      BoxEdge::Left => edges.left = value,
    }
  }

  pub fn edge(&self, area: BoxArea, edge: BoxEdge) -> f32 {
    let edges = self.edges(area);
    match edge {
      BoxEdge::Top => edges.top,
      BoxEdge::Right => edges.right,
      BoxEdge::Bottom => edges.bottom,
      BoxEdge::Left => edges.left,
    }
  }

  /// Size of `area`: the content expanded by every area up to and including it
  pub fn size(&self, area: BoxArea) -> Size {
    let mut size = self.content;
    for inner in [BoxArea::Padding, BoxArea::Border, BoxArea::Margin] {
      if depth(inner) < depth(area) {
        break;
      }
      let edges = self.edges(inner);
      size.width += edges.horizontal();
      size.height += edges.vertical();
    }
    size
  }

  /// Top-left of `area` relative to the top-left of the border area
  pub fn position(&self, area: BoxArea) -> Point {
    match area {
      BoxArea::Margin => Point::new(-self.margin.left, -self.margin.top),
      BoxArea::Border => Point::ZERO,
      BoxArea::Padding => self.border.top_left(),
      BoxArea::Content => self.border.top_left().translate(self.padding.top_left()),
    }
  }
}

// Outermost area has the lowest depth.
fn depth(area: BoxArea) -> u8 {
  match area {
    BoxArea::Margin => 0,
    BoxArea::Border => 1,
    BoxArea::Padding => 2,
    BoxArea::Content => 3,
  }
}
