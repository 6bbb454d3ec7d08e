//! Layout application
//!
//! Copies solved geometry back onto the element tree. The solver tree is
//! consumed into a [`SolvedLayout`] first so the element tree can be borrowed
//! mutably; the applier then walks elements and solved nodes in lock-step.
//!
//! Per element it writes the box, the border-box offset relative to the
//! offset parent, the scrollable overflow, and for text the regenerated
//! lines.

use crate::geometry::{Point, Size};
use crate::layout::measure::{face_metrics, text_baseline, MAX_LINE_ITERATIONS};
use crate::layout::tree_builder::{live_children, LayoutNode, LayoutTree};
use crate::text::{FontEngine, FontFaceHandle};
use crate::tree::{BoxArea, ElementBox, ElementId, ElementTree, TextLine};
use taffy::{Layout, NodeId};

/// Solved geometry detached from the element tree borrow
#[derive(Debug, Clone)]
pub struct SolvedLayout {
  nodes: Vec<LayoutNode>,
  root_element_node: NodeId,
}

impl LayoutTree<'_> {
  /// Consumes the solver tree, keeping only the solved nodes
  pub fn into_solved(self) -> SolvedLayout {
    SolvedLayout {
      root_element_node: self.root_element_node(),
      nodes: self.nodes,
    }
  }
}

impl SolvedLayout {
  pub fn root_element_node(&self) -> NodeId {
    self.root_element_node
  }

  pub fn node(&self, id: NodeId) -> Option<&LayoutNode> {
    self.nodes.get(usize::from(id))
  }

  /// Final (possibly pixel snapped) layout of a node
  pub fn layout(&self, id: NodeId) -> Option<&Layout> {
    self.node(id).map(|node| &node.final_layout)
  }
}

/// Converts a solved layout into an element box
///
/// The solver reports the border-box size; the content size is what remains
/// after padding and border, floored at zero.
pub fn element_box_from_layout(layout: &Layout) -> ElementBox {
  let padding = edges(layout.padding);
  let border = edges(layout.border);
  let content = Size::new(
    layout.size.width - padding.horizontal() - border.horizontal(),
    layout.size.height - padding.vertical() - border.vertical(),
  )
  .floor_zero();
  ElementBox {
    content,
    padding,
    border,
    margin: edges(layout.margin),
  }
}

fn edges(rect: taffy::geometry::Rect<f32>) -> crate::geometry::EdgeOffsets {
  crate::geometry::EdgeOffsets::new(rect.top, rect.right, rect.bottom, rect.left)
}

/// Lays out the lines of a text element
///
/// The first baseline sits at `floor(text_baseline)`; each further line is
/// `line_height` lower. Line positions are relative to the content box. Text
/// that yields no lines (empty, or no face) still gets one empty line at the
/// baseline.
///
/// # Examples
///
/// ```
/// use boxlayout::layout::generate_text_lines;
/// use boxlayout::text::{FixedAdvanceFontEngine, FixedFace, FontMetrics};
///
/// let mut fonts = FixedAdvanceFontEngine::new();
/// let face = fonts.add_face(FixedFace {
///   metrics: FontMetrics::new(8.0, -2.0),
///   advance: 10.0,
/// });
/// let lines = generate_text_lines(&fonts, "aa bb", Some(face), 20.0, 30.0);
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[0].text, "aa");
/// assert_eq!(lines[1].position.y, 33.0);
/// ```
pub fn generate_text_lines(
  fonts: &dyn FontEngine,
  text: &str,
  face: Option<FontFaceHandle>,
  line_height: f32,
  available_width: f32,
) -> Vec<TextLine> {
  let baseline = text_baseline(face_metrics(fonts, face), line_height).floor();
  let max_width = available_width.max(0.0);

  let mut lines = Vec::new();
  if let Some(face) = face {
    let mut begin = 0;
    for _ in 0..MAX_LINE_ITERATIONS {
      let line = fonts.generate_line(face, text, begin, max_width);
      if line.consumed == 0 {
        break;
      }
      lines.push(TextLine {
        position: Point::new(0.0, baseline + lines.len() as f32 * line_height),
        text: line.text,
      });
      begin += line.consumed;
      if line.reached_end {
        break;
      }
    }
  }

  if lines.is_empty() {
    lines.push(TextLine {
      position: Point::new(0.0, baseline),
      text: String::new(),
    });
  }
  lines
}

/// Writes solved geometry onto an element subtree
pub struct LayoutApplier<'a> {
  solved: &'a SolvedLayout,
  fonts: &'a dyn FontEngine,
  trace_geometry: bool,
}

impl<'a> LayoutApplier<'a> {
  pub fn new(solved: &'a SolvedLayout, fonts: &'a dyn FontEngine) -> Self {
    Self {
      solved,
      fonts,
      trace_geometry: false,
    }
  }

  /// Logs each element's geometry at `trace` level
  pub fn with_trace_geometry(mut self, enabled: bool) -> Self {
    self.trace_geometry = enabled;
    self
  }

  /// Applies `node` to `element` and recurses into children
  ///
  /// `parent_content_position` is added to the solved location, which is
  /// relative to the parent's border-box origin. Children always receive
  /// `(0, 0)` and this element as their offset parent.
  pub fn apply(
    &self,
    elements: &mut ElementTree,
    element: ElementId,
    node: NodeId,
    offset_parent: Option<ElementId>,
    parent_content_position: Point,
  ) {
    let Some(layout_node) = self.solved.node(node) else {
      return;
    };
    let layout = layout_node.final_layout;
    let layout_box = element_box_from_layout(&layout);
    let border_position =
      parent_content_position.translate(Point::new(layout.location.x, layout.location.y));

    if elements
      .set_offset(element, border_position, offset_parent)
      .and_then(|_| elements.set_box(element, layout_box))
      .is_err()
    {
      return;
    }

    let children: Vec<ElementId> = match elements.get(element) {
      Some(e) => live_children(elements, e).collect(),
      None => return,
    };
    let node_children = layout_node.children();
    if children.len() != node_children.len() {
      log::warn!(
        "layout tree out of sync at {}: {} children vs {} layout nodes",
        elements.debug_name(element),
        children.len(),
        node_children.len()
      );
    }
    debug_assert_eq!(children.len(), node_children.len());

    let content_position = layout_box.position(BoxArea::Content);
    let mut content_overflow = Size::ZERO;
    for (&child, &child_node) in children.iter().zip(node_children) {
      debug_assert_eq!(
        self.solved.node(child_node).and_then(|n| n.element()),
        Some(child)
      );
      self.apply(elements, child, child_node, Some(element), Point::ZERO);
      let Some(child_element) = elements.get(child) else {
        continue;
      };
      let offset = child_element
        .relative_border_offset()
        .relative_to(content_position);
      let border_size = child_element.layout_box().size(BoxArea::Border);
      content_overflow = content_overflow.max(Size::new(
        offset.x + border_size.width,
        offset.y + border_size.height,
      ));
    }

    let padding_size = layout_box.size(BoxArea::Padding);
    let padding_origin = layout_box.padding.top_left();
    let scrollable = padding_size.max(Size::new(
      padding_origin.x + content_overflow.width,
      padding_origin.y + content_overflow.height,
    ));
    if let Some(e) = elements.get_mut(element) {
      e.scrollable_overflow = scrollable;
      let line_height = e.style().line_height;
      if let Some(content) = e.text_mut() {
        content.lines = generate_text_lines(
          self.fonts,
          &content.text,
          content.font_face,
          line_height,
          layout_box.content.width,
        );
      }
    }

    if self.trace_geometry {
      log::trace!(
        "{} border@{} content {} padding {} border {} margin {} overflow {}",
        elements.debug_name(element),
        border_position,
        layout_box.content,
        layout_box.padding,
        layout_box.border,
        layout_box.margin,
        scrollable
      );
    }
  }
}
