//! Elements of the UI tree
//!
//! An [`Element`] carries a shared computed style, an ordered child list and
//! the geometry written back by the layout pass. What kind of content it has
//! (plain box, text, replaced content) is a tagged [`ElementKind`].

use crate::geometry::{Point, Size};
use crate::style::ComputedStyle;
use crate::text::FontFaceHandle;
use crate::tree::element_box::ElementBox;
use std::fmt;
use std::sync::Arc;

/// Index of an element inside its [`ElementTree`](crate::tree::ElementTree)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub(crate) usize);

impl ElementId {
  pub fn index(self) -> usize {
    self.0
  }
}

impl fmt::Display for ElementId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// A generated line of a text element
///
/// `position` is relative to the element's content box; its `y` is the
/// baseline of the line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextLine {
  pub position: Point,
  pub text: String,
}

/// Text payload of a text element
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextContent {
  pub text: String,
  /// Face used for measurement; `None` measures as zero metrics
  pub font_face: Option<FontFaceHandle>,
  /// Lines from the last layout pass, top to bottom
  pub lines: Vec<TextLine>,
}

impl TextContent {
  pub fn new(text: impl Into<String>, font_face: Option<FontFaceHandle>) -> Self {
    Self {
      text: text.into(),
      font_face,
      lines: Vec::new(),
    }
  }
}

/// Natural size of replaced content such as an image
///
/// `ratio` is width / height; zero or negative means no ratio.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IntrinsicDimensions {
  pub width: f32,
  pub height: f32,
  pub ratio: f32,
}

impl IntrinsicDimensions {
  pub fn new(width: f32, height: f32, ratio: f32) -> Self {
    Self {
      width,
      height,
      ratio,
    }
  }

  /// Intrinsic size with the ratio derived from it
  pub fn from_size(width: f32, height: f32) -> Self {
    let ratio = if height > 0.0 { width / height } else { 0.0 };
    Self::new(width, height, ratio)
  }

  /// True when both sizes are finite and non-negative
  pub fn is_valid(&self) -> bool {
    Size::new(self.width, self.height).is_valid_extent()
  }
}

/// What an element contains
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ElementKind {
  /// A plain box whose size comes from style and children
  #[default]
  Container,
  Text(TextContent),
  Replaced(IntrinsicDimensions),
}

impl ElementKind {
  fn name(&self) -> &'static str {
    match self {
      ElementKind::Container => "box",
      ElementKind::Text(_) => "text",
      ElementKind::Replaced(_) => "replaced",
    }
  }
}

/// A node of the element tree
#[derive(Debug, Clone)]
pub struct Element {
  pub(crate) style: Arc<ComputedStyle>,
  pub(crate) kind: ElementKind,
  pub(crate) id: Option<String>,
  pub(crate) tag: Option<String>,
  pub(crate) parent: Option<ElementId>,
  pub(crate) children: Vec<ElementId>,

  pub(crate) layout_box: ElementBox,
  pub(crate) relative_offset: Point,
  pub(crate) offset_parent: Option<ElementId>,
  pub(crate) scrollable_overflow: Size,
  pub(crate) scroll_offset: Point,
}

impl Element {
  pub(crate) fn new(style: Arc<ComputedStyle>, kind: ElementKind) -> Self {
    Self {
      style,
      kind,
      id: None,
      tag: None,
      parent: None,
      children: Vec::new(),
      layout_box: ElementBox::default(),
      relative_offset: Point::ZERO,
      offset_parent: None,
      scrollable_overflow: Size::ZERO,
      scroll_offset: Point::ZERO,
    }
  }

  pub fn style(&self) -> &ComputedStyle {
    &self.style
  }

  pub fn style_arc(&self) -> &Arc<ComputedStyle> {
    &self.style
  }

  pub fn kind(&self) -> &ElementKind {
    &self.kind
  }

  /// The `id` attribute, if any
  pub fn id(&self) -> Option<&str> {
    self.id.as_deref()
  }

  pub fn tag(&self) -> &str {
    self.tag.as_deref().unwrap_or_else(|| self.kind.name())
  }

  pub fn parent(&self) -> Option<ElementId> {
    self.parent
  }

  /// Child ids in document order
  pub fn children(&self) -> &[ElementId] {
    &self.children
  }

  pub fn num_children(&self) -> usize {
    self.children.len()
  }

  pub fn text(&self) -> Option<&TextContent> {
    match &self.kind {
      ElementKind::Text(text) => Some(text),
      _ => None,
    }
  }

  pub(crate) fn text_mut(&mut self) -> Option<&mut TextContent> {
    match &mut self.kind {
      ElementKind::Text(text) => Some(text),
      _ => None,
    }
  }

  pub fn is_text(&self) -> bool {
    matches!(self.kind, ElementKind::Text(_))
  }

  /// Lines generated by the last layout pass; empty for non-text elements
  pub fn lines(&self) -> &[TextLine] {
    self.text().map(|t| t.lines.as_slice()).unwrap_or(&[])
  }

  /// Intrinsic dimensions, only when the element is replaced content with a
  /// usable size
  pub fn intrinsic_dimensions(&self) -> Option<IntrinsicDimensions> {
    match self.kind {
      ElementKind::Replaced(dims) if dims.is_valid() => Some(dims),
      _ => None,
    }
  }

  pub fn layout_box(&self) -> &ElementBox {
    &self.layout_box
  }

  /// Border-box origin relative to the offset parent's border-box origin
  pub fn relative_border_offset(&self) -> Point {
    self.relative_offset
  }

  pub fn offset_parent(&self) -> Option<ElementId> {
    self.offset_parent
  }

  pub fn scrollable_overflow(&self) -> Size {
    self.scrollable_overflow
  }

  pub fn scroll_offset(&self) -> Point {
    self.scroll_offset
  }

  /// Size of the padding box, which is the scrolled viewport
  pub fn client_size(&self) -> Size {
    self.layout_box.size(crate::tree::BoxArea::Padding)
  }
}
