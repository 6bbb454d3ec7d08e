//! Arena that owns every element
//!
//! Elements are addressed by [`ElementId`]. Removing an element frees its
//! slot; ids of removed elements stay invalid forever and every lookup
//! through them returns `None`, so traversals skip them.

use crate::error::{Result, TreeError};
use crate::geometry::{Point, Size};
use crate::style::ComputedStyle;
use crate::text::FontFaceHandle;
use crate::tree::element::{Element, ElementId, ElementKind, IntrinsicDimensions, TextContent};
use crate::tree::element_box::{BoxArea, ElementBox};
use std::sync::Arc;

/// Characters of text shown by [`ElementTree::debug_name`]
const DEBUG_TEXT_CHARS: usize = 20;

/// Owner of all elements of a document
#[derive(Debug, Clone, Default)]
pub struct ElementTree {
  slots: Vec<Option<Element>>,
}

impl ElementTree {
  pub fn new() -> Self {
    Self::default()
  }

  fn insert(&mut self, element: Element) -> ElementId {
    let id = ElementId(self.slots.len());
    self.slots.push(Some(element));
    id
  }

  /// Creates a detached plain box
  pub fn create_element(&mut self, style: impl Into<Arc<ComputedStyle>>) -> ElementId {
    self.insert(Element::new(style.into(), ElementKind::Container))
  }

  /// Creates a detached text element
  pub fn create_text(
    &mut self,
    style: impl Into<Arc<ComputedStyle>>,
    text: impl Into<String>,
    font_face: Option<FontFaceHandle>,
  ) -> ElementId {
    let content = TextContent::new(text, font_face);
    self.insert(Element::new(style.into(), ElementKind::Text(content)))
  }

  /// Creates a detached replaced element
  pub fn create_replaced(
    &mut self,
    style: impl Into<Arc<ComputedStyle>>,
    intrinsic: IntrinsicDimensions,
  ) -> ElementId {
    self.insert(Element::new(style.into(), ElementKind::Replaced(intrinsic)))
  }

  pub fn get(&self, id: ElementId) -> Option<&Element> {
    self.slots.get(id.0).and_then(Option::as_ref)
  }

  pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
    self.slots.get_mut(id.0).and_then(Option::as_mut)
  }

  pub fn contains(&self, id: ElementId) -> bool {
    self.get(id).is_some()
  }

  fn require(&self, id: ElementId) -> Result<&Element> {
    self.get(id).ok_or_else(|| TreeError::StaleElement { id: id.0 }.into())
  }

  fn require_mut(&mut self, id: ElementId) -> Result<&mut Element> {
    self
      .get_mut(id)
      .ok_or_else(|| TreeError::StaleElement { id: id.0 }.into())
  }

  /// Number of live elements
  pub fn len(&self) -> usize {
    self.slots.iter().filter(|slot| slot.is_some()).count()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Children of `id`, empty for a removed element
  pub fn children(&self, id: ElementId) -> &[ElementId] {
    self.get(id).map(Element::children).unwrap_or(&[])
  }

  pub fn parent(&self, id: ElementId) -> Option<ElementId> {
    self.get(id).and_then(Element::parent)
  }

  /// Appends `child` as the last child of `parent`
  pub fn append_child(&mut self, parent: ElementId, child: ElementId) -> Result<()> {
    self.require(parent)?;
    if let Some(current) = self.require(child)?.parent {
      return Err(
        TreeError::AlreadyAttached {
          parent: current.0,
          child: child.0,
        }
        .into(),
      );
    }
    let mut ancestor = Some(parent);
    while let Some(id) = ancestor {
      if id == child {
        return Err(
          TreeError::Cycle {
            parent: parent.0,
            child: child.0,
          }
          .into(),
        );
      }
      ancestor = self.parent(id);
    }

    self.require_mut(child)?.parent = Some(parent);
    self.require_mut(parent)?.children.push(child);
    Ok(())
  }

  /// Detaches `id` from its parent and frees it together with its subtree
  pub fn remove(&mut self, id: ElementId) -> Result<()> {
    let parent = self.require(id)?.parent;
    if let Some(parent) = parent.and_then(|p| self.get_mut(p)) {
      parent.children.retain(|&c| c != id);
    }
    let mut stack = vec![id];
    while let Some(next) = stack.pop() {
      if let Some(element) = self.slots.get_mut(next.0).and_then(Option::take) {
        stack.extend(element.children);
      }
    }
    Ok(())
  }

  /// Sets the `id` attribute used for debug naming
  pub fn set_id(&mut self, id: ElementId, value: impl Into<String>) -> Result<()> {
    self.require_mut(id)?.id = Some(value.into());
    Ok(())
  }

  pub fn set_tag(&mut self, id: ElementId, tag: impl Into<String>) -> Result<()> {
    self.require_mut(id)?.tag = Some(tag.into());
    Ok(())
  }

  /// Replaces the computed style snapshot
  pub fn set_style(&mut self, id: ElementId, style: impl Into<Arc<ComputedStyle>>) -> Result<()> {
    self.require_mut(id)?.style = style.into();
    Ok(())
  }

  /// Replaces the text of a text element; other kinds are left untouched
  pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) -> Result<()> {
    if let Some(content) = self.require_mut(id)?.text_mut() {
      content.text = text.into();
    }
    Ok(())
  }

  /// Records the border-box offset of `id` relative to `offset_parent`
  ///
  /// Only this element changes; ancestors are not re-laid out.
  pub fn set_offset(
    &mut self,
    id: ElementId,
    offset: Point,
    offset_parent: Option<ElementId>,
  ) -> Result<()> {
    let element = self.require_mut(id)?;
    element.relative_offset = offset;
    element.offset_parent = offset_parent;
    Ok(())
  }

  pub fn set_box(&mut self, id: ElementId, layout_box: ElementBox) -> Result<()> {
    self.require_mut(id)?.layout_box = layout_box;
    Ok(())
  }

  pub fn set_scrollable_overflow(&mut self, id: ElementId, size: Size) -> Result<()> {
    self.require_mut(id)?.scrollable_overflow = size;
    Ok(())
  }

  /// Sets the scroll offset without clamping
  ///
  /// Clamping happens at the end of the next layout pass, or explicitly via
  /// [`ElementTree::clamp_scroll_offset`].
  pub fn set_scroll_offset(&mut self, id: ElementId, offset: Point) -> Result<()> {
    self.require_mut(id)?.scroll_offset = offset;
    Ok(())
  }

  /// Position of `area` relative to the offset parent's border-box origin
  pub fn relative_offset(&self, id: ElementId, area: BoxArea) -> Option<Point> {
    let element = self.get(id)?;
    Some(
      element
        .relative_offset
        .translate(element.layout_box.position(area)),
    )
  }

  /// Position of `area` relative to the root of the offset-parent chain,
  /// accounting for the scroll offsets of every offset parent
  pub fn absolute_offset(&self, id: ElementId, area: BoxArea) -> Option<Point> {
    let element = self.get(id)?;
    let mut offset = element
      .relative_offset
      .translate(element.layout_box.position(area));
    let mut next = element.offset_parent;
    // Offset parents are always tree ancestors, bound the walk regardless.
    let mut remaining = self.slots.len();
    while let Some(parent) = next.and_then(|p| self.get(p)) {
      if remaining == 0 {
        break;
      }
      remaining -= 1;
      offset = offset
        .translate(parent.relative_offset)
        .relative_to(parent.scroll_offset);
      next = parent.offset_parent;
    }
    Some(offset)
  }

  /// Clamps the scroll offset of `id` into `[0, overflow - client size]`
  pub fn clamp_scroll_offset(&mut self, id: ElementId) -> Result<()> {
    let element = self.require_mut(id)?;
    let client = element.client_size();
    let max = Size::new(
      element.scrollable_overflow.width - client.width,
      element.scrollable_overflow.height - client.height,
    )
    .floor_zero();
    let current = element.scroll_offset;
    element.scroll_offset = Point::new(
      current.x.min(max.width).max(0.0),
      current.y.min(max.height).max(0.0),
    );
    Ok(())
  }

  /// Clamps scroll offsets of `id` and every live descendant
  pub fn clamp_scroll_offset_recursive(&mut self, id: ElementId) -> Result<()> {
    self.require(id)?;
    let mut stack = vec![id];
    while let Some(next) = stack.pop() {
      if !self.contains(next) {
        continue;
      }
      self.clamp_scroll_offset(next)?;
      stack.extend(self.children(next).iter().rev().copied());
    }
    Ok(())
  }

  /// Short human readable name used in log output
  ///
  /// `#id` when the element has an id, the quoted start of its text for text
  /// elements, otherwise `<tag>@index`.
  pub fn debug_name(&self, id: ElementId) -> String {
    let Some(element) = self.get(id) else {
      return "null".to_string();
    };
    if let Some(value) = element.id().filter(|v| !v.is_empty()) {
      return format!("#{value}");
    }
    if let Some(text) = element.text() {
      let head: String = text.text.trim().chars().take(DEBUG_TEXT_CHARS).collect();
      return format!("\"{head}\"");
    }
    format!("<{}>@{}", element.tag(), id.0)
  }

  /// Drops a slot without detaching it from its parent
  #[cfg(test)]
  pub(crate) fn forget(&mut self, id: ElementId) {
    if let Some(slot) = self.slots.get_mut(id.0) {
      *slot = None;
    }
  }
}
