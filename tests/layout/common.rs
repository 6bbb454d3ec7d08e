#![allow(dead_code)]

use boxlayout::style::{ComputedStyle, LengthPercentageAuto};
use boxlayout::text::{FixedAdvanceFontEngine, FixedFace, FontMetrics};
use boxlayout::tree::Element;
use boxlayout::{BoxArea, ElementId, ElementTree, FontFaceHandle, LayoutEngine, Point, Size};
use std::sync::Arc;

/// Glyph advance of the test face
pub const ADVANCE: f32 = 10.0;
/// ascent + |descent| of the test face
pub const FONT_HEIGHT: f32 = 16.0;

pub fn init_logging() {
  let _ = env_logger::builder().is_test(true).try_init();
}

/// Engine with one fixed-advance face: ascent 12, descent -4
pub fn engine_with_face() -> (LayoutEngine, FontFaceHandle) {
  init_logging();
  let mut fonts = FixedAdvanceFontEngine::new();
  let face = fonts.add_face(FixedFace {
    metrics: FontMetrics::new(12.0, -4.0),
    advance: ADVANCE,
  });
  (LayoutEngine::new(Arc::new(fonts)), face)
}

pub fn engine() -> LayoutEngine {
  engine_with_face().0
}

pub fn sized(width: f32, height: f32) -> ComputedStyle {
  ComputedStyle {
    width: LengthPercentageAuto::px(width),
    height: LengthPercentageAuto::px(height),
    ..ComputedStyle::default()
  }
}

pub fn text_style(line_height: f32) -> ComputedStyle {
  ComputedStyle {
    line_height,
    ..ComputedStyle::default()
  }
}

pub fn format(engine: &LayoutEngine, elements: &mut ElementTree, root: ElementId, cb: Size) {
  engine
    .format_element(elements, root, cb)
    .expect("layout pass failed");
}

pub fn element(elements: &ElementTree, id: ElementId) -> &Element {
  elements.get(id).expect("element exists")
}

/// Border-box offset from the offset parent
pub fn offset(elements: &ElementTree, id: ElementId) -> Point {
  element(elements, id).relative_border_offset()
}

pub fn border_size(elements: &ElementTree, id: ElementId) -> Size {
  element(elements, id).layout_box().size(BoxArea::Border)
}

/// Every live element of the subtree rooted at `root`, depth first
pub fn subtree(elements: &ElementTree, root: ElementId) -> Vec<ElementId> {
  let mut out = Vec::new();
  let mut stack = vec![root];
  while let Some(id) = stack.pop() {
    if !elements.contains(id) {
      continue;
    }
    out.push(id);
    stack.extend(elements.children(id).iter().rev().copied());
  }
  out
}
