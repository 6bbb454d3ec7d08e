#![no_main]

use arbitrary::Arbitrary;
use boxlayout::style::{
  ComputedStyle, Direction, FlexDirection, FlexWrap, LengthPercentage, LengthPercentageAuto,
};
use boxlayout::text::{FixedAdvanceFontEngine, FixedFace, FontMetrics};
use boxlayout::{BoxArea, ElementTree, LayoutEngine, Size};
use libfuzzer_sys::fuzz_target;
use std::sync::Arc;

const MAX_NODES: usize = 64;

#[derive(Arbitrary, Debug)]
struct NodeCase {
  parent: u8,
  width: Option<f32>,
  height: Option<f32>,
  padding: f32,
  column: bool,
  wrap: bool,
  rtl: bool,
  text: Option<String>,
}

#[derive(Arbitrary, Debug)]
struct LayoutCase {
  width: f32,
  height: f32,
  nodes: Vec<NodeCase>,
}

/// Keeps style lengths in a range the solver is expected to handle
fn finite(value: f32) -> f32 {
  if value.is_finite() {
    value.clamp(-1.0e6, 1.0e6)
  } else {
    0.0
  }
}

fn length(value: Option<f32>) -> LengthPercentageAuto {
  value.map_or(LengthPercentageAuto::Auto, |v| LengthPercentageAuto::px(finite(v)))
}

fuzz_target!(|case: LayoutCase| {
  let mut fonts = FixedAdvanceFontEngine::new();
  let face = fonts.add_face(FixedFace {
    metrics: FontMetrics::new(10.0, -3.0),
    advance: 6.0,
  });
  let engine = LayoutEngine::new(Arc::new(fonts));

  let mut elements = ElementTree::new();
  let root = elements.create_element(ComputedStyle::default());
  let mut ids = vec![root];
  for node in case.nodes.iter().take(MAX_NODES) {
    let mut style = ComputedStyle {
      width: length(node.width),
      height: length(node.height),
      flex_direction: if node.column {
        FlexDirection::Column
      } else {
        FlexDirection::Row
      },
      flex_wrap: if node.wrap { FlexWrap::Wrap } else { FlexWrap::NoWrap },
      direction: if node.rtl { Direction::Rtl } else { Direction::Auto },
      ..ComputedStyle::default()
    };
    style.set_padding(LengthPercentage::px(finite(node.padding).abs()));
    let id = match &node.text {
      Some(text) => elements.create_text(style, text.as_str(), Some(face)),
      None => elements.create_element(style),
    };
    let parent = ids[node.parent as usize % ids.len()];
    let _ = elements.append_child(parent, id);
    ids.push(id);
  }

  let containing_block = Size::new(case.width, case.height);
  if engine
    .format_element(&mut elements, root, containing_block)
    .is_err()
  {
    return;
  }
  for &id in &ids {
    if let Some(element) = elements.get(id) {
      let content = element.layout_box().size(BoxArea::Content);
      assert!(!(content.width < 0.0) && !(content.height < 0.0));
    }
  }
});
