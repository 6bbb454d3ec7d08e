use super::common::{
  border_size, element, engine, engine_with_face, format, offset, sized, ADVANCE,
};
use boxlayout::layout::{build_box_for_style, AUTO_SIZE};
use boxlayout::style::{BoxSizing, ComputedStyle, LengthPercentage, LengthPercentageAuto};
use boxlayout::{build_box, BoxArea, BuildBoxMode, EdgeOffsets, ElementTree, Point, Size};

const CB: Size = Size {
  width: 800.0,
  height: 600.0,
};

fn border_box(width: f32, height: f32) -> ComputedStyle {
  let mut style = ComputedStyle {
    box_sizing: BoxSizing::BorderBox,
    ..sized(width, height)
  };
  style.set_padding(LengthPercentage::px(10.0));
  style.set_border_width(5.0);
  style
}

#[test]
fn box_areas_nest() {
  let mut elements = ElementTree::new();
  let mut style = sized(100.0, 40.0);
  style.set_padding(LengthPercentage::px(4.0));
  style.set_border_width(1.0);
  style.set_margin(LengthPercentageAuto::px(3.0));
  let root = elements.create_element(style);

  format(&engine(), &mut elements, root, CB);

  let b = element(&elements, root).layout_box();
  for (inner, outer) in [
    (BoxArea::Content, BoxArea::Padding),
    (BoxArea::Padding, BoxArea::Border),
    (BoxArea::Border, BoxArea::Margin),
  ] {
    let edges = b.edges(outer);
    let inner_size = b.size(inner);
    let outer_size = b.size(outer);
    assert_eq!(outer_size.width, inner_size.width + edges.horizontal());
    assert_eq!(outer_size.height, inner_size.height + edges.vertical());
  }
  assert_eq!(b.size(BoxArea::Margin), Size::new(116.0, 56.0));
  assert_eq!(b.position(BoxArea::Content), Point::new(5.0, 5.0));
}

#[test]
fn border_box_sizing_agrees_with_layout_pass() {
  let style = border_box(100.0, 60.0);
  let built = build_box_for_style(CB, &style, BuildBoxMode::Block);

  let mut elements = ElementTree::new();
  let root = elements.create_element(style);
  format(&engine(), &mut elements, root, CB);
  let laid_out = element(&elements, root).layout_box();

  assert_eq!(built.content, Size::new(70.0, 30.0));
  assert_eq!(laid_out.content, built.content);
  assert_eq!(laid_out.padding, built.padding);
  assert_eq!(laid_out.border, built.border);
  assert_eq!(laid_out.size(BoxArea::Border), Size::new(100.0, 60.0));
}

#[test]
fn content_box_sizing_adds_edges() {
  let mut style = border_box(100.0, 60.0);
  style.box_sizing = BoxSizing::ContentBox;

  let mut elements = ElementTree::new();
  let root = elements.create_element(style);
  format(&engine(), &mut elements, root, CB);

  assert_eq!(border_size(&elements, root), Size::new(130.0, 90.0));
}

#[test]
fn auto_margins_center_in_block_mode() {
  let style = ComputedStyle {
    margin_left: LengthPercentageAuto::Auto,
    margin_right: LengthPercentageAuto::Auto,
    ..sized(100.0, 20.0)
  };
  let b = build_box_for_style(Size::new(300.0, 100.0), &style, BuildBoxMode::Block);
  assert_eq!((b.margin.left, b.margin.right), (100.0, 100.0));

  // Flex auto margins absorb the same free space during a pass
  let mut elements = ElementTree::new();
  let root = elements.create_element(sized(300.0, 100.0));
  let child = elements.create_element(style);
  elements.append_child(root, child).unwrap();
  format(&engine(), &mut elements, root, CB);
  assert_eq!(offset(&elements, child).x, 100.0);
}

#[test]
fn max_size_sentinel_is_ignored() {
  let style = ComputedStyle {
    max_width: LengthPercentage::px(1.0e20),
    ..sized(500.0, 10.0)
  };
  let b = build_box_for_style(CB, &style, BuildBoxMode::Block);
  assert_eq!(b.content.width, 500.0);

  let mut elements = ElementTree::new();
  let root = elements.create_element(style);
  format(&engine(), &mut elements, root, CB);
  assert_eq!(border_size(&elements, root).width, 500.0);
}

#[test]
fn real_max_size_clamps() {
  let mut elements = ElementTree::new();
  let root = elements.create_element(ComputedStyle {
    max_width: LengthPercentage::percent(25.0),
    ..sized(500.0, 10.0)
  });
  format(&engine(), &mut elements, root, CB);
  assert_eq!(border_size(&elements, root).width, 200.0);
}

#[test]
fn auto_size_root_stretches_to_block_height() {
  let engine = engine();
  let mut elements = ElementTree::new();
  let root = elements.create_element(ComputedStyle::default());

  format(&engine, &mut elements, root, CB);
  assert_eq!(border_size(&elements, root), Size::new(0.0, 600.0));
  assert_eq!(element(&elements, root).scrollable_overflow(), Size::new(0.0, 600.0));

  let child = elements.create_element(sized(120.0, 30.0));
  elements.append_child(root, child).unwrap();
  format(&engine, &mut elements, root, CB);
  assert_eq!(border_size(&elements, root), Size::new(120.0, 600.0));
  assert_eq!(offset(&elements, root), Point::ZERO);
}

#[test]
fn auto_size_text_root_takes_its_line_width() {
  let (engine, face) = engine_with_face();
  let mut elements = ElementTree::new();
  let root = elements.create_text(ComputedStyle::default(), "hello", Some(face));

  format(&engine, &mut elements, root, CB);

  assert_eq!(border_size(&elements, root), Size::new(5.0 * ADVANCE, 600.0));
  assert_eq!(element(&elements, root).lines().len(), 1);
}

#[test]
fn build_box_reads_element_style() {
  let mut elements = ElementTree::new();
  let mut style = sized(50.0, 50.0);
  style.set_margin(LengthPercentageAuto::percent(10.0));
  let id = elements.create_element(style);

  let block = build_box(Size::new(200.0, 100.0), elements.get(id), BuildBoxMode::Block);
  assert_eq!(block.margin, EdgeOffsets::all(20.0));
  assert_eq!(block.content, Size::new(50.0, 50.0));

  let inline = build_box(Size::new(200.0, 100.0), elements.get(id), BuildBoxMode::Inline);
  assert_eq!(inline.content, Size::new(AUTO_SIZE, AUTO_SIZE));
  assert_eq!(inline.margin, EdgeOffsets::new(20.0, 0.0, 20.0, 0.0));

  let missing = build_box(Size::new(200.0, 100.0), None, BuildBoxMode::Block);
  assert_eq!(missing.content, Size::new(200.0, 100.0));
  assert_eq!(missing.margin, EdgeOffsets::ZERO);
}
