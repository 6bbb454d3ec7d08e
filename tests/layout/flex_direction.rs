use super::common::{border_size, engine, format, offset, sized};
use boxlayout::style::{
  AlignContent, ComputedStyle, Direction, Display, FlexDirection, FlexWrap, JustifyContent,
  LengthPercentage, LengthPercentageAuto, Position,
};
use boxlayout::{BoxArea, ElementTree, Point, Size};

const CB: Size = Size {
  width: 800.0,
  height: 600.0,
};

#[test]
fn row_children_flow_left_to_right() {
  let mut elements = ElementTree::new();
  let root = elements.create_element(sized(300.0, 100.0));
  let a = elements.create_element(sized(50.0, 20.0));
  let b = elements.create_element(sized(70.0, 30.0));
  elements.append_child(root, a).unwrap();
  elements.append_child(root, b).unwrap();

  format(&engine(), &mut elements, root, CB);

  assert_eq!(offset(&elements, root), Point::ZERO);
  assert_eq!(offset(&elements, a), Point::new(0.0, 0.0));
  assert_eq!(offset(&elements, b), Point::new(50.0, 0.0));
  assert_eq!(border_size(&elements, b), Size::new(70.0, 30.0));
  let b_element = elements.get(b).unwrap();
  assert_eq!(b_element.offset_parent(), Some(root));
}

#[test]
fn column_children_stack_and_stretch() {
  let mut elements = ElementTree::new();
  let root = elements.create_element(ComputedStyle {
    flex_direction: FlexDirection::Column,
    ..sized(300.0, 200.0)
  });
  let a = elements.create_element(ComputedStyle {
    height: LengthPercentageAuto::px(20.0),
    ..ComputedStyle::default()
  });
  let b = elements.create_element(ComputedStyle {
    height: LengthPercentageAuto::px(30.0),
    ..ComputedStyle::default()
  });
  elements.append_child(root, a).unwrap();
  elements.append_child(root, b).unwrap();

  format(&engine(), &mut elements, root, CB);

  assert_eq!(offset(&elements, a), Point::new(0.0, 0.0));
  assert_eq!(offset(&elements, b), Point::new(0.0, 20.0));
  assert_eq!(border_size(&elements, a), Size::new(300.0, 20.0));
  assert_eq!(border_size(&elements, b), Size::new(300.0, 30.0));
}

#[test]
fn auto_size_root_takes_content_width() {
  let mut elements = ElementTree::new();
  let root = elements.create_element(ComputedStyle::default());
  let child = elements.create_element(sized(40.0, 25.0));
  elements.append_child(root, child).unwrap();

  format(&engine(), &mut elements, root, CB);

  assert_eq!(offset(&elements, root), Point::ZERO);
  assert_eq!(border_size(&elements, root), Size::new(40.0, 600.0));
}

#[test]
fn rtl_root_sits_against_the_right_edge() {
  let mut elements = ElementTree::new();
  let root = elements.create_element(ComputedStyle {
    direction: Direction::Rtl,
    ..ComputedStyle::default()
  });
  let child = elements.create_element(sized(40.0, 25.0));
  elements.append_child(root, child).unwrap();

  format(&engine(), &mut elements, root, CB);

  assert_eq!(border_size(&elements, root), Size::new(40.0, 600.0));
  assert_eq!(offset(&elements, root), Point::new(760.0, 0.0));
  assert_eq!(offset(&elements, child), Point::ZERO);
}

#[test]
fn rtl_row_starts_from_the_right() {
  let mut elements = ElementTree::new();
  let root = elements.create_element(ComputedStyle {
    direction: Direction::Rtl,
    ..sized(300.0, 100.0)
  });
  let a = elements.create_element(sized(50.0, 20.0));
  let b = elements.create_element(sized(70.0, 20.0));
  elements.append_child(root, a).unwrap();
  elements.append_child(root, b).unwrap();

  format(&engine(), &mut elements, root, CB);

  assert_eq!(offset(&elements, a), Point::new(250.0, 0.0));
  assert_eq!(offset(&elements, b), Point::new(180.0, 0.0));
}

#[test]
fn rtl_is_inherited_by_nested_rows() {
  let mut elements = ElementTree::new();
  let root = elements.create_element(ComputedStyle {
    direction: Direction::Rtl,
    flex_direction: FlexDirection::Column,
    ..sized(300.0, 100.0)
  });
  let row = elements.create_element(ComputedStyle {
    height: LengthPercentageAuto::px(20.0),
    ..ComputedStyle::default()
  });
  let item = elements.create_element(sized(40.0, 20.0));
  elements.append_child(root, row).unwrap();
  elements.append_child(row, item).unwrap();

  format(&engine(), &mut elements, root, CB);

  assert_eq!(border_size(&elements, row).width, 300.0);
  assert_eq!(offset(&elements, item), Point::new(260.0, 0.0));
}

#[test]
fn explicit_ltr_overrides_rtl_parent() {
  let mut elements = ElementTree::new();
  let root = elements.create_element(ComputedStyle {
    direction: Direction::Rtl,
    flex_direction: FlexDirection::Column,
    ..sized(300.0, 100.0)
  });
  let row = elements.create_element(ComputedStyle {
    direction: Direction::Ltr,
    height: LengthPercentageAuto::px(20.0),
    ..ComputedStyle::default()
  });
  let item = elements.create_element(sized(40.0, 20.0));
  elements.append_child(root, row).unwrap();
  elements.append_child(row, item).unwrap();

  format(&engine(), &mut elements, root, CB);

  assert_eq!(offset(&elements, item), Point::new(0.0, 0.0));
}

#[test]
fn flex_grow_takes_free_space() {
  let mut elements = ElementTree::new();
  let root = elements.create_element(sized(300.0, 50.0));
  let fixed = elements.create_element(sized(100.0, 50.0));
  let grow = elements.create_element(ComputedStyle {
    flex_grow: 1.0,
    ..ComputedStyle::default()
  });
  elements.append_child(root, fixed).unwrap();
  elements.append_child(root, grow).unwrap();

  format(&engine(), &mut elements, root, CB);

  assert_eq!(offset(&elements, grow), Point::new(100.0, 0.0));
  assert_eq!(border_size(&elements, grow), Size::new(200.0, 50.0));
}

#[test]
fn justify_center_and_gap() {
  let mut elements = ElementTree::new();
  let root = elements.create_element(ComputedStyle {
    justify_content: JustifyContent::Center,
    column_gap: LengthPercentage::px(10.0),
    ..sized(300.0, 50.0)
  });
  let a = elements.create_element(sized(50.0, 10.0));
  let b = elements.create_element(sized(50.0, 10.0));
  elements.append_child(root, a).unwrap();
  elements.append_child(root, b).unwrap();

  format(&engine(), &mut elements, root, CB);

  // 300 - (50 + 10 + 50) = 190 free, 95 on each side
  assert_eq!(offset(&elements, a), Point::new(95.0, 0.0));
  assert_eq!(offset(&elements, b), Point::new(155.0, 0.0));
}

#[test]
fn wrap_moves_overflowing_items_to_next_line() {
  let mut elements = ElementTree::new();
  let root = elements.create_element(ComputedStyle {
    flex_wrap: FlexWrap::Wrap,
    align_content: AlignContent::FlexStart,
    width: LengthPercentageAuto::px(100.0),
    ..ComputedStyle::default()
  });
  let items: Vec<_> = (0..3)
    .map(|_| elements.create_element(sized(40.0, 10.0)))
    .collect();
  for &item in &items {
    elements.append_child(root, item).unwrap();
  }

  format(&engine(), &mut elements, root, CB);

  assert_eq!(offset(&elements, items[0]), Point::new(0.0, 0.0));
  assert_eq!(offset(&elements, items[1]), Point::new(40.0, 0.0));
  assert_eq!(offset(&elements, items[2]), Point::new(0.0, 10.0));
  // The root's height is stretched to the containing block
  assert_eq!(border_size(&elements, root), Size::new(100.0, 600.0));
}

#[test]
fn padding_and_border_offset_children() {
  let mut elements = ElementTree::new();
  let mut root_style = sized(200.0, 100.0);
  root_style.set_padding(LengthPercentage::px(10.0));
  root_style.set_border_width(4.0);
  let root = elements.create_element(root_style);
  let mut middle_style = sized(100.0, 50.0);
  middle_style.set_padding(LengthPercentage::px(5.0));
  let middle = elements.create_element(middle_style);
  let leaf = elements.create_element(sized(10.0, 10.0));
  elements.append_child(root, middle).unwrap();
  elements.append_child(middle, leaf).unwrap();

  format(&engine(), &mut elements, root, CB);

  let root_box = elements.get(root).unwrap().layout_box();
  assert_eq!(root_box.content, Size::new(200.0, 100.0));
  assert_eq!(root_box.position(BoxArea::Content), Point::new(14.0, 14.0));
  assert_eq!(offset(&elements, middle), Point::new(14.0, 14.0));
  assert_eq!(offset(&elements, leaf), Point::new(5.0, 5.0));
  assert_eq!(
    elements.absolute_offset(leaf, BoxArea::Border),
    Some(Point::new(19.0, 19.0))
  );
  assert_eq!(
    elements.absolute_offset(leaf, BoxArea::Content),
    Some(Point::new(19.0, 19.0))
  );
}

#[test]
fn percentage_sizes_resolve_against_parent() {
  let mut elements = ElementTree::new();
  let root = elements.create_element(sized(400.0, 200.0));
  let mut child_style = ComputedStyle {
    width: LengthPercentageAuto::percent(50.0),
    height: LengthPercentageAuto::percent(25.0),
    ..ComputedStyle::default()
  };
  child_style.padding_top = LengthPercentage::percent(10.0);
  let child = elements.create_element(child_style);
  elements.append_child(root, child).unwrap();

  format(&engine(), &mut elements, root, CB);

  let child_box = elements.get(child).unwrap().layout_box();
  assert_eq!(child_box.content.width, 200.0);
  // Vertical padding percentages resolve against the width
  assert_eq!(child_box.padding.top, 40.0);
}

#[test]
fn display_none_child_collapses() {
  let mut elements = ElementTree::new();
  let root = elements.create_element(sized(300.0, 50.0));
  let hidden = elements.create_element(ComputedStyle {
    display: Display::None,
    ..sized(80.0, 80.0)
  });
  let shown = elements.create_element(sized(30.0, 30.0));
  elements.append_child(root, hidden).unwrap();
  elements.append_child(root, shown).unwrap();

  format(&engine(), &mut elements, root, CB);

  assert_eq!(border_size(&elements, hidden), Size::ZERO);
  assert_eq!(offset(&elements, shown), Point::new(0.0, 0.0));
}

#[test]
fn absolute_child_uses_insets() {
  let mut elements = ElementTree::new();
  let root = elements.create_element(sized(300.0, 300.0));
  let flow = elements.create_element(sized(100.0, 100.0));
  let abs = elements.create_element(ComputedStyle {
    position: Position::Absolute,
    left: LengthPercentageAuto::px(20.0),
    top: LengthPercentageAuto::px(30.0),
    ..sized(10.0, 10.0)
  });
  elements.append_child(root, flow).unwrap();
  elements.append_child(root, abs).unwrap();

  format(&engine(), &mut elements, root, CB);

  assert_eq!(offset(&elements, abs), Point::new(20.0, 30.0));
  assert_eq!(offset(&elements, flow), Point::new(0.0, 0.0));
}

#[test]
fn fixed_position_behaves_like_absolute() {
  let mut elements = ElementTree::new();
  let root = elements.create_element(sized(300.0, 300.0));
  let fixed = elements.create_element(ComputedStyle {
    position: Position::Fixed,
    right: LengthPercentageAuto::px(0.0),
    bottom: LengthPercentageAuto::px(0.0),
    ..sized(10.0, 10.0)
  });
  elements.append_child(root, fixed).unwrap();

  format(&engine(), &mut elements, root, CB);

  assert_eq!(offset(&elements, fixed), Point::new(290.0, 290.0));
}

#[test]
fn removed_children_are_skipped() {
  let mut elements = ElementTree::new();
  let root = elements.create_element(sized(300.0, 50.0));
  let a = elements.create_element(sized(50.0, 10.0));
  let gone = elements.create_element(sized(50.0, 10.0));
  let b = elements.create_element(sized(50.0, 10.0));
  for child in [a, gone, b] {
    elements.append_child(root, child).unwrap();
  }
  elements.remove(gone).unwrap();

  format(&engine(), &mut elements, root, CB);

  assert_eq!(offset(&elements, b), Point::new(50.0, 0.0));
}
